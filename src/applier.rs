//! Theme applier
//!
//! The single writer of themed visual state. `apply` walks the live
//! document once and rewrites the color/background pair of every element
//! in a themed-surface category from the requested mode's palette. All
//! theme changes in the program funnel through here; nothing else writes
//! `fg`/`bg`, and this pass never touches motion properties or
//! decorative elements.

use crate::surface::{Document, SurfaceCategory};
use crate::theme::{self, Mode, Palette};
use ratatui::style::Color;

/// Themed-surface registry: the categories the applier targets.
///
/// Enumerated once; decorations are deliberately absent.
pub const THEMED_SURFACES: [SurfaceCategory; 4] = [
    SurfaceCategory::Body,
    SurfaceCategory::Container,
    SurfaceCategory::Card,
    SurfaceCategory::CardText,
];

/// The palette pair for a themed category, None for untargeted categories
fn surface_pair(palette: &Palette, category: SurfaceCategory) -> Option<(Color, Color)> {
    match category {
        SurfaceCategory::Body => Some((palette.body_fg, palette.body_bg)),
        SurfaceCategory::Container => Some((palette.container_fg, palette.container_bg)),
        SurfaceCategory::Card => Some((palette.card_fg, palette.card_bg)),
        SurfaceCategory::CardText => Some((palette.text_fg, palette.text_bg)),
        SurfaceCategory::Decoration => None,
    }
}

/// Synchronize the document (and chrome) to a mode in one pass
///
/// Idempotent: applying the same mode twice leaves every element in the
/// same state as applying it once. A document with zero themed elements
/// is a valid no-op, not an error. O(number of elements), synchronous,
/// meant to be invoked from a top-level event handler rather than from a
/// per-frame animation callback.
pub fn apply(doc: &mut Document, mode: Mode) {
    // Chrome (tabs, borders) reads the global palette; it changes at the
    // same instant as the document so no frame mixes the two modes.
    theme::set_mode(mode);

    let palette = theme::palette_for(mode);
    for category in THEMED_SURFACES {
        let Some((fg, bg)) = surface_pair(palette, category) else {
            continue;
        };
        for element in doc.by_category_mut(category) {
            element.fg = Some(fg);
            element.bg = Some(bg);
        }
    }
}
