//! skillmap - Terminal browser for the LearnAI roadmap
//!
//! Presents a sectioned catalog of learning cards in either a light or
//! dark theme, and persists the chosen mode across runs.
//!
//! # Modules
//!
//! - [`theme`] - Mode enum, the two palettes, and the process-wide mode
//! - [`surface`] - Flat document of categorized, styleable elements
//! - [`applier`] - One-pass style sync of themed surfaces
//! - [`prefs`] - Durable theme preference in `.skillmap.toml`
//! - [`toggle`] - Theme toggle wiring the applier and store together
//! - [`content`] - Catalog model and the built-in roadmap content
//! - [`search`] - Query and category filtering over cards
//! - [`effects`] - Decorative reveal and ripple animations

pub mod app;
pub mod applier;
pub mod cli;
pub mod commands;
pub mod content;
pub mod effects;
pub mod prefs;
pub mod search;
pub mod surface;
pub mod theme;
pub mod toggle;
pub mod tui;

// Re-export commonly used types
pub use app::App;
pub use content::Catalog;
pub use prefs::{FilePreferenceStore, PreferenceStore, Preferences};
pub use surface::{Document, Element, SurfaceCategory};
pub use theme::{Mode, Palette};
pub use toggle::ToggleController;
