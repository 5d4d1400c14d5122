//! Color theme module for skillmap
//!
//! Provides the two-valued theme selector (`Mode`) and the fixed light and
//! dark palettes. The palettes are the only source of themed colors in the
//! program; everything that paints a themed surface goes through them.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::RwLock;

// ==================== Mode Enum ====================

/// The two-valued theme selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Get the display name of the mode
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Light => "Light",
            Mode::Dark => "Dark",
        }
    }

    /// Get the ID string for this mode (the persisted literal)
    pub fn id(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// The other mode
    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    /// Get both modes
    pub fn all() -> &'static [Mode] {
        &[Mode::Light, Mode::Dark]
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            _ => Err(()),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ==================== Palette Struct ====================

/// Complete palette for one mode
///
/// The first four pairs are the themed-surface colors the applier writes
/// into the document. The remaining colors are chrome (tabs, borders,
/// accents) used directly by the renderer.
#[derive(Clone, Debug)]
pub struct Palette {
    /// Mode this palette belongs to
    pub mode: Mode,

    // ==================== Themed Surface Pairs ====================
    /// Document body text color
    pub body_fg: Color,
    /// Document body background
    pub body_bg: Color,
    /// Structural container text color
    pub container_fg: Color,
    /// Structural container background
    pub container_bg: Color,
    /// Card text color
    pub card_fg: Color,
    /// Card background
    pub card_bg: Color,
    /// Nested text block color
    pub text_fg: Color,
    /// Nested text block background
    pub text_bg: Color,

    // ==================== Chrome Colors ====================
    /// Accent color (titles, active tab)
    pub accent: Color,
    /// Primary border color
    pub border: Color,
    /// Muted border color
    pub border_muted: Color,
    /// Selection/highlight background
    pub highlight_bg: Color,
    /// Secondary text color
    pub text_secondary: Color,
    /// Muted text color
    pub text_muted: Color,
}

impl Palette {
    // ==================== Style Methods ====================

    /// Style for the active tab
    pub fn style_tab_active(&self) -> Style {
        Style::default()
            .fg(self.container_bg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for inactive tabs
    pub fn style_tab_inactive(&self) -> Style {
        Style::default().fg(self.text_secondary).bg(self.body_bg)
    }

    /// Style for primary borders
    pub fn style_border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for muted borders
    pub fn style_border_muted(&self) -> Style {
        Style::default().fg(self.border_muted)
    }

    /// Style for section titles
    pub fn style_title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for primary text
    pub fn style_text(&self) -> Style {
        Style::default().fg(self.body_fg)
    }

    /// Style for secondary text
    pub fn style_text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for muted text
    pub fn style_text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for key bindings in the help line
    pub fn style_key(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for key binding descriptions
    pub fn style_key_desc(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the selected card
    pub fn style_selected(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the search input
    pub fn style_input(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

// ==================== Palette Definitions ====================

/// Light palette - pale surfaces over the indigo site gradient
pub const LIGHT: Palette = Palette {
    mode: Mode::Light,
    body_fg: Color::Rgb(45, 55, 72),
    body_bg: Color::Rgb(102, 126, 234),
    container_fg: Color::Rgb(51, 51, 51),
    container_bg: Color::Rgb(248, 249, 252),
    card_fg: Color::Rgb(45, 55, 72),
    card_bg: Color::Rgb(247, 250, 252),
    text_fg: Color::Rgb(74, 85, 104),
    text_bg: Color::Rgb(240, 244, 248),
    accent: Color::Rgb(118, 75, 162),
    border: Color::Rgb(160, 174, 192),
    border_muted: Color::Rgb(203, 213, 224),
    highlight_bg: Color::Rgb(237, 242, 247),
    text_secondary: Color::Rgb(113, 128, 150),
    text_muted: Color::Rgb(160, 174, 192),
};

/// Dark palette - slate surfaces, high-contrast text
pub const DARK: Palette = Palette {
    mode: Mode::Dark,
    body_fg: Color::Rgb(226, 232, 240),
    body_bg: Color::Rgb(26, 32, 44),
    container_fg: Color::Rgb(226, 232, 240),
    container_bg: Color::Rgb(45, 55, 72),
    card_fg: Color::Rgb(226, 232, 240),
    card_bg: Color::Rgb(54, 65, 86),
    text_fg: Color::Rgb(226, 232, 240),
    text_bg: Color::Rgb(74, 85, 104),
    accent: Color::Rgb(144, 205, 244),
    border: Color::Rgb(74, 85, 104),
    border_muted: Color::Rgb(60, 70, 90),
    highlight_bg: Color::Rgb(74, 85, 104),
    text_secondary: Color::Rgb(160, 174, 192),
    text_muted: Color::Rgb(113, 128, 150),
};

// ==================== Global Mode Management ====================

/// Current mode
static CURRENT_MODE: RwLock<Mode> = RwLock::new(Mode::Light);

/// Get the Palette for a given Mode
pub fn palette_for(mode: Mode) -> &'static Palette {
    match mode {
        Mode::Light => &LIGHT,
        Mode::Dark => &DARK,
    }
}

/// Get the palette for the current mode
pub fn palette() -> &'static Palette {
    palette_for(current_mode())
}

/// Get the current mode
pub fn current_mode() -> Mode {
    *CURRENT_MODE.read().unwrap_or_else(|e| e.into_inner())
}

/// Set the global mode
///
/// Can be called multiple times to change the mode at runtime.
pub fn set_mode(mode: Mode) {
    match CURRENT_MODE.write() {
        Ok(mut guard) => *guard = mode,
        Err(e) => {
            // Recover from poisoned lock
            let mut guard = e.into_inner();
            *guard = mode;
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_mode_parse() {
        assert_eq!("light".parse::<Mode>().unwrap(), Mode::Light);
        assert_eq!("dark".parse::<Mode>().unwrap(), Mode::Dark);
        assert_eq!("LIGHT".parse::<Mode>().unwrap(), Mode::Light);
        assert_eq!("Dark".parse::<Mode>().unwrap(), Mode::Dark);
        assert!("midnight".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Light.to_string(), "light");
        assert_eq!(Mode::Dark.to_string(), "dark");
    }

    #[test]
    fn test_mode_default_is_light() {
        assert_eq!(Mode::default(), Mode::Light);
    }

    #[test]
    fn test_mode_toggled() {
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
        assert_eq!(Mode::Dark.toggled(), Mode::Light);
        assert_eq!(Mode::Light.toggled().toggled(), Mode::Light);
    }

    #[test]
    fn test_mode_all() {
        let all = Mode::all();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&Mode::Light));
        assert!(all.contains(&Mode::Dark));
    }

    #[test]
    fn test_light_palette_colors() {
        let p = &LIGHT;
        assert_eq!(p.mode, Mode::Light);
        assert!(matches!(p.body_bg, Color::Rgb(102, 126, 234)));
        assert!(matches!(p.card_bg, Color::Rgb(247, 250, 252)));
        assert!(matches!(p.body_fg, Color::Rgb(45, 55, 72)));
    }

    #[test]
    fn test_dark_palette_colors() {
        let p = &DARK;
        assert_eq!(p.mode, Mode::Dark);
        assert!(matches!(p.body_bg, Color::Rgb(26, 32, 44)));
        assert!(matches!(p.container_bg, Color::Rgb(45, 55, 72)));
        assert!(matches!(p.body_fg, Color::Rgb(226, 232, 240)));
    }

    #[test]
    fn test_palettes_differ_on_every_surface_pair() {
        // The two palettes must be distinguishable on each themed surface,
        // otherwise a toggle would be invisible somewhere.
        assert_ne!(LIGHT.body_bg, DARK.body_bg);
        assert_ne!(LIGHT.container_bg, DARK.container_bg);
        assert_ne!(LIGHT.card_bg, DARK.card_bg);
        assert_ne!(LIGHT.text_bg, DARK.text_bg);
        assert_ne!(LIGHT.body_fg, DARK.body_fg);
    }

    #[test]
    fn test_palette_for() {
        assert_eq!(palette_for(Mode::Light).mode, Mode::Light);
        assert_eq!(palette_for(Mode::Dark).mode, Mode::Dark);
    }

    #[test]
    #[serial]
    fn test_set_mode_switches_palette() {
        set_mode(Mode::Dark);
        assert_eq!(current_mode(), Mode::Dark);
        assert_eq!(palette().mode, Mode::Dark);

        set_mode(Mode::Light);
        assert_eq!(current_mode(), Mode::Light);
        assert_eq!(palette().mode, Mode::Light);
    }

    #[test]
    fn test_style_constructors() {
        let p = &LIGHT;
        let _ = p.style_tab_active();
        let _ = p.style_tab_inactive();
        let _ = p.style_border();
        let _ = p.style_border_muted();
        let _ = p.style_title();
        let _ = p.style_text();
        let _ = p.style_text_secondary();
        let _ = p.style_text_muted();
        let _ = p.style_key();
        let _ = p.style_key_desc();
        let _ = p.style_selected();
        let _ = p.style_input();
    }
}
