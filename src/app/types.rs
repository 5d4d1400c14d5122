//! Application types and state structures

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal mode - browsing sections and cards
    #[default]
    Browse,
    /// Search mode - keystrokes edit the query
    Search,
}

/// Rows one card occupies in the card list
pub const CARD_ROWS: u16 = 3;
