//! Command implementations

pub mod init;
pub mod theme;
pub mod tui;

pub use init::run_init;
pub use theme::run_theme;
pub use tui::run_tui;
