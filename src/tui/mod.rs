//! TUI module - rendering and input handling

pub mod input;
pub mod render;

pub use input::{handle_keybinding, handle_search_input};
pub use render::ui;
