//! Input handling for TUI

use crate::app::App;
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;

/// Handle a key press in browse mode, returns true if handled
pub fn handle_keybinding(app: &mut App, modifiers: KeyModifiers, code: KeyCode) -> bool {
    match (modifiers, code) {
        // q (with or without Ctrl): Quit
        (_, KeyCode::Char('q' | 'Q')) => {
            app.should_quit = true;
            true
        }
        // t: Toggle theme
        (_, KeyCode::Char('t' | 'T')) => {
            app.toggle_theme();
            true
        }
        // /: Enter search mode
        (_, KeyCode::Char('/')) => {
            app.enter_search();
            true
        }
        // Ctrl+C: Quit
        (KeyModifiers::CONTROL, KeyCode::Char('c' | 'C')) => {
            app.should_quit = true;
            true
        }
        // c: Cycle category filter
        (_, KeyCode::Char('c' | 'C')) => {
            app.cycle_filter();
            true
        }
        // Esc: Clear an active query
        (_, KeyCode::Esc) => {
            if !app.filter.query().is_empty() {
                app.clear_search();
            }
            true
        }
        // Tab / Right / l: Next section
        (_, KeyCode::Tab | KeyCode::Right | KeyCode::Char('l')) => {
            app.next_tab();
            true
        }
        // Shift+Tab / Left / h: Previous section
        (_, KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h')) => {
            app.prev_tab();
            true
        }
        // 1-9: Switch to section by number
        (_, KeyCode::Char(c)) if ('1'..='9').contains(&c) => {
            let index = (c as usize) - ('1' as usize);
            app.switch_to(index);
            true
        }
        // Down / j: Next card
        (_, KeyCode::Down | KeyCode::Char('j')) => {
            app.select_next();
            true
        }
        // Up / k: Previous card
        (_, KeyCode::Up | KeyCode::Char('k')) => {
            app.select_prev();
            true
        }
        // Enter: Activate the selected card (ripple feedback)
        (_, KeyCode::Enter) => {
            app.activate_selected(Instant::now());
            true
        }
        _ => false,
    }
}

/// Handle a key press while editing the search query
pub fn handle_search_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => {
            app.clear_search();
        }
        KeyCode::Enter => {
            app.exit_search();
        }
        KeyCode::Backspace => {
            app.filter.pop_char();
            app.clamp_selection();
        }
        KeyCode::Char(c) => {
            app.filter.push_char(c);
            app.clamp_selection();
        }
        _ => {}
    }
}
