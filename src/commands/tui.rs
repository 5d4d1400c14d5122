//! TUI command implementation

use crate::app::{App, AppMode};
use crate::content::Catalog;
use crate::prefs::FilePreferenceStore;
use crate::tui::{handle_keybinding, handle_search_input, ui};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Hide,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Run the TUI application
pub fn run_tui(content: Option<PathBuf>) -> Result<()> {
    // Load the catalog
    let catalog = match content {
        Some(path) => Catalog::load_from(&path)?,
        None => Catalog::builtin(),
    };

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    execute!(
        stdout,
        crossterm::terminal::SetTitle("skillmap - LearnAI roadmap")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize app; this replays the stored theme preference.
    let mut app = App::new(catalog, Box::new(FilePreferenceStore::new()));

    // Main loop
    loop {
        // Draw
        terminal.draw(|f| ui(f, &mut app))?;

        // Poll events (16ms ≈ 60fps)
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.mode {
                        AppMode::Search => handle_search_input(&mut app, key.code),
                        AppMode::Browse => {
                            handle_keybinding(&mut app, key.modifiers, key.code);
                        }
                    }
                }
            }
        }

        // Advance reveal and ripple animations
        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        crossterm::cursor::Show,
        LeaveAlternateScreen
    )?;

    Ok(())
}
