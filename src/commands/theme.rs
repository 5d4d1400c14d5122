//! Theme command implementation

use crate::cli::ThemeAction;
use crate::prefs::{FilePreferenceStore, PreferenceStore, Preferences};
use crate::theme::Mode;
use anyhow::Result;

/// Run the theme command
///
/// `get` reads fail-soft like the TUI does; `set` and `toggle` write
/// strictly so a broken preferences file surfaces as an error instead of
/// being silently ignored.
pub fn run_theme(action: ThemeAction) -> Result<()> {
    let store = FilePreferenceStore::new();

    match action {
        ThemeAction::Get => {
            println!("{}", store.load());
        }
        ThemeAction::Set { mode } => {
            let parsed: Mode = mode.parse().map_err(|_| {
                anyhow::anyhow!("Unknown theme mode: '{mode}' (expected light or dark)")
            })?;
            store.save_prefs(&Preferences { theme: parsed })?;
            println!("Theme set to {parsed}");
        }
        ThemeAction::Toggle => {
            let next = store.load().toggled();
            store.save_prefs(&Preferences { theme: next })?;
            println!("Theme set to {next}");
        }
    }

    Ok(())
}
