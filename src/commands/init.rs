//! Init command implementation

use crate::prefs::FilePreferenceStore;
use anyhow::Result;

/// Run the init command
pub fn run_init(force: bool) -> Result<()> {
    let store = FilePreferenceStore::new();
    store.generate_default(force)?;
    println!("Created preferences file: {}", store.path().display());
    Ok(())
}
