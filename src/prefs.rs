//! Theme preference persistence
//!
//! Handles the `.skillmap.toml` preferences file. The file holds exactly
//! one durable value, the theme mode, under the fixed `theme` key. The
//! store is a best-effort cache, not a transactional one: reads fail soft
//! to the light default and writes never surface errors to the caller.

use crate::theme::Mode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// Default preferences file name
const PREFS_FILE_NAME: &str = ".skillmap.toml";

/// Persisted preferences
///
/// The theme value serializes as the literal `"light"` or `"dark"`. A
/// missing key deserializes to the light default; an unrecognized value
/// fails the parse, which the store treats as "no preference".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preferences {
    /// Theme mode: "light" or "dark"
    #[serde(default)]
    pub theme: Mode,
}

/// Durable store for the theme preference
///
/// The trait is the seam the toggle controller talks through; tests mock
/// it to verify call ordering without touching the filesystem.
#[cfg_attr(test, automock)]
pub trait PreferenceStore {
    /// Read the persisted mode; absent or unreadable means light
    fn load(&self) -> Mode;

    /// Overwrite the persisted mode; best-effort, errors are swallowed
    fn save(&self, mode: Mode);
}

/// File-backed preference store
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store backed by `.skillmap.toml` in the current directory
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(PREFS_FILE_NAME),
        }
    }

    /// Store backed by a specific path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read, for callers that want to report what went wrong
    pub fn load_prefs(&self) -> Result<Preferences> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences file: {}", self.path.display()))?;

        let prefs: Preferences = toml::from_str(&content)
            .with_context(|| format!("Failed to parse preferences file: {}", self.path.display()))?;

        Ok(prefs)
    }

    /// Strict write, for the CLI path
    pub fn save_prefs(&self, prefs: &Preferences) -> Result<()> {
        let content =
            toml::to_string_pretty(prefs).context("Failed to serialize preferences")?;

        fs::write(&self.path, content).with_context(|| {
            format!("Failed to write preferences file: {}", self.path.display())
        })?;

        Ok(())
    }

    /// Generate a default preferences file
    ///
    /// Refuses to overwrite an existing file unless `force` is set.
    pub fn generate_default(&self, force: bool) -> Result<()> {
        if self.path.exists() && !force {
            anyhow::bail!(
                "Preferences file already exists: {} (use --force to overwrite)",
                self.path.display()
            );
        }
        self.save_prefs(&Preferences::default())
    }
}

impl Default for FilePreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Mode {
        // Any storage failure is "no preference stored".
        self.load_prefs().map(|p| p.theme).unwrap_or_default()
    }

    fn save(&self, mode: Mode) {
        let _ = self.save_prefs(&Preferences { theme: mode });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_missing_file_defaults_to_light() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::at(dir.path().join(".skillmap.toml"));
        assert_eq!(store.load(), Mode::Light);
    }

    #[test]
    fn test_load_absent_key_defaults_to_light() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "# no theme key here").unwrap();

        let store = FilePreferenceStore::at(temp_file.path());
        assert_eq!(store.load(), Mode::Light);
    }

    #[test]
    fn test_load_unrecognized_value_defaults_to_light() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"theme = "sepia""#).unwrap();

        let store = FilePreferenceStore::at(temp_file.path());
        assert_eq!(store.load(), Mode::Light);
    }

    #[test]
    fn test_load_garbage_defaults_to_light() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "{{{{ not toml").unwrap();

        let store = FilePreferenceStore::at(temp_file.path());
        assert_eq!(store.load(), Mode::Light);
    }

    #[test]
    fn test_load_dark() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, r#"theme = "dark""#).unwrap();

        let store = FilePreferenceStore::at(temp_file.path());
        assert_eq!(store.load(), Mode::Dark);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".skillmap.toml");

        let store = FilePreferenceStore::at(&path);
        store.save(Mode::Dark);
        assert_eq!(store.load(), Mode::Dark);

        // Simulated fresh load: a brand-new store over the same file.
        let reloaded = FilePreferenceStore::at(&path);
        assert_eq!(reloaded.load(), Mode::Dark);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::at(dir.path().join(".skillmap.toml"));

        store.save(Mode::Dark);
        store.save(Mode::Light);
        assert_eq!(store.load(), Mode::Light);
    }

    #[test]
    fn test_save_to_unwritable_path_is_silent() {
        let store = FilePreferenceStore::at("/nonexistent-dir/prefs.toml");
        // Must not panic; the worst failure mode is "did not persist".
        store.save(Mode::Dark);
        assert_eq!(store.load(), Mode::Light);
    }

    #[test]
    fn test_persisted_literal_is_lowercase() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".skillmap.toml");
        let store = FilePreferenceStore::at(&path);

        store.save(Mode::Dark);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(r#"theme = "dark""#));
    }

    #[test]
    fn test_generate_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".skillmap.toml");
        let store = FilePreferenceStore::at(&path);

        store.generate_default(false).unwrap();
        assert_eq!(store.load_prefs().unwrap().theme, Mode::Light);

        // Second run without force refuses to clobber.
        assert!(store.generate_default(false).is_err());
        assert!(store.generate_default(true).is_ok());
    }
}
