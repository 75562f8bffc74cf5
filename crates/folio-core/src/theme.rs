//! Persisted dark/light preference.
//!
//! The preference lives in a key-value [`PreferenceStore`]. At startup the
//! stored value wins, then the system colour-scheme preference. Toggling
//! persists immediately; a store that fails to write is logged and the new
//! theme still applies.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use folio_types::{FolioError, Result, Theme};

// ---------------------------------------------------------------------------
// Preference stores
// ---------------------------------------------------------------------------

/// Client-local key-value persistence.
pub trait PreferenceStore {
    /// Read a value, `None` if the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a value.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store, for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry.
    pub fn with(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat TOML table on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let src = std::fs::read_to_string(&self.path)?;
        toml::from_str(&src)
            .map_err(|e| FolioError::Storage(format!("{}: {e}", self.path.display())))
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string(&values)?)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Theme controller
// ---------------------------------------------------------------------------

/// Owns the applied theme and its persistence.
pub struct ThemeController {
    theme: Theme,
    key: String,
    store: Box<dyn PreferenceStore>,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("theme", &self.theme)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Resolve the initial theme: stored value, else system preference.
    pub fn init(store: Box<dyn PreferenceStore>, key: &str, system_prefers_dark: bool) -> Self {
        let system = if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        };
        let theme = match store.load(key) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
                log::warn!("Ignoring stored theme: {e}");
                system
            }),
            Ok(None) => system,
            Err(e) => {
                log::warn!("Theme preference unreadable ({e}); using system preference");
                system
            },
        };
        log::info!("Initial theme: {theme}");
        Self {
            theme,
            key: key.to_string(),
            store,
        }
    }

    /// Flip the theme and persist it. Returns the theme to apply.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.save(&self.key, self.theme.as_str()) {
            log::warn!("Failed to persist theme preference: {e}");
        }
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>> {
            Err(FolioError::Storage("unavailable".into()))
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(FolioError::Storage("read-only".into()))
        }
    }

    #[test]
    fn stored_value_wins_over_system() {
        let tc = ThemeController::init(Box::new(MemoryStore::with("theme", "light")), "theme", true);
        assert_eq!(tc.theme(), Theme::Light);
    }

    #[test]
    fn system_preference_when_nothing_stored() {
        let dark = ThemeController::init(Box::new(MemoryStore::new()), "theme", true);
        assert_eq!(dark.theme(), Theme::Dark);
        let light = ThemeController::init(Box::new(MemoryStore::new()), "theme", false);
        assert_eq!(light.theme(), Theme::Light);
    }

    #[test]
    fn invalid_stored_value_falls_back() {
        let tc = ThemeController::init(Box::new(MemoryStore::with("theme", "sepia")), "theme", true);
        assert_eq!(tc.theme(), Theme::Dark);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        let mut tc = ThemeController::init(Box::new(FileStore::new(&path)), "theme", false);
        assert_eq!(tc.toggle(), Theme::Dark);

        // A fresh controller sees the persisted value.
        let reloaded = ThemeController::init(Box::new(FileStore::new(&path)), "theme", false);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn broken_store_still_toggles() {
        let mut tc = ThemeController::init(Box::new(BrokenStore), "theme", false);
        assert_eq!(tc.theme(), Theme::Light);
        assert_eq!(tc.toggle(), Theme::Dark);
        assert_eq!(tc.theme(), Theme::Dark);
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("none.toml"));
        assert_eq!(store.load("theme").unwrap(), None);
    }

    #[test]
    fn file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/prefs.toml"));
        store.save("lang", "en").unwrap();
        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("lang").unwrap().as_deref(), Some("en"));
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "theme = [").unwrap();
        let err = FileStore::new(&path).load("theme").unwrap_err();
        assert!(matches!(err, FolioError::Storage(_)));
    }
}
