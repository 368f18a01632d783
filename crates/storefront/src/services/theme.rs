//! Theme preference.

use serde::{Deserialize, Serialize};

use crate::store::{KvStore, StoreError, keys};

/// Site color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Read and flip the persisted theme preference.
#[derive(Clone)]
pub struct ThemeService {
    store: KvStore,
}

impl ThemeService {
    /// Create a theme service over the given store.
    #[must_use]
    pub const fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// The current theme; `Light` until a preference is saved.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.store.get(keys::THEME, Theme::default())
    }

    /// Persist an explicit theme choice.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the preference fails.
    pub fn set(&self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(keys::THEME, &theme)
    }

    /// Flip the theme and persist the result.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the preference fails.
    pub fn toggle(&self) -> Result<Theme, StoreError> {
        let next = self.theme().toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_service() -> (ThemeService, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path()).unwrap();
        (ThemeService::new(store), dir)
    }

    #[test]
    fn test_default_is_light() {
        let (service, _dir) = test_service();
        assert_eq!(service.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let (service, dir) = test_service();

        assert_eq!(service.toggle().unwrap(), Theme::Dark);
        assert_eq!(service.theme(), Theme::Dark);

        // Survives a reopen
        let reopened = ThemeService::new(KvStore::open(dir.path()).unwrap());
        assert_eq!(reopened.theme(), Theme::Dark);

        assert_eq!(service.toggle().unwrap(), Theme::Light);
    }

    #[test]
    fn test_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
