//! Theme selection and persistence
//!
//! The stored preference is read once at startup and rewritten on every
//! toggle. Only the literal stored value `"dark"` selects the dark
//! theme; a missing key or any other value falls back to light.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::store::PreferenceStore;

/// Key the theme preference is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve the startup theme from the store.
    pub fn from_store<S: PreferenceStore>(store: &S) -> Self {
        match store.get(THEME_KEY).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The value persisted to the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
