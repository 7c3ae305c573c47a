// ============================================================================
// Theme Store Interface
// Persistence seam for the single saved preference flag
// ============================================================================

use crate::domain::Theme;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Key the theme preference is stored under
pub const THEME_KEY: &str = "theme";

/// Where the theme preference lives between sessions
pub trait ThemeStore: Send + Sync {
    /// The raw saved value, or `None` if nothing is saved.
    ///
    /// Unrecognised values are returned as-is; resolving them is up to the caller.
    fn load(&self) -> Option<String>;

    fn save(&self, theme: Theme);

    /// The saved value if it names a theme
    fn saved_theme(&self) -> Option<Theme> {
        self.load()?.parse().ok()
    }
}

/// In-memory key-value store, e.g. for tests or a host without storage
#[derive(Default)]
pub struct MemoryThemeStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value under `key`, bypassing theme validation
    pub fn set_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().insert(key.into(), value.into());
    }

    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.get_raw(THEME_KEY)
    }

    fn save(&self, theme: Theme) {
        self.set_raw(THEME_KEY, theme.as_str());
    }
}
