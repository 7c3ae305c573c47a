// ============================================================================
// Calculator Configuration
// Startup configuration, resolved once and passed down to the calculator
// ============================================================================

use super::state::CalculatorMode;
use crate::interfaces::ThemeStore;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Theme
// ============================================================================

/// Colour scheme preference
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to the preference store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {:?}", other)),
        }
    }
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Colour scheme in effect at startup
    pub theme: Theme,

    /// Panel shown when the calculator opens
    pub initial_mode: CalculatorMode,
}

impl CalculatorConfig {
    pub fn new(theme: Theme, initial_mode: CalculatorMode) -> Self {
        Self {
            theme,
            initial_mode,
        }
    }

    /// Builder method: Set theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Builder method: Set initial mode
    pub fn with_initial_mode(mut self, mode: CalculatorMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Only a saved "dark" selects the dark theme. Any other saved value,
    /// recognised or not, means light; with nothing saved, follow the system.
    pub fn resolve_theme(saved: Option<&str>, prefers_dark: bool) -> Theme {
        match saved {
            Some(raw) => match raw.parse::<Theme>() {
                Ok(theme) => theme,
                Err(e) => {
                    tracing::warn!(value = raw, "unrecognised saved theme, using light: {}", e);
                    Theme::Light
                },
            },
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    /// Build the startup configuration from the preference store.
    pub fn load(store: &dyn ThemeStore, prefers_dark: bool) -> Self {
        let saved = store.load();
        let theme = Self::resolve_theme(saved.as_deref(), prefers_dark);
        tracing::debug!(?saved, prefers_dark, %theme, "resolved theme preference");
        Self::default().with_theme(theme)
    }
}

#[cfg(feature = "serde")]
impl CalculatorConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid configuration: {}", e))
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Could not serialize configuration: {}", e))
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Dark theme, bitwise panel
    pub fn bitwise_dark() -> Self {
        Self::new(Theme::Dark, CalculatorMode::Bitwise)
    }

    /// Light theme, conversion panel
    pub fn conversion_light() -> Self {
        Self::new(Theme::Light, CalculatorMode::Conversion)
    }
}
