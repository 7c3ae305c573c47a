// ============================================================================
// Calculator Factory
// Creates calculator sessions with proper configuration
// ============================================================================

use crate::domain::{CalculatorConfig, CalculatorMode, Theme};
use crate::engine::Calculator;
use crate::interfaces::{EventHandler, MemoryThemeStore, ThemeStore};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from an already-resolved configuration
///
/// # Example
/// ```
/// use binary_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::bitwise_dark();
/// let calc = create_from_config(config, Arc::new(MemoryThemeStore::new()), Arc::new(NoOpEventHandler));
/// assert_eq!(calc.mode(), CalculatorMode::Bitwise);
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    theme_store: Arc<dyn ThemeStore>,
    event_handler: Arc<dyn EventHandler>,
) -> Calculator {
    Calculator::new(config, theme_store, event_handler)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// Without an explicit theme, the theme is resolved from the store's saved
/// preference and the system dark-mode flag.
///
/// # Example
/// ```
/// use binary_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryThemeStore::new());
/// store.save(Theme::Dark);
///
/// let calc = CalculatorBuilder::new()
///     .with_theme_store(store)
///     .initial_mode(CalculatorMode::Conversion)
///     .build(Arc::new(NoOpEventHandler));
/// assert_eq!(calc.theme(), Theme::Dark);
/// ```
pub struct CalculatorBuilder {
    theme: Option<Theme>,
    initial_mode: CalculatorMode,
    prefers_dark: bool,
    theme_store: Option<Arc<dyn ThemeStore>>,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self {
            theme: None,
            initial_mode: CalculatorMode::default(),
            prefers_dark: false,
            theme_store: None,
        }
    }

    /// Force a theme, ignoring any saved preference
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn initial_mode(mut self, mode: CalculatorMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// System-level dark mode flag, used when nothing is saved
    pub fn prefers_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    pub fn with_theme_store(mut self, store: Arc<dyn ThemeStore>) -> Self {
        self.theme_store = Some(store);
        self
    }

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Calculator {
        let store: Arc<dyn ThemeStore> = self
            .theme_store
            .unwrap_or_else(|| Arc::new(MemoryThemeStore::new()));

        let config = match self.theme {
            Some(theme) => CalculatorConfig::new(theme, self.initial_mode),
            None => CalculatorConfig::load(store.as_ref(), self.prefers_dark)
                .with_initial_mode(self.initial_mode),
        };

        create_from_config(config, store, event_handler)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
