// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod theme_store;

pub use event_handler::{
    CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
    SessionId,
};
pub use theme_store::{MemoryThemeStore, ThemeStore, THEME_KEY};
