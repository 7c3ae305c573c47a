// ============================================================================
// Utilities Module
// Process-level helpers for hosts embedding the calculator
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
