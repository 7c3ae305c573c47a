// ============================================================================
// Domain Models Module
// Operation selector, keypad/conversion state machines and configuration
// ============================================================================

pub mod config;
pub mod operation;
pub mod state;

pub use config::{CalculatorConfig, Theme};
pub use operation::{Operation, OperationKind};
pub use state::{
    Bit, CalculatorMode, CalculatorState, ConversionPanel, ERROR_DISPLAY, INVALID_INPUT_MESSAGE,
};
