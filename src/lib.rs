// ============================================================================
// Binary Calculator Library
// Binary arithmetic, bitwise operations and number-base conversion
// ============================================================================

//! # Binary Calculator
//!
//! The numeric engine behind an educational binary calculator, plus the
//! keypad state machine a front end drives it with.
//!
//! ## Features
//!
//! - **Binary arithmetic** on base-2 strings (subtraction renders negative
//!   results as `-<magnitude>`)
//! - **Bitwise operations** AND/OR/XOR, 32-bit NOT, logical shifts
//! - **Base conversion** between binary, octal, decimal and hexadecimal
//! - **Pure state transitions** for the keypad and conversion panel
//! - **Event reporting** through a pluggable handler
//!
//! ## Example
//!
//! ```rust
//! use binary_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! // Stateless engine calls
//! assert_eq!(add("101", "11").unwrap(), "1000");
//! assert_eq!(subtract("11", "101").unwrap(), "-10");
//! assert_eq!(convert_from_decimal(255).hexadecimal, "FF");
//!
//! // A keypad session
//! let mut calc = CalculatorBuilder::new()
//!     .initial_mode(CalculatorMode::Bitwise)
//!     .build(Arc::new(NoOpEventHandler));
//!
//! calc.press_digit(Bit::One);
//! calc.select_operation(Operation::LeftShift);
//! calc.press_digit(Bit::One);
//! calc.press_digit(Bit::One);
//! calc.equals();
//! assert_eq!(calc.display(), "1000");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Bit, CalculatorConfig, CalculatorMode, CalculatorState, ConversionPanel, Operation,
        OperationKind, Theme,
    };
    pub use crate::engine::{
        add, bitwise_and, bitwise_not, bitwise_or, bitwise_xor, convert, convert_from_decimal,
        convert_to_decimal, create_from_config, divide, evaluate, left_shift, multiply,
        right_shift, subtract, Calculator, CalculatorBuilder, ConversionResult,
    };
    pub use crate::interfaces::{
        CalculatorEvent, EventHandler, LoggingEventHandler, MemoryThemeStore, NoOpEventHandler,
        RecordingEventHandler, SessionId, ThemeStore,
    };
    pub use crate::numeric::{
        validate_binary, validate_decimal, validate_hex, validate_octal, NumericError,
        NumericResult, Radix,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_session() {
        let store = Arc::new(MemoryThemeStore::new());
        let handler = Arc::new(RecordingEventHandler::new());
        let mut calc = CalculatorBuilder::new()
            .prefers_dark(true)
            .with_theme_store(store.clone())
            .build(handler.clone());
        assert_eq!(calc.theme(), Theme::Dark);

        // 101 × 11 = 1111
        calc.press_digit(Bit::One);
        calc.press_digit(Bit::Zero);
        calc.press_digit(Bit::One);
        calc.select_operation(Operation::Multiply);
        calc.press_digit(Bit::One);
        calc.press_digit(Bit::One);
        calc.equals();
        assert_eq!(calc.display(), "1111");

        // result feeds the next operation: 1111 ÷ 0 fails
        calc.select_operation(Operation::Divide);
        calc.press_digit(Bit::Zero);
        calc.equals();
        assert_eq!(calc.display(), "Error");

        // switch panels and convert
        calc.change_mode(CalculatorMode::Conversion);
        calc.set_conversion_input("377");
        calc.select_conversion_base(Radix::Octal);
        calc.convert();
        let record = calc.conversion().result.clone().unwrap().unwrap();
        assert_eq!(record, convert_from_decimal(255));

        calc.toggle_theme();
        assert_eq!(store.saved_theme(), Some(Theme::Light));

        let events = handler.events();
        assert!(events
            .iter()
            .any(|e| matches!(e, CalculatorEvent::Evaluated { result, .. } if result == "1111")));
        assert!(events.iter().any(|e| matches!(
            e,
            CalculatorEvent::EvaluationFailed {
                error: NumericError::DivisionByZero,
                ..
            }
        )));
        assert!(events
            .iter()
            .any(|e| matches!(e, CalculatorEvent::Converted { base: Radix::Octal, .. })));
        assert!(matches!(
            events.last(),
            Some(CalculatorEvent::ThemeChanged {
                theme: Theme::Light,
                ..
            })
        ));
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(add("101", "11").unwrap(), "1000");
        assert_eq!(subtract("11", "101").unwrap(), "-10");
        assert_eq!(left_shift("1", 3).unwrap(), "1000");

        let record = convert_from_decimal(255);
        assert_eq!(record.binary, "11111111");
        assert_eq!(record.decimal, "255");
        assert_eq!(record.octal, "377");
        assert_eq!(record.hexadecimal, "FF");

        assert!(validate_hex("1A3F"));
        assert!(!validate_hex("1G"));
        assert!(!validate_binary("102"));
    }
}
