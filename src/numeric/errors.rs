// ============================================================================
// Numeric Errors
// Error types for parsing and arithmetic on radix strings
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or operating on numeric strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Divisor parsed to zero
    DivisionByZero,
    /// Value or result exceeded u64::MAX
    Overflow,
    /// Input string was empty
    EmptyInput,
    /// Input contained a character that is not a digit of the given radix
    InvalidDigit {
        /// Radix the input was parsed in (2, 8, 10 or 16)
        radix: u32,
    },
    /// Radix other than 2, 8, 10 or 16
    UnsupportedBase(u32),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::EmptyInput => write!(f, "invalid input: value is empty"),
            NumericError::InvalidDigit { radix } => {
                write!(f, "invalid input: not a base-{} number", radix)
            },
            NumericError::UnsupportedBase(base) => write!(f, "unsupported base: {}", base),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
