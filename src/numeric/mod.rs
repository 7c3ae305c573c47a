// ============================================================================
// Numeric Module
// Radix parsing/formatting and the error type shared by every operation
// ============================================================================
//
// This module provides:
// - Radix: the four supported numeral systems (2, 8, 10, 16)
// - validate_*: digit-set checks callers run before converting
// - NumericError: Error types for parsing and arithmetic
//
// Design principles:
// - Values are u64; nothing wraps silently
// - All parsing and arithmetic returns Result (no panics)
// - Hexadecimal output is always uppercase

mod errors;
mod radix;

pub use errors::{NumericError, NumericResult};
pub use radix::{validate_binary, validate_decimal, validate_hex, validate_octal, Radix};
