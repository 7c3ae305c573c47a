// ============================================================================
// Binary Arithmetic
// Add, subtract, multiply and divide over base-2 strings
// ============================================================================
//
// Every function parses its operands as binary, computes on u64 and renders
// the result back to binary. Subtraction is the only operation that can
// produce a negative value; it is rendered sign-magnitude ("-101"), never as
// two's complement.
//
// A negative result can come back as the next left operand on the keypad, so
// the evaluator also has a signed path: a leading `-` is accepted, values are
// computed on i128 and magnitudes must still fit in u64.

use crate::numeric::{NumericError, NumericResult, Radix};

#[inline]
pub(crate) fn parse_binary(value: &str) -> NumericResult<u64> {
    Radix::Binary.parse(value)
}

#[inline]
pub(crate) fn to_binary(value: u64) -> String {
    Radix::Binary.format(value)
}

/// Binary digits with an optional leading `-`.
pub(crate) fn parse_signed_binary(value: &str) -> NumericResult<i128> {
    match value.strip_prefix('-') {
        Some(magnitude) => Ok(-i128::from(parse_binary(magnitude)?)),
        None => Ok(i128::from(parse_binary(value)?)),
    }
}

/// Sign-magnitude rendering; `Overflow` if the magnitude exceeds u64::MAX.
pub(crate) fn to_signed_binary(value: i128) -> NumericResult<String> {
    let magnitude = u64::try_from(value.unsigned_abs()).map_err(|_| NumericError::Overflow)?;
    if value < 0 {
        Ok(format!("-{}", to_binary(magnitude)))
    } else {
        Ok(to_binary(magnitude))
    }
}

/// Division rounding toward negative infinity, so `-7 / 2 = -4`.
pub(crate) fn floor_div(a: i128, b: i128) -> NumericResult<i128> {
    if b == 0 {
        return Err(NumericError::DivisionByZero);
    }
    let quotient = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// `a + b`
///
/// # Errors
/// `Overflow` if the sum exceeds u64::MAX; parse errors for malformed operands.
pub fn add(a: &str, b: &str) -> NumericResult<String> {
    let (a, b) = (parse_binary(a)?, parse_binary(b)?);
    a.checked_add(b)
        .map(to_binary)
        .ok_or(NumericError::Overflow)
}

/// `a - b`, with a leading `-` when `b > a`.
pub fn subtract(a: &str, b: &str) -> NumericResult<String> {
    let (a, b) = (parse_binary(a)?, parse_binary(b)?);
    if a < b {
        Ok(format!("-{}", to_binary(b - a)))
    } else {
        Ok(to_binary(a - b))
    }
}

/// `a * b`
///
/// # Errors
/// `Overflow` if the product exceeds u64::MAX.
pub fn multiply(a: &str, b: &str) -> NumericResult<String> {
    let (a, b) = (parse_binary(a)?, parse_binary(b)?);
    a.checked_mul(b)
        .map(to_binary)
        .ok_or(NumericError::Overflow)
}

/// `floor(a / b)`
///
/// # Errors
/// `DivisionByZero` when `b` parses to 0.
pub fn divide(a: &str, b: &str) -> NumericResult<String> {
    let (a, b) = (parse_binary(a)?, parse_binary(b)?);
    a.checked_div(b)
        .map(to_binary)
        .ok_or(NumericError::DivisionByZero)
}
