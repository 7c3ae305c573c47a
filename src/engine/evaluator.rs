// ============================================================================
// Operation Evaluator
// Dispatches an operation selector to the matching binary routine
// ============================================================================

use super::arithmetic::{
    add, divide, floor_div, multiply, parse_binary, parse_signed_binary, subtract,
    to_signed_binary,
};
use super::bitwise::{bitwise_and, bitwise_not, bitwise_or, bitwise_xor, left_shift, right_shift};
use crate::domain::Operation;
use crate::numeric::{NumericError, NumericResult};

/// Apply `operation` to two binary operands.
///
/// Arithmetic operands may carry a leading `-`, as a previous subtraction
/// result does. Bitwise operands may not.
///
/// For shifts `rhs` is the count, itself written in binary. Counts beyond
/// u32::MAX saturate. For NOT `rhs` is ignored.
pub fn evaluate(operation: Operation, lhs: &str, rhs: &str) -> NumericResult<String> {
    let signed = lhs.starts_with('-') || rhs.starts_with('-');
    let result = match operation {
        Operation::Add if signed => signed_arithmetic(lhs, rhs, |a, b| {
            a.checked_add(b).ok_or(NumericError::Overflow)
        }),
        Operation::Subtract if signed => signed_arithmetic(lhs, rhs, |a, b| {
            a.checked_sub(b).ok_or(NumericError::Overflow)
        }),
        Operation::Multiply if signed => signed_arithmetic(lhs, rhs, |a, b| {
            a.checked_mul(b).ok_or(NumericError::Overflow)
        }),
        Operation::Divide if signed => signed_arithmetic(lhs, rhs, floor_div),
        Operation::Add => add(lhs, rhs),
        Operation::Subtract => subtract(lhs, rhs),
        Operation::Multiply => multiply(lhs, rhs),
        Operation::Divide => divide(lhs, rhs),
        Operation::And => bitwise_and(lhs, rhs),
        Operation::Or => bitwise_or(lhs, rhs),
        Operation::Xor => bitwise_xor(lhs, rhs),
        Operation::Not => bitwise_not(lhs),
        Operation::LeftShift => left_shift(lhs, shift_count(rhs)?),
        Operation::RightShift => right_shift(lhs, shift_count(rhs)?),
    };

    match &result {
        Ok(value) => tracing::trace!(%operation, lhs, rhs, result = %value, "evaluated"),
        Err(e) => tracing::debug!(%operation, lhs, rhs, error = %e, "evaluation failed"),
    }

    result
}

fn signed_arithmetic(
    lhs: &str,
    rhs: &str,
    op: impl FnOnce(i128, i128) -> NumericResult<i128>,
) -> NumericResult<String> {
    let (a, b) = (parse_signed_binary(lhs)?, parse_signed_binary(rhs)?);
    to_signed_binary(op(a, b)?)
}

fn shift_count(rhs: &str) -> NumericResult<u32> {
    let count = parse_binary(rhs)?;
    Ok(u32::try_from(count).unwrap_or(u32::MAX))
}
