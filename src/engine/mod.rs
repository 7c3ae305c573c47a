// ============================================================================
// Engine Module
// Binary arithmetic, bitwise operations, base conversion and the session driver
// ============================================================================

mod arithmetic;
mod bitwise;
mod calculator;
mod conversion;
mod evaluator;

pub mod factory;

pub use arithmetic::{add, divide, multiply, subtract};
pub use bitwise::{
    bitwise_and, bitwise_not, bitwise_or, bitwise_xor, left_shift, right_shift, NOT_WIDTH_MASK,
};
pub use calculator::Calculator;
pub use conversion::{convert, convert_from_decimal, convert_to_decimal, ConversionResult};
pub use evaluator::evaluate;
pub use factory::{create_from_config, CalculatorBuilder};
