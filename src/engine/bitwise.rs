// ============================================================================
// Bitwise Operations
// AND/OR/XOR/NOT and shifts over base-2 strings
// ============================================================================

use super::arithmetic::{parse_binary, to_binary};
use crate::numeric::{NumericError, NumericResult};

/// Width NOT operates in. Other operations are not narrowed.
pub const NOT_WIDTH_MASK: u64 = 0xFFFF_FFFF;

pub fn bitwise_and(a: &str, b: &str) -> NumericResult<String> {
    Ok(to_binary(parse_binary(a)? & parse_binary(b)?))
}

pub fn bitwise_or(a: &str, b: &str) -> NumericResult<String> {
    Ok(to_binary(parse_binary(a)? | parse_binary(b)?))
}

pub fn bitwise_xor(a: &str, b: &str) -> NumericResult<String> {
    Ok(to_binary(parse_binary(a)? ^ parse_binary(b)?))
}

/// One's complement in a 32-bit unsigned field.
///
/// The operand is first reduced to its low 32 bits, then inverted, so the
/// result is always `0xFFFFFFFF ^ (a mod 2^32)` and never carries a sign.
pub fn bitwise_not(a: &str) -> NumericResult<String> {
    let narrowed = parse_binary(a)? & NOT_WIDTH_MASK;
    Ok(to_binary(NOT_WIDTH_MASK ^ narrowed))
}

/// `a << positions`
///
/// # Errors
/// `Overflow` if a set bit would be shifted past bit 63.
pub fn left_shift(a: &str, positions: u32) -> NumericResult<String> {
    let value = parse_binary(a)?;
    if value == 0 {
        return Ok(to_binary(0));
    }
    if positions > value.leading_zeros() {
        return Err(NumericError::Overflow);
    }
    Ok(to_binary(value << positions))
}

/// Logical `a >> positions`; counts of 64 or more clear the value.
pub fn right_shift(a: &str, positions: u32) -> NumericResult<String> {
    let value = parse_binary(a)?;
    Ok(to_binary(value.checked_shr(positions).unwrap_or(0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_and_or_xor() {
        assert_eq!(bitwise_and("1100", "1010").unwrap(), "1000");
        assert_eq!(bitwise_or("1100", "1010").unwrap(), "1110");
        assert_eq!(bitwise_xor("1100", "1010").unwrap(), "110");
        assert_eq!(bitwise_xor("1", "1").unwrap(), "0");
    }

    #[test]
    fn test_not_is_32_bit() {
        assert_eq!(bitwise_not("0").unwrap(), "1".repeat(32));
        assert_eq!(
            bitwise_not("101").unwrap(),
            format!("{}010", "1".repeat(29))
        );
        assert_eq!(bitwise_not(&"1".repeat(32)).unwrap(), "0");
    }

    #[test]
    fn test_not_discards_high_bits() {
        // bit 32 set plus bit 0: only bit 0 survives the narrowing
        let wide = format!("1{}1", "0".repeat(31));
        assert_eq!(bitwise_not(&wide).unwrap(), format!("{}0", "1".repeat(31)));
    }

    #[test]
    fn test_left_shift() {
        assert_eq!(left_shift("1", 3).unwrap(), "1000");
        assert_eq!(left_shift("101", 0).unwrap(), "101");
        assert_eq!(left_shift("0", 200).unwrap(), "0");
        // not narrowed to 32 bits
        assert_eq!(left_shift("1", 40).unwrap(), format!("1{}", "0".repeat(40)));
    }

    #[test]
    fn test_left_shift_overflow() {
        assert_eq!(left_shift("1", 63).unwrap(), format!("1{}", "0".repeat(63)));
        assert_eq!(left_shift("1", 64), Err(NumericError::Overflow));
        assert_eq!(left_shift("10", 63), Err(NumericError::Overflow));
    }

    #[test]
    fn test_right_shift_is_logical() {
        assert_eq!(right_shift("1000", 3).unwrap(), "1");
        assert_eq!(right_shift("1000", 4).unwrap(), "0");
        assert_eq!(right_shift(&"1".repeat(64), 63).unwrap(), "1");
        assert_eq!(right_shift("1", 64).unwrap(), "0");
    }

    proptest! {
        #[test]
        fn prop_not_matches_mask_xor(a in 0u64..=0xFFFF_FFFF) {
            let inverted = bitwise_not(&to_binary(a)).unwrap();
            prop_assert_eq!(parse_binary(&inverted).unwrap(), 0xFFFF_FFFF ^ a);
        }

        #[test]
        fn prop_not_is_involution(a in 0u64..=0xFFFF_FFFF) {
            let twice = bitwise_not(&bitwise_not(&to_binary(a)).unwrap()).unwrap();
            prop_assert_eq!(parse_binary(&twice).unwrap(), a);
        }

        #[test]
        fn prop_shift_round_trip(a in 0u64..(1 << 32), n in 0u32..32) {
            let shifted = left_shift(&to_binary(a), n).unwrap();
            let back = right_shift(&shifted, n).unwrap();
            prop_assert_eq!(parse_binary(&back).unwrap(), a);
        }
    }
}
