// ============================================================================
// Base Conversion
// Render one value in every supported radix at once
// ============================================================================

use crate::numeric::{NumericResult, Radix};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The same value written in all four radixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionResult {
    pub binary: String,
    pub decimal: String,
    pub octal: String,
    /// Uppercase digits
    pub hexadecimal: String,
}

impl ConversionResult {
    /// The field for `radix`.
    pub fn get(&self, radix: Radix) -> &str {
        match radix {
            Radix::Binary => &self.binary,
            Radix::Octal => &self.octal,
            Radix::Decimal => &self.decimal,
            Radix::Hexadecimal => &self.hexadecimal,
        }
    }

    /// `(radix, rendering)` pairs in binary, decimal, octal, hexadecimal order.
    pub fn iter(&self) -> impl Iterator<Item = (Radix, &str)> + '_ {
        Radix::ALL.into_iter().map(move |radix| (radix, self.get(radix)))
    }
}

pub fn convert_from_decimal(value: u64) -> ConversionResult {
    ConversionResult {
        binary: Radix::Binary.format(value),
        decimal: Radix::Decimal.format(value),
        octal: Radix::Octal.format(value),
        hexadecimal: Radix::Hexadecimal.format(value),
    }
}

/// Parse `value` written in `radix`.
///
/// Callers are expected to run the matching `validate_*` check first; a
/// malformed input comes back as `InvalidDigit` or `EmptyInput`.
pub fn convert_to_decimal(value: &str, radix: Radix) -> NumericResult<u64> {
    radix.parse(value)
}

/// Validate `value` for `radix` and render it in every radix.
pub fn convert(value: &str, radix: Radix) -> NumericResult<ConversionResult> {
    let parsed = convert_to_decimal(value, radix)?;
    tracing::trace!(%radix, value, parsed, "converted value");
    Ok(convert_from_decimal(parsed))
}
