// ============================================================================
// Radix
// Numeral systems supported by the calculator and their string forms
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeral system a value is written in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Radix {
    /// Base 2, digits `0-1`
    Binary,
    /// Base 8, digits `0-7`
    Octal,
    /// Base 10, digits `0-9`
    #[default]
    Decimal,
    /// Base 16, digits `0-9`, `A-F` (either case on input, uppercase on output)
    Hexadecimal,
}

impl Radix {
    /// All supported radixes, in conversion-record order.
    pub const ALL: [Radix; 4] = [
        Radix::Binary,
        Radix::Decimal,
        Radix::Octal,
        Radix::Hexadecimal,
    ];

    /// Returns the radix number, such as 8 for octal.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Look up a radix by its number.
    ///
    /// # Errors
    /// Returns `UnsupportedBase` for anything other than 2, 8, 10 or 16.
    pub fn from_value(base: u32) -> NumericResult<Self> {
        match base {
            2 => Ok(Radix::Binary),
            8 => Ok(Radix::Octal),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hexadecimal),
            other => Err(NumericError::UnsupportedBase(other)),
        }
    }

    /// Lowercase name, as used in labels and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        }
    }

    /// True iff `c` is a digit of this radix (hex letters in either case).
    #[inline]
    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.value())
    }

    /// True iff `s` is non-empty and every character is a digit of this radix.
    pub fn validate(self, s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| self.is_digit(c))
    }

    /// Parse a digit string in this radix.
    ///
    /// Unlike `u64::from_str_radix`, no sign prefix is accepted.
    ///
    /// # Errors
    /// - `EmptyInput` for an empty string
    /// - `InvalidDigit` if any character is not a digit of this radix
    /// - `Overflow` if the value does not fit in a u64
    pub fn parse(self, s: &str) -> NumericResult<u64> {
        if s.is_empty() {
            return Err(NumericError::EmptyInput);
        }
        if !self.validate(s) {
            return Err(NumericError::InvalidDigit {
                radix: self.value(),
            });
        }
        u64::from_str_radix(s, self.value()).map_err(|_| NumericError::Overflow)
    }

    /// Render `value` in this radix with no prefix and no padding.
    pub fn format(self, value: u64) -> String {
        match self {
            Radix::Binary => format!("{:b}", value),
            Radix::Octal => format!("{:o}", value),
            Radix::Decimal => value.to_string(),
            Radix::Hexadecimal => format!("{:X}", value),
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Radix {
    type Err = NumericError;

    /// Accepts names ("binary"), short names ("bin", "hex") and radix numbers ("16").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(Radix::Binary),
            "octal" | "oct" => Ok(Radix::Octal),
            "decimal" | "dec" => Ok(Radix::Decimal),
            "hexadecimal" | "hex" => Ok(Radix::Hexadecimal),
            "" => Err(NumericError::EmptyInput),
            other => match other.parse::<u32>() {
                Ok(base) => Radix::from_value(base),
                Err(_) => Err(NumericError::UnsupportedBase(0)),
            },
        }
    }
}

// ============================================================================
// Validators
// ============================================================================

/// `[01]+`
pub fn validate_binary(value: &str) -> bool {
    Radix::Binary.validate(value)
}

/// `[0-7]+`
pub fn validate_octal(value: &str) -> bool {
    Radix::Octal.validate(value)
}

/// `[0-9]+`
pub fn validate_decimal(value: &str) -> bool {
    Radix::Decimal.validate(value)
}

/// `[0-9A-Fa-f]+`
pub fn validate_hex(value: &str) -> bool {
    Radix::Hexadecimal.validate(value)
}
