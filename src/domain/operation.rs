// ============================================================================
// Operation Selector
// The fixed set of arithmetic and bitwise operations a user can pick
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which calculator panel an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationKind {
    Arithmetic,
    Bitwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    /// Negative differences are rendered with a leading `-`
    Subtract,
    Multiply,
    /// Floor division; a zero divisor is an error
    Divide,
    And,
    Or,
    Xor,
    /// One's complement within a 32-bit unsigned field
    Not,
    /// Shift count is the right-hand operand, read as binary
    LeftShift,
    /// Logical shift; the count is the right-hand operand, read as binary
    RightShift,
}

impl Operation {
    pub const ARITHMETIC: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub const BITWISE: [Operation; 6] = [
        Operation::And,
        Operation::Or,
        Operation::Xor,
        Operation::Not,
        Operation::LeftShift,
        Operation::RightShift,
    ];

    pub const fn kind(self) -> OperationKind {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => {
                OperationKind::Arithmetic
            },
            _ => OperationKind::Bitwise,
        }
    }

    /// Label shown on the key and in the pending-expression line.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::And => "AND",
            Operation::Or => "OR",
            Operation::Xor => "XOR",
            Operation::Not => "NOT",
            Operation::LeftShift => "<<",
            Operation::RightShift => ">>",
        }
    }

    /// NOT ignores its right-hand operand.
    #[inline]
    pub const fn is_unary(self) -> bool {
        matches!(self, Operation::Not)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operation::Add),
            "-" | "−" => Ok(Operation::Subtract),
            "×" | "*" | "x" => Ok(Operation::Multiply),
            "÷" | "/" => Ok(Operation::Divide),
            "AND" | "and" | "&" => Ok(Operation::And),
            "OR" | "or" | "|" => Ok(Operation::Or),
            "XOR" | "xor" | "^" => Ok(Operation::Xor),
            "NOT" | "not" | "~" => Ok(Operation::Not),
            "<<" => Ok(Operation::LeftShift),
            ">>" => Ok(Operation::RightShift),
            other => Err(format!("Unknown operation: {:?}", other)),
        }
    }
}
