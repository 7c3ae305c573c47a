// ============================================================================
// Calculator Interaction State
// Finite-state values passed by value through pure transitions
// ============================================================================

use super::operation::{Operation, OperationKind};
use crate::engine::{convert, evaluate, ConversionResult};
use crate::numeric::{NumericResult, Radix};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shown in place of a result when evaluation fails.
pub const ERROR_DISPLAY: &str = "Error";

/// Shown in place of a conversion record when the input is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

// ============================================================================
// Mode and Digit Input
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorMode {
    /// Binary +, -, ×, ÷
    #[default]
    Arithmetic,
    /// Convert one value between bases
    Conversion,
    /// AND, OR, XOR, NOT, <<, >>
    Bitwise,
}

impl CalculatorMode {
    /// Whether the mode's keypad offers `operation`.
    pub fn supports(self, operation: Operation) -> bool {
        match self {
            CalculatorMode::Arithmetic => operation.kind() == OperationKind::Arithmetic,
            CalculatorMode::Bitwise => operation.kind() == OperationKind::Bitwise,
            CalculatorMode::Conversion => false,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CalculatorMode::Arithmetic => "Binary Arithmetic",
            CalculatorMode::Conversion => "Conversions",
            CalculatorMode::Bitwise => "Bitwise Operations",
        }
    }
}

impl fmt::Display for CalculatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A binary keypad digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub const fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

// ============================================================================
// Keypad State Machine
// ============================================================================

/// State of the arithmetic/bitwise keypad.
///
/// Every transition consumes the state and returns the next one; nothing is
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorState {
    pub mode: CalculatorMode,
    /// Operand being typed, or the last result
    pub display: String,
    /// Left-hand operand captured when an operation was selected
    pub previous_value: Option<String>,
    pub operation: Option<Operation>,
    /// The next digit starts a new operand instead of extending the display
    pub waiting_for_new_value: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(CalculatorMode::default())
    }
}

impl CalculatorState {
    pub fn new(mode: CalculatorMode) -> Self {
        Self {
            mode,
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_new_value: false,
        }
    }

    /// Switch panels, discarding any operand or pending operation.
    pub fn change_mode(self, mode: CalculatorMode) -> Self {
        Self::new(mode)
    }

    pub fn input_digit(mut self, bit: Bit) -> Self {
        if self.waiting_for_new_value {
            self.display = bit.as_char().to_string();
            self.waiting_for_new_value = false;
        } else if self.display == "0" {
            self.display = bit.as_char().to_string();
        } else {
            self.display.push(bit.as_char());
        }
        self
    }

    pub fn clear(self) -> Self {
        Self::new(self.mode)
    }

    /// Capture the display as the left operand and arm `operation`.
    ///
    /// Operations the current mode does not offer leave the state unchanged.
    pub fn select_operation(mut self, operation: Operation) -> Self {
        if !self.mode.supports(operation) {
            tracing::debug!(mode = ?self.mode, %operation, "operation not offered in this mode");
            return self;
        }
        self.previous_value = Some(self.display.clone());
        self.operation = Some(operation);
        self.waiting_for_new_value = true;
        self
    }

    /// Evaluate the pending operation against the display.
    ///
    /// Returns the next state and the outcome, or `None` for the outcome when
    /// nothing was pending. A failed evaluation shows [`ERROR_DISPLAY`].
    pub fn equals(mut self) -> (Self, Option<NumericResult<String>>) {
        let (lhs, operation) = match (self.previous_value.take(), self.operation.take()) {
            (Some(lhs), Some(operation)) => (lhs, operation),
            (lhs, operation) => {
                self.previous_value = lhs;
                self.operation = operation;
                return (self, None);
            },
        };

        let outcome = evaluate(operation, &lhs, &self.display);
        self.display = match &outcome {
            Ok(result) => result.clone(),
            Err(_) => ERROR_DISPLAY.to_string(),
        };
        self.waiting_for_new_value = true;

        (self, Some(outcome))
    }

    /// `"<previous> <symbol>"` while an operation is pending.
    pub fn pending_expression(&self) -> Option<String> {
        match (&self.previous_value, self.operation) {
            (Some(previous), Some(operation)) => Some(format!("{} {}", previous, operation)),
            _ => None,
        }
    }

    pub fn has_pending_operation(&self) -> bool {
        self.operation.is_some()
    }
}

// ============================================================================
// Conversion Panel
// ============================================================================

/// State of the base-conversion panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionPanel {
    pub input: String,
    /// Radix the input is written in
    pub base: Radix,
    /// Outcome of the last conversion, if any
    pub result: Option<NumericResult<ConversionResult>>,
}

impl ConversionPanel {
    pub fn set_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn select_base(mut self, base: Radix) -> Self {
        self.base = base;
        self
    }

    /// Convert the current input. An empty input leaves the panel unchanged.
    pub fn convert(mut self) -> Self {
        if self.input.is_empty() {
            return self;
        }
        self.result = Some(convert(&self.input, self.base));
        self
    }

    /// The message to show instead of a record, if the last conversion failed.
    pub fn error_message(&self) -> Option<&'static str> {
        match self.result {
            Some(Err(_)) => Some(INVALID_INPUT_MESSAGE),
            _ => None,
        }
    }
}
