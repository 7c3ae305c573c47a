// ============================================================================
// Calculator
// Drives the keypad and conversion state machines and reports events
// ============================================================================

use crate::domain::{
    Bit, CalculatorConfig, CalculatorMode, CalculatorState, ConversionPanel, Operation, Theme,
};
use crate::interfaces::{CalculatorEvent, EventHandler, SessionId, ThemeStore};
use crate::numeric::Radix;
use chrono::Utc;
use std::sync::Arc;

/// One calculator session.
///
/// Holds the current state values and replaces them with the output of each
/// pure transition. Every action returns the events it produced; the same
/// events are forwarded to the event handler.
pub struct Calculator {
    session_id: SessionId,

    /// Startup configuration; `theme` tracks toggles
    config: CalculatorConfig,

    /// Arithmetic/bitwise keypad
    state: CalculatorState,

    /// Base conversion panel
    conversion: ConversionPanel,

    /// Where theme toggles are persisted
    theme_store: Arc<dyn ThemeStore>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    pub fn new(
        config: CalculatorConfig,
        theme_store: Arc<dyn ThemeStore>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        let session_id = SessionId::new();
        tracing::debug!(session = %session_id.as_uuid(), ?config, "calculator session started");
        Self {
            session_id,
            state: CalculatorState::new(config.initial_mode),
            conversion: ConversionPanel::default(),
            config,
            theme_store,
            event_handler,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn conversion(&self) -> &ConversionPanel {
        &self.conversion
    }

    pub fn mode(&self) -> CalculatorMode {
        self.state.mode
    }

    pub fn display(&self) -> &str {
        &self.state.display
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ========================================================================
    // Keypad Actions
    // ========================================================================

    pub fn change_mode(&mut self, mode: CalculatorMode) -> Vec<CalculatorEvent> {
        self.transition(|state| state.change_mode(mode));
        self.emit(vec![CalculatorEvent::ModeChanged {
            session_id: self.session_id,
            mode,
            timestamp: Utc::now(),
        }])
    }

    pub fn press_digit(&mut self, digit: Bit) -> Vec<CalculatorEvent> {
        self.transition(|state| state.input_digit(digit));
        self.emit(vec![CalculatorEvent::DigitEntered {
            session_id: self.session_id,
            digit,
            display: self.state.display.clone(),
            timestamp: Utc::now(),
        }])
    }

    /// Arm `operation`. Ignored (no events) if the current mode does not offer it.
    pub fn select_operation(&mut self, operation: Operation) -> Vec<CalculatorEvent> {
        if !self.state.mode.supports(operation) {
            tracing::debug!(mode = ?self.state.mode, %operation, "ignoring unsupported operation");
            return Vec::new();
        }

        self.transition(|state| state.select_operation(operation));
        self.emit(vec![CalculatorEvent::OperationSelected {
            session_id: self.session_id,
            operation,
            operand: self.state.display.clone(),
            timestamp: Utc::now(),
        }])
    }

    /// Evaluate the pending operation. No events if nothing was pending.
    pub fn equals(&mut self) -> Vec<CalculatorEvent> {
        let (lhs, rhs, operation) = match (&self.state.previous_value, self.state.operation) {
            (Some(lhs), Some(operation)) => (lhs.clone(), self.state.display.clone(), operation),
            _ => return Vec::new(),
        };

        let (next, outcome) = std::mem::take(&mut self.state).equals();
        self.state = next;

        let event = match outcome {
            Some(Ok(result)) => CalculatorEvent::Evaluated {
                session_id: self.session_id,
                operation,
                lhs,
                rhs,
                result,
                timestamp: Utc::now(),
            },
            Some(Err(error)) => {
                tracing::warn!(%operation, %lhs, %rhs, %error, "calculation failed");
                CalculatorEvent::EvaluationFailed {
                    session_id: self.session_id,
                    operation,
                    error,
                    timestamp: Utc::now(),
                }
            },
            None => return Vec::new(),
        };

        self.emit(vec![event])
    }

    pub fn clear(&mut self) -> Vec<CalculatorEvent> {
        self.transition(CalculatorState::clear);
        self.emit(vec![CalculatorEvent::Cleared {
            session_id: self.session_id,
            timestamp: Utc::now(),
        }])
    }

    // ========================================================================
    // Conversion Actions
    // ========================================================================

    pub fn set_conversion_input(&mut self, input: impl Into<String>) {
        let input = input.into();
        self.conversion = std::mem::take(&mut self.conversion).set_input(input);
    }

    pub fn select_conversion_base(&mut self, base: Radix) {
        self.conversion = std::mem::take(&mut self.conversion).select_base(base);
    }

    /// Convert the panel's input. No events for an empty input.
    pub fn convert(&mut self) -> Vec<CalculatorEvent> {
        if self.conversion.input.is_empty() {
            return Vec::new();
        }
        self.conversion = std::mem::take(&mut self.conversion).convert();

        let input = self.conversion.input.clone();
        let base = self.conversion.base;
        let event = match &self.conversion.result {
            Some(Ok(result)) => CalculatorEvent::Converted {
                session_id: self.session_id,
                base,
                input,
                result: result.clone(),
                timestamp: Utc::now(),
            },
            Some(Err(error)) => CalculatorEvent::ConversionFailed {
                session_id: self.session_id,
                base,
                input,
                error: *error,
                timestamp: Utc::now(),
            },
            None => return Vec::new(),
        };

        self.emit(vec![event])
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Flip the theme and persist the new preference.
    pub fn toggle_theme(&mut self) -> Vec<CalculatorEvent> {
        let theme = self.config.theme.toggle();
        self.config.theme = theme;
        self.theme_store.save(theme);

        self.emit(vec![CalculatorEvent::ThemeChanged {
            session_id: self.session_id,
            theme,
            timestamp: Utc::now(),
        }])
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn transition(&mut self, f: impl FnOnce(CalculatorState) -> CalculatorState) {
        let current = std::mem::take(&mut self.state);
        self.state = f(current);
    }

    fn emit(&self, events: Vec<CalculatorEvent>) -> Vec<CalculatorEvent> {
        self.event_handler.on_events(events.clone());
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{MemoryThemeStore, NoOpEventHandler, RecordingEventHandler};
    use crate::numeric::NumericError;

    fn calculator(mode: CalculatorMode) -> Calculator {
        Calculator::new(
            CalculatorConfig::default().with_initial_mode(mode),
            Arc::new(MemoryThemeStore::new()),
            Arc::new(NoOpEventHandler),
        )
    }

    fn type_bits(calc: &mut Calculator, bits: &str) {
        for c in bits.chars() {
            calc.press_digit(if c == '1' { Bit::One } else { Bit::Zero });
        }
    }

    #[test]
    fn test_subtract_negative_result() {
        let mut calc = calculator(CalculatorMode::Arithmetic);
        type_bits(&mut calc, "11");
        calc.select_operation(Operation::Subtract);
        type_bits(&mut calc, "101");

        let events = calc.equals();
        assert_eq!(calc.display(), "-10");
        assert!(matches!(
            &events[..],
            [CalculatorEvent::Evaluated { lhs, rhs, result, .. }]
                if lhs == "11" && rhs == "101" && result == "-10"
        ));
    }

    #[test]
    fn test_division_by_zero_event() {
        let mut calc = calculator(CalculatorMode::Arithmetic);
        type_bits(&mut calc, "1");
        calc.select_operation(Operation::Divide);
        type_bits(&mut calc, "0");

        let events = calc.equals();
        assert_eq!(calc.display(), "Error");
        assert!(matches!(
            &events[..],
            [CalculatorEvent::EvaluationFailed {
                error: NumericError::DivisionByZero,
                ..
            }]
        ));
    }

    #[test]
    fn test_equals_without_pending_emits_nothing() {
        let mut calc = calculator(CalculatorMode::Arithmetic);
        assert!(calc.equals().is_empty());
    }

    #[test]
    fn test_unsupported_operation_emits_nothing() {
        let mut calc = calculator(CalculatorMode::Arithmetic);
        assert!(calc.select_operation(Operation::LeftShift).is_empty());
        assert!(!calc.state().has_pending_operation());
    }

    #[test]
    fn test_bitwise_shift() {
        let mut calc = calculator(CalculatorMode::Bitwise);
        type_bits(&mut calc, "1");
        calc.select_operation(Operation::LeftShift);
        type_bits(&mut calc, "11");
        calc.equals();
        assert_eq!(calc.display(), "1000");
    }

    #[test]
    fn test_conversion_events() {
        let mut calc = calculator(CalculatorMode::Conversion);
        assert!(calc.convert().is_empty());

        calc.set_conversion_input("1A3F");
        calc.select_conversion_base(Radix::Hexadecimal);
        let events = calc.convert();
        assert!(matches!(
            &events[..],
            [CalculatorEvent::Converted { result, .. }] if result.decimal == "6719"
        ));

        calc.set_conversion_input("1G");
        let events = calc.convert();
        assert!(matches!(
            &events[..],
            [CalculatorEvent::ConversionFailed { .. }]
        ));
        assert_eq!(calc.conversion().error_message(), Some("Invalid input"));
    }

    #[test]
    fn test_toggle_theme_persists() {
        let store = Arc::new(MemoryThemeStore::new());
        let mut calc = Calculator::new(
            CalculatorConfig::default(),
            store.clone(),
            Arc::new(NoOpEventHandler),
        );

        calc.toggle_theme();
        assert_eq!(calc.theme(), Theme::Dark);
        assert_eq!(store.saved_theme(), Some(Theme::Dark));

        calc.toggle_theme();
        assert_eq!(store.saved_theme(), Some(Theme::Light));
    }

    #[test]
    fn test_events_forwarded_to_handler() {
        let handler = Arc::new(RecordingEventHandler::new());
        let mut calc = Calculator::new(
            CalculatorConfig::default(),
            Arc::new(MemoryThemeStore::new()),
            handler.clone(),
        );

        type_bits(&mut calc, "10");
        calc.select_operation(Operation::Add);
        type_bits(&mut calc, "1");
        calc.equals();
        calc.clear();

        let events = handler.events();
        assert_eq!(events.len(), 6);
        assert!(events.iter().all(|e| e.session_id() == calc.session_id()));
        assert!(matches!(events.last(), Some(CalculatorEvent::Cleared { .. })));
    }
}
