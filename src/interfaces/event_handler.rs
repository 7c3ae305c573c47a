// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator activity
// ============================================================================

use crate::domain::{Bit, CalculatorMode, Operation, Theme};
use crate::engine::ConversionResult;
use crate::numeric::{NumericError, Radix};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one calculator session in events and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorEvent {
    /// Panel switched
    ModeChanged {
        session_id: SessionId,
        mode: CalculatorMode,
        timestamp: DateTime<Utc>,
    },

    /// Digit typed on the binary keypad
    DigitEntered {
        session_id: SessionId,
        digit: Bit,
        display: String,
        timestamp: DateTime<Utc>,
    },

    /// Left operand captured and operation armed
    OperationSelected {
        session_id: SessionId,
        operation: Operation,
        operand: String,
        timestamp: DateTime<Utc>,
    },

    /// Pending operation evaluated successfully
    Evaluated {
        session_id: SessionId,
        operation: Operation,
        lhs: String,
        rhs: String,
        result: String,
        timestamp: DateTime<Utc>,
    },

    /// Pending operation failed (e.g. division by zero)
    EvaluationFailed {
        session_id: SessionId,
        operation: Operation,
        error: NumericError,
        timestamp: DateTime<Utc>,
    },

    /// Keypad cleared
    Cleared {
        session_id: SessionId,
        timestamp: DateTime<Utc>,
    },

    /// Conversion panel produced a record
    Converted {
        session_id: SessionId,
        base: Radix,
        input: String,
        result: ConversionResult,
        timestamp: DateTime<Utc>,
    },

    /// Conversion input rejected
    ConversionFailed {
        session_id: SessionId,
        base: Radix,
        input: String,
        error: NumericError,
        timestamp: DateTime<Utc>,
    },

    /// Theme toggled and persisted
    ThemeChanged {
        session_id: SessionId,
        theme: Theme,
        timestamp: DateTime<Utc>,
    },
}

impl CalculatorEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            CalculatorEvent::ModeChanged { session_id, .. }
            | CalculatorEvent::DigitEntered { session_id, .. }
            | CalculatorEvent::OperationSelected { session_id, .. }
            | CalculatorEvent::Evaluated { session_id, .. }
            | CalculatorEvent::EvaluationFailed { session_id, .. }
            | CalculatorEvent::Cleared { session_id, .. }
            | CalculatorEvent::Converted { session_id, .. }
            | CalculatorEvent::ConversionFailed { session_id, .. }
            | CalculatorEvent::ThemeChanged { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, history capture, telemetry, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculatorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculatorEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<CalculatorEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Take and forget everything recorded so far
    pub fn drain(&self) -> Vec<CalculatorEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculatorEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleared(session_id: SessionId) -> CalculatorEvent {
        CalculatorEvent::Cleared {
            session_id,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(cleared(SessionId::new()));
        // Should not panic
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingEventHandler::new();
        let session = SessionId::new();
        assert!(handler.is_empty());

        handler.on_event(cleared(session));
        handler.on_events(vec![cleared(session), cleared(session)]);
        assert_eq!(handler.len(), 3);
        assert!(handler.events().iter().all(|e| e.session_id() == session));

        let drained = handler.drain();
        assert_eq!(drained.len(), 3);
        assert!(handler.is_empty());
    }

    #[test]
    fn test_session_ids_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }
}
