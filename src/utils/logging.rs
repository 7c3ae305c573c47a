// ============================================================================
// Logging Setup
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber at `level`.
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // whichever call wins, a second install must be rejected
        let _ = init_logging(Level::DEBUG);
        assert!(init_logging(Level::DEBUG).is_err());
    }
}
