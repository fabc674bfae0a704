//! Error types for machine definition and input handling.

use super::state::{State, Symbol};
use thiserror::Error;

/// Errors raised by the recognizers and their simulation driver.
///
/// A missing table entry is a malformed machine definition, not a runtime
/// condition: the state set and alphabet are fixed and the shipped tables
/// are total, so `UndefinedTransition` and `UndefinedOutput` are only
/// reachable from a hand-built partial machine. They propagate immediately
/// rather than falling back to a default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("no transition defined for state {state} on input {symbol}")]
    UndefinedTransition { state: State, symbol: Symbol },

    #[error("no output defined for state {state}")]
    UndefinedOutput { state: State },

    #[error("input character '{0}' is outside the alphabet {{'0', '1'}}")]
    InvalidSymbol(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_key() {
        let err = MachineError::UndefinedTransition {
            state: State::B,
            symbol: Symbol::One,
        };
        assert_eq!(
            err.to_string(),
            "no transition defined for state B on input 1"
        );

        let err = MachineError::UndefinedOutput { state: State::C };
        assert_eq!(err.to_string(), "no output defined for state C");

        let err = MachineError::InvalidSymbol('x');
        assert_eq!(
            err.to_string(),
            "input character 'x' is outside the alphabet {'0', '1'}"
        );
    }
}
