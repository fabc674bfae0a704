//! The Moore recognizer.

use super::Machine;
use crate::core::{MachineError, Output, State, Symbol};
use std::collections::HashMap;

/// A Moore machine recognizing "01" in a binary stream.
///
/// The defining structural difference from the Mealy recognizer: output
/// is a function of the state alone, held in a separate per-state table.
/// State C emits `'a'` (an "01" was just seen); A and B emit `'b'`.
/// [`output_of`](MooreMachine::output_of) never inspects an input symbol.
///
/// Because every state emits, a Moore run produces one more output than
/// it consumes symbols: the start state's output comes first.
pub struct MooreMachine {
    transitions: HashMap<(State, Symbol), State>,
    outputs: HashMap<State, Output>,
    start: State,
}

impl MooreMachine {
    /// Build the fixed "01" recognizer.
    pub fn recognize_01() -> Self {
        let transitions = HashMap::from([
            ((State::A, Symbol::Zero), State::B),
            ((State::A, Symbol::One), State::A),
            ((State::B, Symbol::Zero), State::B),
            ((State::B, Symbol::One), State::C),
            ((State::C, Symbol::Zero), State::A),
            ((State::C, Symbol::One), State::C),
        ]);
        let outputs = HashMap::from([
            (State::A, Output::B),
            (State::B, Output::B),
            (State::C, Output::A),
        ]);

        Self {
            transitions,
            outputs,
            start: State::A,
        }
    }

    /// Look up one transition: `(state, symbol) → next`.
    pub fn step(&self, state: State, symbol: Symbol) -> Result<State, MachineError> {
        self.transitions
            .get(&(state, symbol))
            .copied()
            .ok_or(MachineError::UndefinedTransition { state, symbol })
    }

    /// The output a state emits, independent of any input.
    pub fn output_of(&self, state: State) -> Result<Output, MachineError> {
        self.outputs
            .get(&state)
            .copied()
            .ok_or(MachineError::UndefinedOutput { state })
    }

    /// Check that both tables cover their full key spaces.
    pub fn verify_total(&self) -> Result<(), MachineError> {
        for state in State::all() {
            for symbol in Symbol::all() {
                if !self.transitions.contains_key(&(state, symbol)) {
                    return Err(MachineError::UndefinedTransition { state, symbol });
                }
            }
            if !self.outputs.contains_key(&state) {
                return Err(MachineError::UndefinedOutput { state });
            }
        }
        Ok(())
    }
}

impl Default for MooreMachine {
    fn default() -> Self {
        Self::recognize_01()
    }
}

impl Machine for MooreMachine {
    fn kind(&self) -> &'static str {
        "MOORE"
    }

    fn start(&self) -> State {
        self.start
    }

    fn initial_output(&self) -> Result<Option<Output>, MachineError> {
        self.output_of(self.start).map(Some)
    }

    fn advance(&self, state: State, symbol: Symbol) -> Result<(State, Output), MachineError> {
        let next = self.step(state, symbol)?;
        let output = self.output_of(next)?;
        Ok((next, output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_total() {
        let moore = MooreMachine::recognize_01();
        moore.verify_total().unwrap();

        for state in State::all() {
            assert!(moore.output_of(state).is_ok());
            for symbol in Symbol::all() {
                assert!(moore.step(state, symbol).is_ok());
            }
        }
    }

    #[test]
    fn start_state_is_a() {
        assert_eq!(MooreMachine::recognize_01().start(), State::A);
    }

    #[test]
    fn only_state_c_emits_a() {
        let moore = MooreMachine::recognize_01();
        assert_eq!(moore.output_of(State::A).unwrap(), Output::B);
        assert_eq!(moore.output_of(State::B).unwrap(), Output::B);
        assert_eq!(moore.output_of(State::C).unwrap(), Output::A);
    }

    #[test]
    fn initial_output_is_the_start_states() {
        let moore = MooreMachine::recognize_01();
        assert_eq!(moore.initial_output().unwrap(), Some(Output::B));
    }

    #[test]
    fn advance_output_matches_the_target_state() {
        // Moore output comes from the state reached, not the symbol.
        let moore = MooreMachine::recognize_01();
        for state in State::all() {
            for symbol in Symbol::all() {
                let (next, output) = moore.advance(state, symbol).unwrap();
                assert_eq!(output, moore.output_of(next).unwrap());
            }
        }
    }

    #[test]
    fn pattern_completion_lands_in_c() {
        let moore = MooreMachine::recognize_01();
        assert_eq!(moore.step(State::B, Symbol::One).unwrap(), State::C);
    }

    #[test]
    fn partial_tables_fail_the_lookup() {
        let partial = MooreMachine {
            transitions: HashMap::from([((State::A, Symbol::Zero), State::B)]),
            outputs: HashMap::from([(State::A, Output::B)]),
            start: State::A,
        };

        assert_eq!(
            partial.step(State::B, Symbol::Zero).unwrap_err(),
            MachineError::UndefinedTransition {
                state: State::B,
                symbol: Symbol::Zero,
            }
        );
        assert_eq!(
            partial.output_of(State::C).unwrap_err(),
            MachineError::UndefinedOutput { state: State::C }
        );
        assert!(partial.verify_total().is_err());
    }
}
