//! The Mealy recognizer.

use super::Machine;
use crate::core::{MachineError, Output, State, Symbol};
use std::collections::HashMap;

/// A Mealy machine recognizing "01" in a binary stream.
///
/// Output is a function of the current state *and* the input symbol,
/// emitted once per transition: `'a'` exactly on the transition that
/// completes an "01" occurrence, `'b'` everywhere else.
///
/// The transition table is fixed at construction and total over the
/// state×symbol space; [`verify_total`](MealyMachine::verify_total)
/// checks this.
///
/// # Example
///
/// ```rust
/// use zeroone::{MealyMachine, Output, State, Symbol};
///
/// let mealy = MealyMachine::recognize_01();
/// let (next, output) = mealy.step(State::B, Symbol::One).unwrap();
/// assert_eq!(next, State::C);
/// assert_eq!(output, Output::A); // "01" just completed
/// ```
pub struct MealyMachine {
    transitions: HashMap<(State, Symbol), (State, Output)>,
    start: State,
}

impl MealyMachine {
    /// Build the fixed "01" recognizer.
    ///
    /// State A has seen nothing useful, B has just seen a `0`, and C is
    /// entered on the `1` that completes the pattern.
    pub fn recognize_01() -> Self {
        let transitions = HashMap::from([
            ((State::A, Symbol::Zero), (State::B, Output::B)),
            ((State::A, Symbol::One), (State::A, Output::B)),
            ((State::B, Symbol::Zero), (State::B, Output::B)),
            ((State::B, Symbol::One), (State::C, Output::A)),
            ((State::C, Symbol::Zero), (State::A, Output::B)),
            ((State::C, Symbol::One), (State::C, Output::B)),
        ]);

        Self {
            transitions,
            start: State::A,
        }
    }

    /// Look up one transition: `(state, symbol) → (next, output)`.
    ///
    /// A missing key is a malformed machine definition and fails hard
    /// with [`MachineError::UndefinedTransition`].
    pub fn step(&self, state: State, symbol: Symbol) -> Result<(State, Output), MachineError> {
        self.transitions
            .get(&(state, symbol))
            .copied()
            .ok_or(MachineError::UndefinedTransition { state, symbol })
    }

    /// Check that every (state, symbol) pair has a transition.
    pub fn verify_total(&self) -> Result<(), MachineError> {
        for state in State::all() {
            for symbol in Symbol::all() {
                if !self.transitions.contains_key(&(state, symbol)) {
                    return Err(MachineError::UndefinedTransition { state, symbol });
                }
            }
        }
        Ok(())
    }
}

impl Default for MealyMachine {
    fn default() -> Self {
        Self::recognize_01()
    }
}

impl Machine for MealyMachine {
    fn kind(&self) -> &'static str {
        "MEALY"
    }

    fn start(&self) -> State {
        self.start
    }

    fn advance(&self, state: State, symbol: Symbol) -> Result<(State, Output), MachineError> {
        self.step(state, symbol)
    }
}
