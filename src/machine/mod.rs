//! The two "01" recognizers and the capability they share.

mod mealy;
mod moore;

pub use mealy::MealyMachine;
pub use moore::MooreMachine;

use crate::core::{MachineError, Output, State, Symbol};

/// A steppable finite-state machine.
///
/// The simulation driver is generic over this trait; it is what lets one
/// loop drive both recognizers even though they place their outputs
/// differently (Mealy on the transition, Moore on the state).
pub trait Machine {
    /// Machine kind label for report headers, e.g. `"MEALY"`.
    fn kind(&self) -> &'static str;

    /// The fixed start state.
    fn start(&self) -> State;

    /// Output emitted before any input is consumed.
    ///
    /// Moore machines emit their start state's output here; Mealy
    /// machines emit nothing until the first transition, which the
    /// default implementation reflects.
    fn initial_output(&self) -> Result<Option<Output>, MachineError> {
        Ok(None)
    }

    /// Consume one symbol in `state`, yielding the next state and the
    /// output emitted by that step.
    ///
    /// Fails with a [`MachineError`] if the machine's tables do not cover
    /// the pair; the shipped recognizers are total, so this only fires
    /// for a hand-built partial machine.
    fn advance(&self, state: State, symbol: Symbol) -> Result<(State, Output), MachineError>;
}
