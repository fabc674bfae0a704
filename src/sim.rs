//! The simulation driver.
//!
//! One generic loop drives both recognizers. The machine decides where
//! outputs come from (transition vs. state); the driver only walks the
//! input and records what happened.

use crate::core::{MachineError, Symbol, Trace, TraceEntry};
use crate::machine::Machine;

/// Run `machine` over `input`, producing the full step-by-step trace.
///
/// Symbols are consumed strictly left to right, one per step, with no
/// lookahead. The trace is seeded with the machine's
/// [`initial_output`](Machine::initial_output) first, so a Moore run over
/// N symbols yields N trace entries but N+1 outputs, while a Mealy run
/// yields N of each. An empty input therefore produces an empty trace
/// whose output string is `""` for Mealy and the start state's output
/// for Moore.
///
/// Each call builds a fresh trace; re-running the same machine over the
/// same input yields an identical one.
///
/// # Example
///
/// ```rust
/// use zeroone::{simulate, MealyMachine, MooreMachine, Symbol};
///
/// let input = Symbol::parse_sequence("011001").unwrap();
///
/// let mealy = simulate(&MealyMachine::recognize_01(), &input).unwrap();
/// assert_eq!(mealy.output_string(), "babbba");
///
/// let moore = simulate(&MooreMachine::recognize_01(), &input).unwrap();
/// assert_eq!(moore.output_string(), "bbaabba");
/// ```
pub fn simulate<M: Machine>(machine: &M, input: &[Symbol]) -> Result<Trace, MachineError> {
    let mut trace = Trace::new();
    if let Some(output) = machine.initial_output()? {
        trace = trace.seed(output);
    }

    let mut current = machine.start();
    for (i, &symbol) in input.iter().enumerate() {
        let (next, output) = machine.advance(current, symbol)?;
        trace = trace.record(TraceEntry {
            step: i + 1,
            from: current,
            input: symbol,
            to: next,
            output,
        });
        current = next;
    }

    Ok(trace)
}
