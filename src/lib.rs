//! Zeroone: Mealy and Moore machines for the pattern "01".
//!
//! Two textbook finite-state transducers recognize "01" in a binary
//! stream: a Mealy machine, whose output rides on the transitions, and a
//! Moore machine, whose output rides on the states. A shared driver runs
//! either over an input sequence and records an immutable step-by-step
//! [`Trace`]; the `report` module renders traces and transition diagrams
//! for the console.
//!
//! The simulation core is pure: machines are immutable lookup tables,
//! [`simulate`] is a fold over the input, and all console output lives in
//! the imperative shell around it.
//!
//! # Core Concepts
//!
//! - **[`Machine`]**: the steppable capability both recognizers share
//! - **[`Trace`]**: ordered record of every step plus the emitted output
//! - **Mealy vs. Moore**: same transition structure, different output
//!   placement; a Moore run emits one more output than it consumes symbols
//!
//! # Example
//!
//! ```rust
//! use zeroone::{simulate, MealyMachine, MooreMachine, Symbol};
//!
//! let input = Symbol::parse_sequence("011001")?;
//!
//! let trace = simulate(&MealyMachine::recognize_01(), &input)?;
//! assert_eq!(trace.output_string(), "babbba");
//!
//! let trace = simulate(&MooreMachine::recognize_01(), &input)?;
//! assert_eq!(trace.output_string(), "bbaabba");
//! # Ok::<(), zeroone::MachineError>(())
//! ```

pub mod core;
pub mod machine;
pub mod report;
pub mod sim;

// Re-export the working surface.
pub use crate::core::{MachineError, Output, State, Symbol, Trace, TraceEntry};
pub use crate::machine::{Machine, MealyMachine, MooreMachine};
pub use crate::sim::simulate;
