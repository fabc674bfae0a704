//! Core simulation types.
//!
//! This module holds the pure data layer of the crate:
//! - The fixed state set and alphabets ([`State`], [`Symbol`], [`Output`])
//! - Machine definition errors ([`MachineError`])
//! - Immutable step-by-step traces ([`Trace`], [`TraceEntry`])
//!
//! Everything here is plain data with no side effects; the `machine` and
//! `sim` modules build on it.

mod error;
mod state;
mod trace;

pub use error::MachineError;
pub use state::{Output, State, Symbol};
pub use trace::{Trace, TraceEntry};
