//! Step-by-step simulation traces.
//!
//! A trace is the structured record a simulation run produces and a
//! reporter consumes. Traces are immutable values: `seed` and `record`
//! return a new trace rather than mutating in place.

use super::state::{Output, State, Symbol};
use serde::{Deserialize, Serialize};

/// Record of a single simulation step.
///
/// Entries are immutable once recorded and ordered by their 1-based
/// `step` index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// 1-based step index.
    pub step: usize,
    /// State the machine was in when the symbol arrived.
    pub from: State,
    /// The consumed input symbol.
    pub input: Symbol,
    /// State the machine moved to.
    pub to: State,
    /// Output emitted at this step.
    pub output: Output,
}

/// Ordered record of a full simulation run.
///
/// Holds the per-step entries plus the emitted output sequence. The two
/// are not always the same length: a Moore machine seeds the output with
/// its start state's output before consuming any input, so its output
/// sequence is one longer than its entry list.
///
/// # Example
///
/// ```rust
/// use zeroone::{Output, State, Symbol, Trace, TraceEntry};
///
/// let trace = Trace::new();
/// let entry = TraceEntry {
///     step: 1,
///     from: State::A,
///     input: Symbol::Zero,
///     to: State::B,
///     output: Output::B,
/// };
///
/// let recorded = trace.record(entry);
/// assert_eq!(recorded.entries().len(), 1);
/// assert_eq!(trace.entries().len(), 0); // original unchanged
/// assert_eq!(recorded.output_string(), "b");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    entries: Vec<TraceEntry>,
    outputs: Vec<Output>,
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

impl Trace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Seed the output sequence with an output emitted before any input,
    /// returning a new trace.
    ///
    /// This is the Moore convention: the start state emits its output
    /// before the first symbol is consumed. No trace entry is added.
    pub fn seed(&self, output: Output) -> Self {
        let mut outputs = self.outputs.clone();
        outputs.push(output);
        Self {
            entries: self.entries.clone(),
            outputs,
        }
    }

    /// Record a step, returning a new trace.
    ///
    /// The entry's output is appended to the output sequence; the
    /// original trace is left untouched.
    pub fn record(&self, entry: TraceEntry) -> Self {
        let mut entries = self.entries.clone();
        let mut outputs = self.outputs.clone();
        outputs.push(entry.output);
        entries.push(entry);
        Self { entries, outputs }
    }

    /// All recorded steps, in order.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// The full emitted output sequence, seed output included.
    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// The output sequence concatenated into a string, e.g. `"babbba"`.
    pub fn output_string(&self) -> String {
        self.outputs.iter().map(Output::as_char).collect()
    }

    /// The states traversed: the starting state, then the target of each
    /// step.
    ///
    /// Empty when no steps were recorded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zeroone::{simulate, MealyMachine, Symbol};
    ///
    /// let mealy = MealyMachine::recognize_01();
    /// let input = Symbol::parse_sequence("01").unwrap();
    /// let trace = simulate(&mealy, &input).unwrap();
    ///
    /// use zeroone::State;
    /// assert_eq!(trace.path(), vec![State::A, State::B, State::C]);
    /// ```
    pub fn path(&self) -> Vec<State> {
        let mut path = Vec::new();
        if let Some(first) = self.entries.first() {
            path.push(first.from);
        }
        for entry in &self.entries {
            path.push(entry.to);
        }
        path
    }

    /// True when the trace holds no steps and no seeded output.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.outputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(step: usize, from: State, input: Symbol, to: State, output: Output) -> TraceEntry {
        TraceEntry {
            step,
            from,
            input,
            to,
            output,
        }
    }

    #[test]
    fn new_trace_is_empty() {
        let trace = Trace::new();
        assert!(trace.is_empty());
        assert_eq!(trace.output_string(), "");
        assert!(trace.path().is_empty());
    }

    #[test]
    fn record_appends_entry_and_output() {
        let trace = Trace::new().record(entry(1, State::A, Symbol::Zero, State::B, Output::B));
        assert_eq!(trace.entries().len(), 1);
        assert_eq!(trace.outputs(), &[Output::B]);
    }

    #[test]
    fn record_is_immutable() {
        let trace = Trace::new();
        let recorded = trace.record(entry(1, State::A, Symbol::One, State::A, Output::B));

        assert_eq!(trace.entries().len(), 0);
        assert_eq!(recorded.entries().len(), 1);
    }

    #[test]
    fn seed_adds_output_without_entry() {
        let trace = Trace::new().seed(Output::B);
        assert_eq!(trace.entries().len(), 0);
        assert_eq!(trace.output_string(), "b");
        assert!(!trace.is_empty());
    }

    #[test]
    fn path_returns_state_sequence() {
        let trace = Trace::new()
            .record(entry(1, State::A, Symbol::Zero, State::B, Output::B))
            .record(entry(2, State::B, Symbol::One, State::C, Output::A));

        assert_eq!(trace.path(), vec![State::A, State::B, State::C]);
    }

    #[test]
    fn output_string_concatenates_in_order() {
        let trace = Trace::new()
            .seed(Output::B)
            .record(entry(1, State::A, Symbol::Zero, State::B, Output::B))
            .record(entry(2, State::B, Symbol::One, State::C, Output::A));

        assert_eq!(trace.output_string(), "bba");
    }

    #[test]
    fn trace_serializes_correctly() {
        let trace = Trace::new().record(entry(1, State::A, Symbol::Zero, State::B, Output::B));

        let json = serde_json::to_string(&trace).unwrap();
        let back: Trace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, back);
    }
}
