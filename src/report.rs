//! Console rendering of diagrams and simulation traces.
//!
//! Presentation only: everything here consumes a finished [`Trace`] and
//! turns it into text. Uses the `console` crate for colored headers and
//! results; the table and diagram rendering are plain strings so they
//! stay testable.

use crate::core::Trace;
use console::Style;

/// Transition diagram of the Mealy recognizer (edges labeled input/output).
pub const MEALY_DIAGRAM: &str = "
======================
   MEALY MACHINE
======================

(Outputs 'a' when '01' occurs, else 'b')

                          ┌───────────────┐
                 1/b  ↺   │       A       │─────0/b────▶│       B       │
                    ◀─────┘   (start)     │             │               │
                           └──────────────┘             └─────┬─────────┘
                                                               │
                                                               │
                                                               │1/a
                                                               ▼
                                                         ┌───────────────┐
                                                         │       C       │
                                                         └─────┬─────────┘
                                                               │
                                                               │0/b
                                                               ▼
                                                         ┌───────────────┐
                                                         │       A       │
                                                         └───────────────┘

(Transitions are labeled as input/output)
";

/// Transition diagram of the Moore recognizer (outputs attached to states).
pub const MOORE_DIAGRAM: &str = "
======================
   MOORE MACHINE
======================

(Outputs 'a' in state C, which indicates '01' was seen)

                          ┌───────────────┐
                 1        │       A       │─────0────▶│       B       │
                    ◀─────┘   (start,b)   │           │   (b)         │
                           └──────────────┘           └─────┬─────────┘
                                                             │
                                                             │1
                                                             ▼
                                                       ┌───────────────┐
                                                       │       C       │
                                                       │     (a)       │
                                                       └─────┬─────────┘
                                                             │
                                                             │0
                                                             ▼
                                                       ┌───────────────┐
                                                       │       A       │
                                                       │     (b)       │
                                                       └───────────────┘
";

fn row(label: &str, cells: impl Iterator<Item = String>) -> String {
    let joined = cells
        .map(|cell| format!("{cell:<3}"))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{label}{joined}")
}

/// Render a trace as a transposed step table.
///
/// One column per step, one row each for the step index, the state the
/// symbol arrived in, the symbol, the state moved to, and the output.
/// An empty trace renders the bare row labels.
pub fn render_table(trace: &Trace) -> String {
    let entries = trace.entries();
    [
        row("Step:  ", entries.iter().map(|e| e.step.to_string())),
        row("State: ", entries.iter().map(|e| e.from.to_string())),
        row("Input: ", entries.iter().map(|e| e.input.to_string())),
        row("Next:  ", entries.iter().map(|e| e.to.to_string())),
        row("Output:", entries.iter().map(|e| e.output.to_string())),
    ]
    .join("\n")
}

/// Render the output sequence with 1-based positions: `1:b 2:b 3:a ...`.
pub fn numbered_output(trace: &Trace) -> String {
    trace
        .outputs()
        .iter()
        .enumerate()
        .map(|(i, output)| format!("{}:{output}", i + 1))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Styled console reporter for diagrams and simulation runs.
pub struct Reporter {
    header: Style,
    result: Style,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            result: Style::new().green().bold(),
        }
    }

    /// Print both static transition diagrams.
    pub fn print_diagrams(&self) {
        println!("{MEALY_DIAGRAM}");
        println!("{MOORE_DIAGRAM}");
    }

    /// Print one simulation run: header, step table, final output and
    /// numbered output.
    pub fn print_simulation(&self, kind: &str, raw_input: &str, trace: &Trace) {
        println!();
        println!(
            "{}",
            self.header
                .apply_to(format!("--- {kind} SIMULATION for input: {raw_input} ---"))
        );
        println!("{}", render_table(trace));
        println!();
        println!(
            "Final Output: {}",
            self.result.apply_to(trace.output_string())
        );
        println!();
        println!("Numbered Output: {}", numbered_output(trace));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{MealyMachine, MooreMachine};
    use crate::{simulate, Symbol};

    fn mealy_trace(s: &str) -> Trace {
        simulate(&MealyMachine::recognize_01(), &Symbol::parse_sequence(s).unwrap()).unwrap()
    }

    #[test]
    fn diagrams_name_their_machines() {
        assert!(MEALY_DIAGRAM.contains("MEALY MACHINE"));
        assert!(MOORE_DIAGRAM.contains("MOORE MACHINE"));
    }

    #[test]
    fn table_has_one_row_per_field() {
        let table = render_table(&mealy_trace("011"));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Step:  1    2    3  ");
        assert_eq!(lines[1], "State: A    B    C  ");
        assert_eq!(lines[2], "Input: 0    1    1  ");
        assert_eq!(lines[3], "Next:  B    C    C  ");
        assert_eq!(lines[4], "Output:b    a    b  ");
    }

    #[test]
    fn empty_trace_renders_bare_labels() {
        let table = render_table(&mealy_trace(""));
        assert_eq!(table, "Step:  \nState: \nInput: \nNext:  \nOutput:");
    }

    #[test]
    fn numbered_output_counts_from_one() {
        assert_eq!(numbered_output(&mealy_trace("011")), "1:b 2:a 3:b");
    }

    #[test]
    fn numbered_output_includes_the_moore_seed() {
        let trace = simulate(
            &MooreMachine::recognize_01(),
            &Symbol::parse_sequence("01").unwrap(),
        )
        .unwrap();
        assert_eq!(numbered_output(&trace), "1:b 2:b 3:a");
    }
}
