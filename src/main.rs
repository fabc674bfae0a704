use zeroone::report::Reporter;
use zeroone::{simulate, Machine, MachineError, MealyMachine, MooreMachine, Symbol};

/// The demo inputs the trace tables are printed for.
const DEMO_INPUTS: &[&str] = &["011001", "110011"];

fn main() -> Result<(), MachineError> {
    let reporter = Reporter::new();

    let mealy = MealyMachine::recognize_01();
    let moore = MooreMachine::recognize_01();
    mealy.verify_total()?;
    moore.verify_total()?;

    reporter.print_diagrams();

    for raw in DEMO_INPUTS {
        let input = Symbol::parse_sequence(raw)?;

        let trace = simulate(&mealy, &input)?;
        reporter.print_simulation(mealy.kind(), raw, &trace);

        let trace = simulate(&moore, &input)?;
        reporter.print_simulation(moore.kind(), raw, &trace);
    }

    Ok(())
}
