//! Walk a traced sort from the terminal.
//!
//! Generates a reproducible random array, traces every algorithm over
//! it, then steps through the bubble sort trace printing each
//! annotated snapshot — the same drive loop a graphical front-end
//! runs, minus the bars.
//!
//! Run with: `cargo run -p vitrine-bench --example step_through`

use vitrine_algos::{generate, generator_for};
use vitrine_core::AlgorithmKind;
use vitrine_input::seeded_sequence;
use vitrine_replay::{trace_hash, TraceCursor};

fn main() {
    let input = seeded_sequence(10, 42);
    println!("Input: {input:?}\n");

    // Trace every algorithm and summarize.
    for kind in AlgorithmKind::ALL {
        let mut values = input.clone();
        let trace = generator_for(kind).generate(&mut values);
        println!(
            "{:<14} {:>4} steps  (time {:<22} space {:<9})  hash {:#018x}",
            kind.display_name(),
            trace.len(),
            kind.time_complexity(),
            kind.space_complexity(),
            trace_hash(&trace),
        );
    }

    // Step through one trace in full.
    let mut values = input.clone();
    let mut cursor = TraceCursor::new(generate(AlgorithmKind::Bubble, &mut values));
    println!("\n=== Bubble Sort, step by step ===");
    loop {
        let step = cursor.current().expect("generator traces are never empty");
        println!(
            "\n[{:>3}/{}] {:?}  comparing {:?}  swapped {:?}",
            cursor.position() + 1,
            cursor.len(),
            step.array,
            step.comparing.as_slice(),
            step.swapped.as_slice(),
        );
        for line in step.explanation.lines() {
            println!("        {line}");
        }
        if !cursor.advance() {
            break;
        }
    }
}
