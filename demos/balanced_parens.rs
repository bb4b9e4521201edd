//! Balanced Parentheses
//!
//! This example builds the classic one-state DPDA for balanced parentheses
//! and prints the trace of a few inputs.
//!
//! Key concepts:
//! - Stack-epsilon push on `(`
//! - Stack-reading pop on `)`
//! - Rejection by getting stuck
//!
//! Run with: cargo run --example balanced_parens
//! Set RUST_LOG=dpda=trace to see every step logged.

use dpda::builder::{pop_transition, push_transition};
use dpda::core::tokenize;
use dpda::Dpda;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Balanced Parentheses DPDA ===\n");

    let dpda = Dpda::builder()
        .states(2)
        .input_alphabet(["(", ")"])
        .stack_alphabet(["P"])
        .accept([0])
        .transition(push_transition(0, "(", 0, ["P"]))
        .transition(pop_transition(0, ")", "P", 0))
        .build()?;

    println!("Printing all transitions...");
    print!("{dpda}");

    for input in ["(())", "(()", "())"] {
        let trace = dpda.run(&tokenize(input));
        println!("\nAccept string {input}? {}", trace.is_accepted());
        print!("{trace}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
