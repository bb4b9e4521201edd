//! Interactive DPDA
//!
//! A line-oriented front-end: declare an automaton on stdin, enter its
//! transitions state by state, then run input strings against it.
//!
//! Transition rules are entered as `input stackTop nextState replacement`,
//! for example `( eps 0 P` or `) P 0 eps`. Use `eps` for an epsilon input or
//! an empty stack sequence. Stack sequences are read one symbol per
//! character, top first, so stack symbols must be single characters. Enter `-` as an input string to quit.
//!
//! Run with: cargo run --example interactive

use anyhow::{bail, Context, Result};
use dpda::core::{tokenize, InputSymbol, Symbol, EPSILON_TEXT};
use dpda::Dpda;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

struct Prompter<R> {
    lines: io::Lines<R>,
}

impl<R: BufRead> Prompter<R> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        match self.lines.next() {
            Some(line) => Ok(line?.trim().to_string()),
            None => bail!("input closed"),
        }
    }
}

fn split_list(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_sequence(token: &str) -> Vec<Symbol> {
    if token == EPSILON_TEXT {
        Vec::new()
    } else {
        tokenize(token)
    }
}

/// Rule stack sequences are split per character, so longer stack symbols
/// could never be written in a rule.
fn check_stack_symbols(symbols: &[&str]) -> Result<()> {
    if let Some(long) = symbols.iter().find(|s| s.chars().count() != 1) {
        bail!("stack symbol {long:?} must be a single character");
    }
    Ok(())
}

fn parse_rule(from: usize, line: &str) -> Result<dpda::Transition> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [input, top, next, replacement] = parts.as_slice() else {
        bail!("expected `input stackTop nextState replacement`, got {line:?}");
    };

    let input = if *input == EPSILON_TEXT {
        InputSymbol::Epsilon
    } else {
        InputSymbol::from(*input)
    };
    let next: usize = next
        .parse()
        .with_context(|| format!("next state {next:?} is not a number"))?;

    Ok(dpda::Transition::new(
        from,
        input,
        parse_sequence(top),
        next,
        parse_sequence(replacement),
    ))
}

fn read_automaton<R: BufRead>(prompter: &mut Prompter<R>) -> Result<Dpda> {
    let states: usize = prompter
        .ask("Enter number of states : ")?
        .parse()
        .context("number of states must be a non-negative integer")?;

    let inputs = prompter.ask("Enter input alphabet as a comma-separated list of symbols : ")?;
    let stack = prompter.ask(
        "Enter stack alphabet as a comma-separated list of single-character symbols (blank to reuse input alphabet) : ",
    )?;
    let accepting = prompter.ask("Enter accepting states as a comma-separated list of integers : ")?;

    let accept = split_list(&accepting)
        .map(|s| s.parse::<usize>().with_context(|| format!("invalid state {s:?}")))
        .collect::<Result<BTreeSet<_>>>()?;

    let mut builder = Dpda::builder()
        .states(states)
        .input_alphabet(split_list(&inputs))
        .accept(accept);
    let stack_symbols: Vec<&str> = if stack.trim().is_empty() {
        split_list(&inputs).collect()
    } else {
        split_list(&stack).collect()
    };
    check_stack_symbols(&stack_symbols)?;
    if !stack.trim().is_empty() {
        builder = builder.stack_alphabet(stack_symbols);
    }
    let mut dpda = builder.build()?;

    for state in 0..states {
        loop {
            println!("Transitions for state {state}:");
            for t in dpda.transitions_for(state) {
                println!("{t:#}");
            }
            let answer = prompter.ask(&format!("Need a transition rule for state {state} ? (y or n) "))?;
            if !answer.to_lowercase().starts_with('y') {
                break;
            }
            let line = prompter.ask("Enter rule (input stackTop nextState replacement) : ")?;
            match parse_rule(state, &line).map(|t| dpda.add_transition(t)) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => println!("Rejected: {err}"),
                Err(err) => println!("Could not read rule: {err:#}"),
            }
        }
    }

    Ok(dpda)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let stdin = io::stdin();
    let mut prompter = Prompter {
        lines: stdin.lock().lines(),
    };

    let dpda = read_automaton(&mut prompter)?;
    println!("Printing all transitions...");
    print!("{dpda}");

    loop {
        let input = prompter.ask("Enter an input string to be processed by the PDA : ")?;
        if input == "-" {
            break;
        }
        let trace = dpda.run(&tokenize(&input));
        println!("Accept string {input}? {}", trace.is_accepted());
        print!("{trace}");
    }

    Ok(())
}
