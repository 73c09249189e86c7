//! Command-line driver.
//!
//! Loads a `.lol` file, runs the interpreter with a stdin-backed input
//! callback, and prints the artifacts. VISIBLE output goes to stdout,
//! the error line to stderr; exit code is 0 only when no diagnostic was
//! produced.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::interpreter::{self, Execution};
use crate::lexeme::Lexeme;
use crate::symbols::SymbolTable;

/// lolrus - a LOLCODE interpreter
#[derive(Parser, Debug)]
#[command(name = "lolrus")]
#[command(version)]
#[command(about = "Interprets a LOLCODE source file", long_about = None)]
pub struct Cli {
    /// Path to the .lol source file
    pub source: PathBuf,

    /// Print the lexeme table after execution
    #[arg(long)]
    pub lexemes: bool,

    /// Print the symbol table after execution
    #[arg(long)]
    pub symbols: bool,

    /// Emit output, lexemes, and symbols as one JSON document
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Entry point for the CLI. Returns the process exit code.
pub fn run_cli() -> Result<i32, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let source = fs::read_to_string(&cli.source)
        .map_err(|error| format!("cannot read {}: {}", cli.source.display(), error))?;
    let mut read_input = prompt_stdin;
    let execution = interpreter::run(&source, &mut read_input);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&json_report(&execution))?);
    } else {
        render(&execution, cli.lexemes, cli.symbols);
    }
    Ok(if execution.error.is_some() { 1 } else { 0 })
}

/// Blocking line reader for GIMMEH. The prompt goes to stderr so stdout
/// stays a clean VISIBLE stream; EOF means cancelled.
fn prompt_stdin(prompt: &str) -> Option<String> {
    eprint!("{} ", prompt);
    io::stderr().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
    }
}

fn render(execution: &Execution, lexemes: bool, symbols: bool) {
    match &execution.error {
        Some(error) => {
            let line = format!("{}\n", error);
            let body = execution
                .output
                .strip_suffix(line.as_str())
                .unwrap_or(&execution.output);
            print!("{}", body);
            eprint!("{}", line);
        }
        None => print!("{}", execution.output),
    }
    if lexemes {
        print_lexeme_table(&execution.lexemes);
    }
    if symbols {
        print_symbol_table(&execution.symbols);
    }
}

fn print_lexeme_table(lexemes: &[Lexeme]) {
    println!();
    println!("{:<24} Classification", "Lexeme");
    for lexeme in lexemes {
        println!("{:<24} {}", lexeme.text, lexeme.classification.as_str());
    }
}

fn print_symbol_table(symbols: &SymbolTable) {
    println!();
    println!("{:<16} {:<24} Type", "Identifier", "Value");
    for (name, value) in symbols.iter() {
        println!("{:<16} {:<24} {}", name, value.payload(), value.type_tag());
    }
}

fn json_report(execution: &Execution) -> serde_json::Value {
    let symbols: Vec<serde_json::Value> = execution
        .symbols
        .iter()
        .map(|(name, value)| {
            serde_json::json!({
                "identifier": name,
                "value": value.payload(),
                "type": value.type_tag(),
            })
        })
        .collect();
    serde_json::json!({
        "output": execution.output,
        "lexemes": execution.lexemes,
        "symbols": symbols,
    })
}

fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .try_init()?;
    Ok(())
}
