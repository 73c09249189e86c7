//! The top-level driver.
//!
//! Wires the preprocessor to the statement dispatcher and owns the three
//! run artifacts: the output stream, the lexeme table, and the symbol
//! table. Runs are independent; every call starts from fresh
//! accumulators with `IT` pre-declared.

use tracing::debug;

use crate::blocks;
use crate::error::RunError;
use crate::expr;
use crate::lexeme::{Lexeme, LexemeClass};
use crate::patterns;
use crate::preprocess;
use crate::stmt;
use crate::symbols::SymbolTable;

/// Everything one run produces. When a diagnostic aborts the run the
/// output stream ends with the echoed offending line (where applicable)
/// and the error line; side effects that already happened stay.
#[derive(Debug)]
pub struct Execution {
    pub output: String,
    pub lexemes: Vec<Lexeme>,
    pub symbols: SymbolTable,
    pub error: Option<RunError>,
}

/// Interpret a source program. `read_input` is the single suspension
/// point, used by `GIMMEH`; returning `None` means the user cancelled.
pub fn run(source: &str, read_input: &mut dyn FnMut(&str) -> Option<String>) -> Execution {
    let mut lexemes = Vec::new();
    let mut symbols = SymbolTable::new();
    let mut output = String::new();

    let error = match preprocess::clean(source, &mut lexemes) {
        Ok(program) => dispatch(&program, &mut lexemes, &mut symbols, &mut output, read_input),
        Err(error) => Some(error),
    };
    if let Some(error) = &error {
        output.push_str(&error.to_string());
        output.push('\n');
    }
    Execution {
        output,
        lexemes,
        symbols,
        error,
    }
}

fn dispatch(
    program: &[String],
    lexemes: &mut Vec<Lexeme>,
    symbols: &mut SymbolTable,
    output: &mut String,
    read_input: &mut dyn FnMut(&str) -> Option<String>,
) -> Option<RunError> {
    let mut index = 0;
    let mut jumps: Vec<usize> = Vec::new();
    loop {
        if index >= program.len() {
            lexemes.push(Lexeme::new("KTHXBYE", LexemeClass::CodeDelimiter));
            return None;
        }
        if jumps.contains(&index) {
            index += 1;
            continue;
        }
        let line = &program[index];
        debug!(index, line = line.as_str(), "dispatch");

        if patterns::I_HAS_A.is_match(line) {
            if !jumps.is_empty() {
                return Some(RunError::DeclarationInBlock);
            }
            lexemes.push(Lexeme::new("I HAS A", LexemeClass::VariableDeclaration));
            match stmt::declaration(line, symbols) {
                Ok((line_lexemes, name, value)) => {
                    lexemes.extend(line_lexemes);
                    symbols.insert(&name, value);
                }
                Err(error) => return Some(echoing(output, line, error)),
            }
        } else if patterns::VISIBLE.is_match(line) {
            lexemes.push(Lexeme::new("VISIBLE", LexemeClass::FunctionIdentifier));
            match stmt::visible(line, symbols) {
                Ok((line_lexemes, printed)) => {
                    lexemes.extend(line_lexemes);
                    output.push_str(&printed);
                }
                Err(error) => return Some(echoing(output, line, error)),
            }
        } else if patterns::GIMMEH.is_match(line) {
            lexemes.push(Lexeme::new("GIMMEH", LexemeClass::FunctionIdentifier));
            match stmt::gimmeh(line, symbols, read_input) {
                Ok((line_lexemes, name, value)) => {
                    lexemes.extend(line_lexemes);
                    symbols.insert(&name, value);
                }
                Err(error) => return Some(echoing(output, line, error)),
            }
        } else if patterns::EXPRESSION.is_match(line) {
            match expr::evaluate(line, symbols) {
                Ok((value, line_lexemes)) => {
                    lexemes.extend(line_lexemes);
                    symbols.set_it(value);
                }
                Err(error) => return Some(echoing(output, line, error)),
            }
        } else if patterns::O_RLY.is_match(line) {
            match blocks::if_else(program, index, symbols) {
                Ok(scan) => {
                    lexemes.extend(scan.lexemes);
                    jumps = scan.skipped;
                    // step past O RLY? and YA RLY
                    index += 2;
                    continue;
                }
                Err((error, at)) => return Some(echoing_at(output, program, at, error)),
            }
        } else if patterns::WTF.is_match(line) {
            match blocks::switch(program, index, symbols) {
                Ok(scan) => {
                    lexemes.extend(scan.lexemes);
                    jumps = scan.skipped;
                    index += 1;
                    continue;
                }
                Err((error, at)) => return Some(echoing_at(output, program, at, error)),
            }
        } else if patterns::YA_RLY.is_match(line) {
            return Some(echoing(output, line, RunError::MissingORly));
        } else if patterns::OMG.is_match(line) || patterns::OMGWTF.is_match(line) {
            return Some(echoing(output, line, RunError::MissingWtf));
        } else if patterns::OIC.is_match(line) {
            if jumps.is_empty() {
                return Some(echoing(output, line, RunError::StrayOic));
            }
            lexemes.push(Lexeme::new("OIC", LexemeClass::FunctionIdentifier));
            jumps.clear();
        } else if patterns::ASSIGN.is_match(line) {
            match stmt::assignment(line, symbols) {
                Ok((line_lexemes, name, value)) => {
                    lexemes.extend(line_lexemes);
                    symbols.insert(&name, value);
                }
                Err(error) => return Some(echoing(output, line, error)),
            }
        } else if patterns::VAR_NAME.is_match(line.trim()) && symbols.contains(line.trim()) {
            // a bare variable reference loads its value into IT
            let name = line.trim();
            if let Some(value) = symbols.get(name).cloned() {
                lexemes.push(Lexeme::new(name, LexemeClass::VariableReference));
                symbols.set_it(value);
            }
        } else {
            return Some(echoing(output, line, RunError::UnrecognizedCommand));
        }
        index += 1;
    }
}

/// Echo the offending line ahead of the error.
fn echoing(output: &mut String, line: &str, error: RunError) -> RunError {
    output.push_str(line);
    output.push('\n');
    error
}

/// Echo the line a block executor pointed at, falling back to its
/// predecessor when the index ran past the end of the program.
fn echoing_at(output: &mut String, program: &[String], at: usize, error: RunError) -> RunError {
    let line = program
        .get(at)
        .or_else(|| program.get(at.saturating_sub(1)));
    if let Some(line) = line {
        output.push_str(line);
        output.push('\n');
    }
    error
}
