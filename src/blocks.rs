//! O RLY? and WTF? block execution.
//!
//! Each executor pre-scans its block from the line after the opener:
//! keyword lexemes and the lexemes of lines that will be skipped are
//! collected during the scan, and the skipped line indices go back to
//! the dispatcher, which executes everything else in source order. Block
//! errors carry the index of the line to echo.

use crate::error::RunError;
use crate::expr;
use crate::lexeme::{Lexeme, LexemeClass};
use crate::patterns;
use crate::stmt;
use crate::symbols::SymbolTable;
use crate::value::Value;

/// Result of scanning a block: its lexemes plus the line indices the
/// dispatcher must not execute.
#[derive(Debug)]
pub struct BlockScan {
    pub lexemes: Vec<Lexeme>,
    pub skipped: Vec<usize>,
}

/// `O RLY?` / `YA RLY` / `NO WAI` / `OIC`.
pub fn if_else(
    program: &[String],
    index: usize,
    symbols: &SymbolTable,
) -> Result<BlockScan, (RunError, usize)> {
    let condition = match symbols.it() {
        Value::Unset => return Err((RunError::EmptyImplicitVariable, index)),
        Value::Troof(flag) => *flag,
        _ => return Err((RunError::ConditionNotTroof, index)),
    };

    let mut lexemes = vec![Lexeme::new("O RLY?", LexemeClass::FunctionIdentifier)];
    let mut skipped = Vec::new();
    let mut cursor = index + 1;
    let mut with_if = false;
    let mut with_else = false;
    let mut recording = false;

    loop {
        let line = match program.get(cursor) {
            Some(line) => line,
            None => return Err((RunError::UnterminatedBlock, cursor)),
        };
        if cursor == index + 1 && !patterns::YA_RLY.is_match(line) {
            return Err((RunError::MissingYaRly, cursor));
        }

        if patterns::YA_RLY.is_match(line) {
            if with_if {
                return Err((RunError::DoubleYaRly, cursor));
            }
            lexemes.push(Lexeme::new("YA RLY", LexemeClass::FunctionIdentifier));
            with_if = true;
            recording = !condition;
        } else if patterns::NO_WAI.is_match(line) {
            if with_else {
                return Err((RunError::DoubleNoWai, cursor));
            }
            lexemes.push(Lexeme::new("NO WAI", LexemeClass::FunctionIdentifier));
            skipped.push(cursor);
            with_else = true;
            recording = condition;
        } else if patterns::OIC.is_match(line) {
            break;
        } else if patterns::O_RLY.is_match(line) {
            return Err((RunError::NestedORly, cursor));
        } else if recording {
            match lex_skipped_line(line, symbols) {
                Ok(line_lexemes) => lexemes.extend(line_lexemes),
                Err(error) => return Err((error, cursor)),
            }
            skipped.push(cursor);
        }
        cursor += 1;
    }

    if !with_else {
        return Err((RunError::MissingNoWai, cursor));
    }
    Ok(BlockScan { lexemes, skipped })
}

/// `WTF?` / `OMG` / `OMGWTF` / `GTFO` / `OIC`, with fall-through.
pub fn switch(
    program: &[String],
    index: usize,
    symbols: &SymbolTable,
) -> Result<BlockScan, (RunError, usize)> {
    let it = match symbols.it() {
        Value::Unset => return Err((RunError::EmptyImplicitVariable, index)),
        value => value.clone(),
    };

    let mut lexemes = vec![Lexeme::new("WTF?", LexemeClass::FunctionIdentifier)];
    let mut skipped = Vec::new();
    let mut cursor = index + 1;
    let mut matched = false;
    let mut done = false;
    let mut with_default = false;
    let mut executing = false;

    loop {
        let line = match program.get(cursor) {
            Some(line) => line,
            None => return Err((RunError::UnterminatedBlock, cursor)),
        };
        if cursor == index + 1 && !patterns::OMG.is_match(line) {
            return Err((RunError::MissingOmg, cursor));
        }

        if patterns::OMG.is_match(line) {
            if with_default {
                return Err((RunError::MissingWtf, cursor));
            }
            lexemes.push(Lexeme::new("OMG", LexemeClass::FunctionIdentifier));
            let case = match parse_case_value(line) {
                Ok((value, lexeme)) => {
                    lexemes.push(lexeme);
                    value
                }
                Err(error) => return Err((error, cursor)),
            };
            if matched && !done {
                // fall-through keeps executing into the next case body
                executing = true;
            } else if !done && it.payload_eq(&case) {
                matched = true;
                executing = true;
            } else {
                executing = false;
            }
            skipped.push(cursor);
        } else if patterns::OMGWTF.is_match(line) {
            if with_default {
                return Err((RunError::DoubleDefaultCase, cursor));
            }
            lexemes.push(Lexeme::new("OMGWTF", LexemeClass::FunctionIdentifier));
            with_default = true;
            // the default body runs unless a GTFO already closed the match
            executing = !done;
            skipped.push(cursor);
        } else if patterns::GTFO.is_match(line) {
            lexemes.push(Lexeme::new("GTFO", LexemeClass::FunctionIdentifier));
            if executing {
                done = true;
                executing = false;
            }
            skipped.push(cursor);
        } else if patterns::OIC.is_match(line) {
            break;
        } else if patterns::WTF.is_match(line) {
            return Err((RunError::NestedWtf, cursor));
        } else if !executing {
            match lex_skipped_line(line, symbols) {
                Ok(line_lexemes) => lexemes.extend(line_lexemes),
                Err(error) => return Err((error, cursor)),
            }
            skipped.push(cursor);
        }
        cursor += 1;
    }

    if !with_default {
        return Err((RunError::MissingDefaultCase, cursor));
    }
    Ok(BlockScan { lexemes, skipped })
}

/// Parse the literal after `OMG`. Identifiers are rejected; the TROOF
/// pseudo-values `NOT WIN` and `NOT FAIL` invert.
fn parse_case_value(line: &str) -> Result<(Value, Lexeme), RunError> {
    let raw = patterns::OMG
        .find(line)
        .map(|found| &line[found.end()..])
        .unwrap_or("");
    if raw.is_empty() {
        return Err(RunError::MissingCaseValue);
    }
    let mut value = raw.trim_matches(' ');

    let troof_like = patterns::TROOF_SEARCH.is_match(value);
    let yarn_like =
        value.matches('"').count() == 2 && value.starts_with('"') && value.ends_with('"');
    if !yarn_like && !troof_like {
        let tokens: Vec<&str> = value.split(' ').collect();
        if tokens.len() > 1 {
            return Err(RunError::MultipleCaseValues);
        }
        value = tokens[0];
        if value.is_empty() {
            return Err(RunError::MissingCaseValue);
        }
    }

    let first = value.chars().next();
    let last = value.chars().last();
    if (first == Some('"') || last == Some('"')) && first != last {
        return Err(RunError::UnbalancedYarn);
    }

    if patterns::YARN_SEARCH.is_match(value) {
        let lexeme = Lexeme::new(value, LexemeClass::Literal);
        let content = value.trim_matches('"').to_string();
        Ok((Value::Yarn(content), lexeme))
    } else if troof_like {
        let resolved = match value {
            "NOT WIN" => "FAIL",
            "NOT FAIL" => "WIN",
            other if patterns::TROOF_FULL.is_match(other) => other,
            _ => return Err(RunError::InvalidCaseValue(value.to_string())),
        };
        Ok((
            Value::Troof(resolved == "WIN"),
            Lexeme::new(resolved, LexemeClass::Literal),
        ))
    } else if patterns::VAR_NAME.is_match(value) {
        Err(RunError::InvalidLiteral(value.to_string()))
    } else if patterns::NUMBAR_SEARCH.is_match(value) {
        if patterns::NUMBAR_FULL.is_match(value) {
            let parsed = value
                .parse::<f64>()
                .map_err(|_| RunError::InvalidCaseValue(value.to_string()))?;
            Ok((
                Value::Numbar(parsed),
                Lexeme::new(Value::Numbar(parsed).payload(), LexemeClass::Literal),
            ))
        } else {
            Err(RunError::InvalidCaseValue(value.to_string()))
        }
    } else if patterns::NUMBR_SEARCH.is_match(value) {
        if patterns::NUMBR_FULL.is_match(value) {
            let parsed = value
                .parse::<i64>()
                .map_err(|_| RunError::InvalidCaseValue(value.to_string()))?;
            Ok((
                Value::Numbr(parsed),
                Lexeme::new(parsed.to_string(), LexemeClass::Literal),
            ))
        } else {
            Err(RunError::InvalidCaseValue(value.to_string()))
        }
    } else {
        Err(RunError::InvalidCaseValue(value.to_string()))
    }
}

/// Lex a line that a block decided to skip. Declarations are still
/// illegal; GIMMEH is validated but never prompts; assignments and
/// expressions are evaluated for their lexemes only.
fn lex_skipped_line(line: &str, symbols: &SymbolTable) -> Result<Vec<Lexeme>, RunError> {
    if patterns::I_HAS_A.is_match(line) {
        return Err(RunError::DeclarationInBlock);
    }
    let mut lexemes = Vec::new();
    if patterns::VISIBLE.is_match(line) {
        lexemes.push(Lexeme::new("VISIBLE", LexemeClass::FunctionIdentifier));
        let (line_lexemes, _printed) = stmt::visible(line, symbols)?;
        lexemes.extend(line_lexemes);
    } else if patterns::GIMMEH.is_match(line) {
        lexemes.push(Lexeme::new("GIMMEH", LexemeClass::FunctionIdentifier));
        let target = stmt::gimmeh_target(line, symbols)?;
        lexemes.push(Lexeme::new(target, LexemeClass::VariableReference));
    } else if patterns::EXPRESSION.is_match(line) {
        let (_value, line_lexemes) = expr::evaluate(line, symbols)?;
        lexemes.extend(line_lexemes);
    } else if patterns::ASSIGN.is_match(line) {
        let (line_lexemes, _name, _value) = stmt::assignment(line, symbols)?;
        lexemes.extend(line_lexemes);
    } else if patterns::O_RLY.is_match(line)
        || patterns::WTF.is_match(line)
        || patterns::YA_RLY.is_match(line)
        || patterns::NO_WAI.is_match(line)
        || patterns::OMG.is_match(line)
        || patterns::GTFO.is_match(line)
        || patterns::OMGWTF.is_match(line)
    {
        // block keywords are lexed by the executors themselves
    } else if patterns::VAR_NAME.is_match(line.trim()) && symbols.contains(line.trim()) {
        lexemes.push(Lexeme::new(line.trim(), LexemeClass::VariableReference));
    } else {
        return Err(RunError::UnrecognizedCommand);
    }
    Ok(lexemes)
}
