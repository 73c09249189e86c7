//! Statement handlers: declaration, assignment, VISIBLE, and GIMMEH.
//!
//! Each handler returns its lexemes plus whatever effect it produced;
//! the dispatcher owns the accumulators and applies the effects.

use crate::error::RunError;
use crate::expr;
use crate::lexeme::{Lexeme, LexemeClass};
use crate::patterns;
use crate::symbols::SymbolTable;
use crate::value::Value;

/// `I HAS A <name> [ITZ <rhs>]`. Returns the lexemes after the
/// `I HAS A` keyword plus the binding to install.
pub fn declaration(
    line: &str,
    symbols: &SymbolTable,
) -> Result<(Vec<Lexeme>, String, Value), RunError> {
    let rest = patterns::I_HAS_A
        .find(line)
        .map(|found| &line[found.end()..])
        .unwrap_or(line);
    let parts: Vec<&str> = patterns::ITZ.split(rest).collect();
    let (raw_name, initializer) = if parts.len() > 1 {
        if parts[1].is_empty() {
            return Err(RunError::MissingInitializer(parts[0].to_string()));
        }
        (parts[0], Some(parts[1]))
    } else {
        (rest, None)
    };
    let name = raw_name.trim_matches(' ');
    if !patterns::VAR_NAME.is_match(name) {
        return Err(RunError::InvalidVariableName(name.to_string()));
    }

    let mut lexemes = vec![Lexeme::new(name, LexemeClass::VariableIdentifier)];
    let value = match initializer {
        None => Value::Noob,
        Some(rhs) => {
            lexemes.push(Lexeme::new("ITZ", LexemeClass::VariableAssignment));
            rhs_value(rhs, symbols, &mut lexemes)?
        }
    };
    Ok((lexemes, name.to_string(), value))
}

/// `<name> R <rhs>`.
pub fn assignment(
    line: &str,
    symbols: &SymbolTable,
) -> Result<(Vec<Lexeme>, String, Value), RunError> {
    let parts: Vec<&str> = patterns::ASSIGN.split(line).collect();
    let left_raw = parts.first().copied().unwrap_or("");
    let right_raw = parts.last().copied().unwrap_or("");
    if left_raw.is_empty() {
        return Err(RunError::MissingAssignTarget);
    }
    if right_raw.is_empty() {
        return Err(RunError::MissingAssignValue);
    }

    let left_tokens: Vec<&str> = left_raw.trim_matches(' ').split(' ').collect();
    if left_tokens.len() > 1 {
        return Err(RunError::MultipleAssignTargets);
    }
    let name = left_tokens[0];

    let mut value = right_raw.trim_matches(' ').to_string();
    if !value.starts_with('"') && !value.ends_with('"') && !patterns::EXPRESSION.is_match(&value) {
        let tokens: Vec<&str> = value.split(' ').collect();
        if tokens.len() > 1 {
            return Err(RunError::MultipleAssignValues);
        }
        value = tokens[0].to_string();
    }

    if !patterns::VAR_NAME.is_match(name) || !symbols.contains(name) {
        return Err(RunError::UnknownReference(name.to_string()));
    }
    let mut lexemes = vec![if name == "IT" {
        Lexeme::new(name, LexemeClass::ImplicitVariable)
    } else {
        Lexeme::new(name, LexemeClass::VariableReference)
    }];
    lexemes.push(Lexeme::new("R", LexemeClass::AssignmentOperator));
    let stored = rhs_value(&value, symbols, &mut lexemes)?;
    Ok((lexemes, name.to_string(), stored))
}

/// The shared right-hand-side grammar of `ITZ` and `R`: expression,
/// YARN literal, TROOF literal, variable reference, float, or integer.
fn rhs_value(
    value: &str,
    symbols: &SymbolTable,
    lexemes: &mut Vec<Lexeme>,
) -> Result<Value, RunError> {
    if patterns::EXPRESSION.is_match(value) {
        let (result, expr_lexemes) = expr::evaluate(value, symbols)?;
        lexemes.extend(expr_lexemes);
        Ok(result)
    } else if patterns::YARN_SEARCH.is_match(value) {
        let content = yarn_literal(value, lexemes)?;
        Ok(Value::Yarn(content))
    } else if patterns::TROOF_FULL.is_match(value) {
        lexemes.push(Lexeme::new(value, LexemeClass::Literal));
        Ok(Value::Troof(value == "WIN"))
    } else if patterns::VAR_NAME.is_match(value) {
        match symbols.get(value) {
            Some(stored) => {
                lexemes.push(Lexeme::new(value, LexemeClass::VariableReference));
                Ok(stored.clone())
            }
            None => Err(RunError::UnknownReference(value.to_string())),
        }
    } else if patterns::NUMBAR_FULL.is_match(value) {
        lexemes.push(Lexeme::new(value, LexemeClass::Literal));
        value
            .parse::<f64>()
            .map(Value::Numbar)
            .map_err(|_| RunError::InvalidValue(value.to_string()))
    } else if patterns::NUMBR_FULL.is_match(value) {
        lexemes.push(Lexeme::new(value, LexemeClass::Literal));
        value
            .parse::<i64>()
            .map(Value::Numbr)
            .map_err(|_| RunError::InvalidValue(value.to_string()))
    } else {
        Err(RunError::InvalidValue(value.to_string()))
    }
}

/// Parse a YARN literal that must span the whole value. Internal quotes
/// are stored escaped; stray text around the outer quotes is Error 23.
fn yarn_literal(value: &str, lexemes: &mut Vec<Lexeme>) -> Result<String, RunError> {
    let parts = split_keep_quotes(value);
    let head_empty = parts.first().is_some_and(|part| part.is_empty());
    let tail_empty = parts.last().is_some_and(|part| part.is_empty());
    if !head_empty || !tail_empty {
        return Err(RunError::UnpairedQuotes);
    }
    let mut content = String::new();
    let inner = parts
        .get(2..parts.len().saturating_sub(2))
        .unwrap_or_default();
    for part in inner {
        if part == "\"" {
            content.push_str("\\\"");
        } else {
            content.push_str(part);
        }
    }
    lexemes.push(Lexeme::new("\"", LexemeClass::StringDelimiter));
    lexemes.push(Lexeme::new(content.clone(), LexemeClass::Literal));
    lexemes.push(Lexeme::new("\"", LexemeClass::StringDelimiter));
    Ok(content)
}

/// Split a string into runs of text with each `"` as its own element,
/// keeping empty runs at the boundaries.
fn split_keep_quotes(text: &str) -> Vec<String> {
    let mut parts = vec![String::new()];
    for c in text.chars() {
        if c == '"' {
            parts.push("\"".to_string());
            parts.push(String::new());
        } else if let Some(last) = parts.last_mut() {
            last.push(c);
        }
    }
    parts
}

/// `VISIBLE <args>`. Returns the lexemes after the keyword plus the text
/// to append to the output stream (one trailing space per item, one
/// newline per statement).
pub fn visible(line: &str, symbols: &SymbolTable) -> Result<(Vec<Lexeme>, String), RunError> {
    let region = patterns::VISIBLE
        .find_iter(line)
        .last()
        .map(|found| &line[found.end()..])
        .unwrap_or("");
    if region.is_empty() {
        return Err(RunError::EmptyVisible);
    }
    if region.matches('"').count() % 2 != 0 {
        return Err(RunError::UnbalancedYarn);
    }

    let mut lexemes = Vec::new();
    let mut printed = String::new();

    // A region that is itself one prefix expression evaluates whole, so
    // quoted operands inside SMOOSH or a comparison stay intact.
    if patterns::MATH_HEAD.is_match(region)
        || patterns::COMP_HEAD.is_match(region)
        || patterns::BOOL_HEAD.is_match(region)
        || patterns::SMOOSH_HEAD.is_match(region)
    {
        let (value, expr_lexemes) = expr::evaluate(region, symbols)?;
        lexemes.extend(expr_lexemes);
        printed.push_str(&value.payload());
        printed.push(' ');
        printed.push('\n');
        return Ok((lexemes, printed));
    }

    // Otherwise: split out string literals, then resolve the remaining
    // whitespace-separated tokens one by one.
    let mut string_literals: Vec<String> = Vec::new();
    for found in patterns::YARN_SEARCH.find_iter(region) {
        let mut literal = found.as_str().replace('"', "");
        if !region.contains(&literal) && literal.ends_with(' ') {
            literal.pop();
        }
        string_literals.push(literal);
    }

    let segments = region
        .split('"')
        .filter(|segment| *segment != " " && !segment.is_empty());
    for segment in segments {
        if string_literals.iter().any(|literal| literal == segment) {
            lexemes.push(Lexeme::new("\"", LexemeClass::StringDelimiter));
            lexemes.push(Lexeme::new(segment, LexemeClass::Literal));
            lexemes.push(Lexeme::new("\"", LexemeClass::StringDelimiter));
            printed.push_str(segment);
            printed.push(' ');
        } else if patterns::EXPRESSION.is_match(segment) {
            let (value, expr_lexemes) = expr::evaluate(segment, symbols)?;
            lexemes.extend(expr_lexemes);
            printed.push_str(&value.payload());
            printed.push(' ');
        } else {
            for token in segment.trim_matches(' ').split(' ') {
                if patterns::TROOF_FULL.is_match(token) {
                    lexemes.push(Lexeme::new(token, LexemeClass::Literal));
                    printed.push_str(token);
                } else if patterns::VAR_NAME.is_match(token) {
                    match symbols.get(token) {
                        Some(value) => {
                            lexemes.push(Lexeme::new(token, LexemeClass::VariableReference));
                            printed.push_str(&value.payload());
                        }
                        None => return Err(RunError::UnknownReference(token.to_string())),
                    }
                } else if patterns::NUMBAR_FULL.is_match(token)
                    || patterns::NUMBR_FULL.is_match(token)
                {
                    lexemes.push(Lexeme::new(token, LexemeClass::Literal));
                    printed.push_str(token);
                } else {
                    return Err(RunError::InvalidValue(token.to_string()));
                }
                printed.push(' ');
            }
        }
    }
    printed.push('\n');
    Ok((lexemes, printed))
}

/// Validate a `GIMMEH` target without touching the input callback; used
/// both for dispatch and for lexing skipped lines.
pub fn gimmeh_target(line: &str, symbols: &SymbolTable) -> Result<String, RunError> {
    let region = patterns::GIMMEH
        .find_iter(line)
        .last()
        .map(|found| &line[found.end()..])
        .unwrap_or("");
    let region = region.trim_matches(' ');
    let tokens: Vec<&str> = region.split(' ').collect();
    if tokens.len() > 1 {
        return Err(RunError::MultipleGimmeh);
    }
    let name = tokens[0];
    if name.is_empty() {
        return Err(RunError::EmptyGimmeh);
    }
    if patterns::VAR_NAME.is_match(name) && symbols.contains(name) {
        Ok(name.to_string())
    } else {
        Err(RunError::UnknownReference(name.to_string()))
    }
}

/// `GIMMEH <name>`: solicit one line and classify it.
pub fn gimmeh(
    line: &str,
    symbols: &SymbolTable,
    read_input: &mut dyn FnMut(&str) -> Option<String>,
) -> Result<(Vec<Lexeme>, String, Value), RunError> {
    let name = gimmeh_target(line, symbols)?;
    let prompt = format!("Enter value for {}:", name);
    let input = match read_input(&prompt) {
        Some(text) => text,
        None => return Err(RunError::MissingInput),
    };
    let value = classify_input(&input);
    let lexemes = vec![Lexeme::new(&name, LexemeClass::VariableReference)];
    Ok((lexemes, name, value))
}

fn classify_input(input: &str) -> Value {
    if patterns::NUMBAR_FULL.is_match(input) {
        if let Ok(parsed) = input.parse::<f64>() {
            return Value::Numbar(parsed);
        }
    } else if patterns::NUMBR_FULL.is_match(input) {
        if let Ok(parsed) = input.parse::<i64>() {
            return Value::Numbr(parsed);
        }
    }
    Value::Yarn(input.replace('"', "\\\""))
}
