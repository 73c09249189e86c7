//! Single-operand resolution.
//!
//! Resolves one trimmed token to a typed value: a quoted numeric, a
//! variable reference, a bare numeric literal, or a TROOF literal. The
//! mode decides which coercions apply and which types are admissible.

use crate::error::RunError;
use crate::expr::Op;
use crate::lexeme::{Lexeme, LexemeClass};
use crate::patterns;
use crate::symbols::SymbolTable;
use crate::value::Value;

/// Evaluation context for a lone operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Math,
    Bool,
}

pub fn evaluate(
    token: &str,
    symbols: &SymbolTable,
    mode: Mode,
    op: Op,
) -> Result<(Value, Vec<Lexeme>), RunError> {
    // Quoted numerics are admissible in arithmetic position only.
    if mode == Mode::Math && patterns::YARN_SEARCH.is_match(token) {
        let value = quoted_numeric(&token.replace('"', ""))?;
        let lexemes = vec![
            Lexeme::new("\"", LexemeClass::StringDelimiter),
            Lexeme::new(value.payload(), LexemeClass::Literal),
            Lexeme::new("\"", LexemeClass::StringDelimiter),
        ];
        return Ok((value, lexemes));
    }

    if patterns::VAR_NAME.is_match(token) && symbols.contains(token) {
        return variable_reference(token, symbols, mode, op);
    }

    if patterns::NUMBR_SEARCH.is_match(token) {
        return numeric_literal(token, mode);
    }

    if mode == Mode::Bool && patterns::TROOF_SEARCH.is_match(token) {
        return if patterns::TROOF_FULL.is_match(token) {
            let lexemes = vec![Lexeme::new(token, LexemeClass::Literal)];
            Ok((Value::Troof(token == "WIN"), lexemes))
        } else {
            Err(RunError::InvalidLiteral(token.to_string()))
        };
    }

    Err(RunError::UnknownReference(token.to_string()))
}

fn variable_reference(
    name: &str,
    symbols: &SymbolTable,
    mode: Mode,
    op: Op,
) -> Result<(Value, Vec<Lexeme>), RunError> {
    let stored = match symbols.get(name) {
        Some(value) => value,
        None => return Err(RunError::UnknownReference(name.to_string())),
    };
    let lexemes = vec![Lexeme::new(name, LexemeClass::VariableReference)];
    match mode {
        // Equality and inequality accept operands of any type.
        Mode::Math if stored.is_numeric() || op.is_equality() => Ok((stored.clone(), lexemes)),
        Mode::Bool => match stored {
            Value::Troof(_) => Ok((stored.clone(), lexemes)),
            // Numeric variables coerce: zero is FAIL, anything else WIN.
            Value::Numbr(n) => Ok((Value::Troof(*n != 0), lexemes)),
            Value::Numbar(f) => Ok((Value::Troof(*f != 0.0), lexemes)),
            _ => Err(RunError::UnpermittedType {
                context: "boolean",
                name: name.to_string(),
                type_tag: stored.type_tag(),
            }),
        },
        Mode::Math => Err(RunError::UnpermittedType {
            context: "arithmetics",
            name: name.to_string(),
            type_tag: stored.type_tag(),
        }),
    }
}

fn numeric_literal(token: &str, mode: Mode) -> Result<(Value, Vec<Lexeme>), RunError> {
    let lexemes = vec![Lexeme::new(token, LexemeClass::Literal)];
    match mode {
        Mode::Math => {
            if patterns::NUMBAR_SEARCH.is_match(token) {
                if patterns::NUMBAR_FULL.is_match(token) {
                    let parsed = token
                        .parse::<f64>()
                        .map_err(|_| RunError::InvalidLiteral(token.to_string()))?;
                    Ok((Value::Numbar(parsed), lexemes))
                } else {
                    Err(RunError::InvalidLiteral(token.to_string()))
                }
            } else if patterns::NUMBR_FULL.is_match(token) {
                let parsed = token
                    .parse::<i64>()
                    .map_err(|_| RunError::InvalidLiteral(token.to_string()))?;
                Ok((Value::Numbr(parsed), lexemes))
            } else {
                Err(RunError::InvalidLiteral(token.to_string()))
            }
        }
        // A bare numeric in boolean position coerces by the non-zero rule.
        Mode::Bool => {
            if patterns::NUMBAR_FULL.is_match(token) {
                let parsed = token
                    .parse::<f64>()
                    .map_err(|_| RunError::InvalidLiteral(token.to_string()))?;
                Ok((Value::Troof(parsed != 0.0), lexemes))
            } else if patterns::NUMBR_FULL.is_match(token) {
                let parsed = token
                    .parse::<i64>()
                    .map_err(|_| RunError::InvalidLiteral(token.to_string()))?;
                Ok((Value::Troof(parsed != 0), lexemes))
            } else {
                Err(RunError::InvalidLiteral(token.to_string()))
            }
        }
    }
}

/// A quoted operand must hold a numeric once the quotes come off.
fn quoted_numeric(text: &str) -> Result<Value, RunError> {
    if patterns::NUMBAR_SEARCH.is_match(text) {
        text.parse::<f64>()
            .map(Value::Numbar)
            .map_err(|_| RunError::QuotedOperand)
    } else if patterns::NUMBR_SEARCH.is_match(text) {
        text.parse::<i64>()
            .map(Value::Numbr)
            .map_err(|_| RunError::QuotedOperand)
    } else {
        Err(RunError::QuotedOperand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols_with(name: &str, value: Value) -> SymbolTable {
        let mut symbols = SymbolTable::new();
        symbols.insert(name, value);
        symbols
    }

    #[test]
    fn quoted_integer_becomes_numbr() {
        let symbols = SymbolTable::new();
        let (value, lexemes) = evaluate("\"5\"", &symbols, Mode::Math, Op::Sum).unwrap();
        assert_eq!(value, Value::Numbr(5));
        assert_eq!(lexemes.len(), 3);
        assert_eq!(lexemes[0].classification, LexemeClass::StringDelimiter);
        assert_eq!(lexemes[1].text, "5");
    }

    #[test]
    fn quoted_float_becomes_numbar() {
        let symbols = SymbolTable::new();
        let (value, _) = evaluate("\"2.5\"", &symbols, Mode::Math, Op::Sum).unwrap();
        assert_eq!(value, Value::Numbar(2.5));
    }

    #[test]
    fn quoted_text_is_error_15() {
        let symbols = SymbolTable::new();
        let err = evaluate("\"abc\"", &symbols, Mode::Math, Op::Sum).unwrap_err();
        assert_eq!(err, RunError::QuotedOperand);
    }

    #[test]
    fn yarn_variable_in_arithmetic_is_error_13() {
        let symbols = symbols_with("s", Value::Yarn("hi".into()));
        let err = evaluate("s", &symbols, Mode::Math, Op::Sum).unwrap_err();
        assert_eq!(err.code(), 13);
    }

    #[test]
    fn any_type_passes_under_equality() {
        let symbols = symbols_with("s", Value::Yarn("hi".into()));
        let (value, _) = evaluate("s", &symbols, Mode::Math, Op::BothSaem).unwrap();
        assert_eq!(value, Value::Yarn("hi".into()));
    }

    #[test]
    fn numeric_variable_coerces_in_boolean_position() {
        let symbols = symbols_with("n", Value::Numbr(0));
        let (value, _) = evaluate("n", &symbols, Mode::Bool, Op::BothOf).unwrap();
        assert_eq!(value, Value::Troof(false));
        let symbols = symbols_with("n", Value::Numbr(7));
        let (value, _) = evaluate("n", &symbols, Mode::Bool, Op::BothOf).unwrap();
        assert_eq!(value, Value::Troof(true));
    }

    #[test]
    fn float_shaped_literal_is_numbar() {
        let symbols = SymbolTable::new();
        let (value, _) = evaluate("2.5", &symbols, Mode::Math, Op::Sum).unwrap();
        assert_eq!(value, Value::Numbar(2.5));
    }

    #[test]
    fn malformed_numeric_is_error_44() {
        let symbols = SymbolTable::new();
        let err = evaluate("12ab", &symbols, Mode::Math, Op::Sum).unwrap_err();
        assert_eq!(err, RunError::InvalidLiteral("12ab".into()));
    }

    #[test]
    fn bare_numeric_coerces_in_boolean_position() {
        let symbols = SymbolTable::new();
        let (value, _) = evaluate("0", &symbols, Mode::Bool, Op::AllOf).unwrap();
        assert_eq!(value, Value::Troof(false));
        let (value, _) = evaluate("3", &symbols, Mode::Bool, Op::AllOf).unwrap();
        assert_eq!(value, Value::Troof(true));
    }

    #[test]
    fn troof_literal_only_in_boolean_mode() {
        let symbols = SymbolTable::new();
        let (value, _) = evaluate("WIN", &symbols, Mode::Bool, Op::BothOf).unwrap();
        assert_eq!(value, Value::Troof(true));
        let err = evaluate("WIN", &symbols, Mode::Math, Op::Sum).unwrap_err();
        assert_eq!(err, RunError::UnknownReference("WIN".into()));
    }

    #[test]
    fn unknown_identifier_is_error_09() {
        let symbols = SymbolTable::new();
        let err = evaluate("ghost", &symbols, Mode::Bool, Op::BothOf).unwrap_err();
        assert_eq!(err, RunError::UnknownReference("ghost".into()));
    }
}
