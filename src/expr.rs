//! Expression evaluation.
//!
//! Three mutually recursive families share the operand evaluator and the
//! grouping algorithm: prefix arithmetic/comparison, boolean with
//! short-circuiting, and SMOOSH concatenation.

use regex::Regex;

use crate::error::RunError;
use crate::group;
use crate::lexeme::{Lexeme, LexemeClass};
use crate::operand::{self, Mode};
use crate::patterns;
use crate::symbols::SymbolTable;
use crate::value::Value;

/// A prefix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Sum,
    Diff,
    Produkt,
    Quoshunt,
    Mod,
    Biggr,
    Smallr,
    BothSaem,
    Diffrint,
    Not,
    BothOf,
    EitherOf,
    WonOf,
    AllOf,
    AnyOf,
    Smoosh,
}

impl Op {
    pub fn keyword(&self) -> &'static str {
        match self {
            Op::Sum => "SUM OF",
            Op::Diff => "DIFF OF",
            Op::Produkt => "PRODUKT OF",
            Op::Quoshunt => "QUOSHUNT OF",
            Op::Mod => "MOD OF",
            Op::Biggr => "BIGGR OF",
            Op::Smallr => "SMALLR OF",
            Op::BothSaem => "BOTH SAEM",
            Op::Diffrint => "DIFFRINT",
            Op::Not => "NOT",
            Op::BothOf => "BOTH OF",
            Op::EitherOf => "EITHER OF",
            Op::WonOf => "WON OF",
            Op::AllOf => "ALL OF",
            Op::AnyOf => "ANY OF",
            Op::Smoosh => "SMOOSH",
        }
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, Op::BothSaem | Op::Diffrint)
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self, Op::AllOf | Op::AnyOf)
    }

    fn lexeme_class(&self) -> LexemeClass {
        match self {
            Op::BothSaem | Op::Diffrint => LexemeClass::ComparisonIdentifier,
            Op::Not | Op::BothOf | Op::EitherOf | Op::WonOf | Op::AllOf | Op::AnyOf => {
                LexemeClass::BooleanIdentifier
            }
            Op::Smoosh => LexemeClass::FunctionIdentifier,
            _ => LexemeClass::ArithmeticIdentifier,
        }
    }
}

/// Evaluate a full expression line (or operand fragment).
pub fn evaluate(line: &str, symbols: &SymbolTable) -> Result<(Value, Vec<Lexeme>), RunError> {
    if patterns::MATH_HEAD.is_match(line) || patterns::COMP_HEAD.is_match(line) {
        arithmetic(line, symbols)
    } else if patterns::SMOOSH.is_match(line) {
        smoosh(line, symbols)
    } else {
        boolean(line, symbols)
    }
}

fn detect(line: &str, head: &Regex) -> Option<Op> {
    let keyword = head.captures(line)?.get(1)?.as_str().to_string();
    match keyword.as_str() {
        "SUM OF" => Some(Op::Sum),
        "DIFF OF" => Some(Op::Diff),
        "PRODUKT OF" => Some(Op::Produkt),
        "QUOSHUNT OF" => Some(Op::Quoshunt),
        "MOD OF" => Some(Op::Mod),
        "BIGGR OF" => Some(Op::Biggr),
        "SMALLR OF" => Some(Op::Smallr),
        "BOTH SAEM" => Some(Op::BothSaem),
        "DIFFRINT" => Some(Op::Diffrint),
        "NOT" => Some(Op::Not),
        "BOTH OF" => Some(Op::BothOf),
        "EITHER OF" => Some(Op::EitherOf),
        "WON OF" => Some(Op::WonOf),
        "ALL OF" => Some(Op::AllOf),
        "ANY OF" => Some(Op::AnyOf),
        _ => None,
    }
}

/// The operand region: everything after the operator keyword, with
/// trailing whitespace dropped.
fn operand_region(line: &str, op: Op) -> String {
    let region = if op == Op::Smoosh {
        patterns::SMOOSH
            .find_iter(line)
            .last()
            .map(|found| &line[found.end()..])
            .unwrap_or(line)
    } else {
        let head: &Regex = match op {
            Op::BothSaem | Op::Diffrint => &patterns::COMP_HEAD,
            Op::Not | Op::BothOf | Op::EitherOf | Op::WonOf | Op::AllOf | Op::AnyOf => {
                &patterns::BOOL_HEAD
            }
            _ => &patterns::MATH_HEAD,
        };
        head.find(line)
            .map(|found| &line[found.end()..])
            .unwrap_or(line)
    };
    region.trim_end().to_string()
}

fn split_operands(region: &str) -> Vec<String> {
    patterns::AN_SEP.split(region).map(str::to_string).collect()
}

// ---------------------------------------------------------------------
// Arithmetic and comparison
// ---------------------------------------------------------------------

fn arithmetic(line: &str, symbols: &SymbolTable) -> Result<(Value, Vec<Lexeme>), RunError> {
    let op = detect(line, &patterns::MATH_HEAD)
        .or_else(|| detect(line, &patterns::COMP_HEAD))
        .ok_or_else(|| RunError::UnknownOperation(line.to_string()))?;
    let mut lexemes = vec![Lexeme::new(op.keyword(), op.lexeme_class())];

    let fragments = group::regroup(split_operands(&operand_region(line, op)), op)?;
    let mut operands = Vec::with_capacity(2);
    for (position, fragment) in fragments.iter().enumerate() {
        if position > 0 {
            lexemes.push(Lexeme::new("AN", LexemeClass::OperandsIdentifier));
        }
        let (value, operand_lexemes) =
            if patterns::MATH_HEAD.is_match(fragment) || patterns::COMP_HEAD.is_match(fragment) {
                arithmetic(fragment, symbols)?
            } else {
                operand::evaluate(fragment, symbols, Mode::Math, op)?
            };
        operands.push(value);
        lexemes.extend(operand_lexemes);
    }

    let value = match op {
        Op::BothSaem => Value::Troof(operands[0].payload_eq(&operands[1])),
        Op::Diffrint => Value::Troof(!operands[0].payload_eq(&operands[1])),
        _ => numeric_result(op, &operands[0], &operands[1])?,
    };
    Ok((value, lexemes))
}

fn numeric_result(op: Op, left: &Value, right: &Value) -> Result<Value, RunError> {
    let a = require_numeric(left)?;
    let b = require_numeric(right)?;
    let float_mode = matches!(left, Value::Numbar(_)) || matches!(right, Value::Numbar(_));
    if float_mode {
        let result = match op {
            Op::Sum => a + b,
            Op::Diff => a - b,
            Op::Produkt => a * b,
            Op::Quoshunt => a / b,
            Op::Mod => a % b,
            Op::Biggr => a.max(b),
            Op::Smallr => a.min(b),
            _ => return Err(RunError::UnknownOperation(op.keyword().to_string())),
        };
        Ok(Value::Numbar(result))
    } else {
        let (x, y) = (a as i64, b as i64);
        let result = match op {
            Op::Sum => x.wrapping_add(y),
            Op::Diff => x.wrapping_sub(y),
            Op::Produkt => x.wrapping_mul(y),
            // integer division truncates; a zero divisor falls back to
            // the float quotient and saturates on the cast
            Op::Quoshunt => x.checked_div(y).unwrap_or((a / b) as i64),
            Op::Mod => x.checked_rem(y).unwrap_or((a % b) as i64),
            Op::Biggr => x.max(y),
            Op::Smallr => x.min(y),
            _ => return Err(RunError::UnknownOperation(op.keyword().to_string())),
        };
        Ok(Value::Numbr(result))
    }
}

fn require_numeric(value: &Value) -> Result<f64, RunError> {
    value.as_f64().ok_or_else(|| RunError::UnpermittedType {
        context: "arithmetics",
        name: value.payload(),
        type_tag: value.type_tag(),
    })
}

// ---------------------------------------------------------------------
// Boolean
// ---------------------------------------------------------------------

fn boolean(line: &str, symbols: &SymbolTable) -> Result<(Value, Vec<Lexeme>), RunError> {
    let op = detect(line, &patterns::BOOL_HEAD)
        .ok_or_else(|| RunError::UnknownOperation(line.to_string()))?;
    let mut lexemes = vec![Lexeme::new(op.keyword(), op.lexeme_class())];

    let mut region = operand_region(line, op);
    if op.is_variadic() {
        match patterns::MKAY.find(&region) {
            Some(found) => {
                region.truncate(found.start());
                if patterns::MKAY.is_match(&region) {
                    return Err(RunError::DoubleMkay);
                }
            }
            None => return Err(RunError::MissingMkay),
        }
    }

    let fragments = group::regroup(split_operands(&region), op)?;
    let last = fragments.len() - 1;
    let mut truths = Vec::with_capacity(fragments.len());
    for (position, fragment) in fragments.iter().enumerate() {
        let (value, operand_lexemes) = if patterns::BOOL_HEAD.is_match(fragment) {
            boolean(fragment, symbols)?
        } else {
            operand::evaluate(fragment, symbols, Mode::Bool, op)?
        };
        lexemes.extend(operand_lexemes);
        let win = matches!(value, Value::Troof(true));
        truths.push(win);

        // short-circuit; the MKAY delimiter still lands for variadic forms
        match op {
            Op::AnyOf | Op::EitherOf if win => {
                if op.is_variadic() {
                    lexemes.push(mkay());
                }
                return Ok((Value::Troof(true), lexemes));
            }
            Op::AllOf | Op::BothOf if !win => {
                if op.is_variadic() {
                    lexemes.push(mkay());
                }
                return Ok((Value::Troof(false), lexemes));
            }
            _ => {}
        }
        if position != last {
            lexemes.push(Lexeme::new("AN", LexemeClass::OperandsIdentifier));
        }
    }

    let result = match op {
        Op::Not => !truths[0],
        Op::WonOf => truths[0] != truths[1],
        // no operand tripped the short circuit
        Op::AllOf | Op::BothOf => true,
        _ => false,
    };
    if op.is_variadic() {
        lexemes.push(mkay());
    }
    Ok((Value::Troof(result), lexemes))
}

fn mkay() -> Lexeme {
    Lexeme::new("MKAY", LexemeClass::ExpressionDelimiter)
}

// ---------------------------------------------------------------------
// SMOOSH
// ---------------------------------------------------------------------

fn smoosh(line: &str, symbols: &SymbolTable) -> Result<(Value, Vec<Lexeme>), RunError> {
    let mut lexemes = vec![Lexeme::new("SMOOSH", LexemeClass::FunctionIdentifier)];
    let mut region = operand_region(line, Op::Smoosh);
    // a trailing MKAY is tolerated and lexed, never required
    let had_mkay = match patterns::MKAY.find(&region) {
        Some(found) => {
            region.truncate(found.start());
            true
        }
        None => false,
    };

    let fragments: Vec<&str> = patterns::AN_SEP.split(&region).collect();
    if fragments.len() < 2 {
        return Err(RunError::TooFewOperands);
    }
    let last = fragments.len() - 1;
    let mut result = String::new();
    for (position, fragment) in fragments.iter().enumerate() {
        if fragment.is_empty() {
            return Err(RunError::EmptyOperand);
        }
        if patterns::YARN_SEARCH.is_match(fragment) {
            result.push_str(&fragment.replace('"', ""));
            lexemes.push(Lexeme::new(*fragment, LexemeClass::Literal));
        } else if patterns::TROOF_SEARCH.is_match(fragment) {
            result.push_str(fragment);
            lexemes.push(Lexeme::new(*fragment, LexemeClass::Literal));
        } else if patterns::VAR_NAME.is_match(fragment) && symbols.contains(fragment) {
            if let Some(value) = symbols.get(fragment) {
                result.push_str(&value.payload());
            }
            lexemes.push(Lexeme::new(*fragment, LexemeClass::VariableReference));
        } else if patterns::NUMBR_SEARCH.is_match(fragment) {
            result.push_str(fragment);
            lexemes.push(Lexeme::new(*fragment, LexemeClass::Literal));
        } else {
            return Err(RunError::UnknownReference(fragment.to_string()));
        }
        if position != last {
            lexemes.push(Lexeme::new("AN", LexemeClass::OperandsIdentifier));
        }
    }
    if had_mkay {
        lexemes.push(mkay());
    }
    Ok((Value::Yarn(result), lexemes))
}
