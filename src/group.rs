//! Operand regrouping for nested prefix expressions.
//!
//! The language has no parentheses, so after splitting an operand region
//! on `AN` a fragment may hold the operator of a nested expression whose
//! operands arrive in the following fragments. The walk below keeps a
//! running deficit of operands still owed to an in-progress nested
//! operator and folds fragments back together until every fragment is a
//! self-contained operand.

use crate::error::RunError;
use crate::expr::Op;
use crate::patterns;

pub fn regroup(mut fragments: Vec<String>, op: Op) -> Result<Vec<String>, RunError> {
    let mut index: usize = 0;
    let mut needs: i32 = 0;
    loop {
        if index >= fragments.len() {
            if needs != 0 {
                return Err(RunError::LackingOperands);
            }
            break;
        }
        let current = fragments[index].clone();
        if current.is_empty() {
            return Err(RunError::EmptyOperand);
        }
        if op.is_variadic() && patterns::BOOL_VARIADIC_ANYWHERE.is_match(&current) {
            // ALL OF / ANY OF may not nest inside themselves
            return Err(RunError::RecursiveVariadic);
        }
        if patterns::BOOL_VARIADIC_HEAD.is_match(&current) {
            // A variadic form nested under a binary operator: fold
            // fragments into it until its MKAY terminator is absorbed.
            if index + 1 >= fragments.len() {
                return Err(RunError::MissingMkay);
            }
            let next = fragments.remove(index + 1);
            let absorbed_mkay = patterns::MKAY.is_match(&next);
            let merged = format!("{} AN {}", fragments[index], next);
            fragments[index] = merged;
            if absorbed_mkay {
                index += 1;
            }
        } else if patterns::EXPRESSION.is_match(&current) && !patterns::NOT_HEAD.is_match(&current)
        {
            // The fragment opens one or more nested operators; each owes
            // two operands. A trailing leaf inside the fragment pays one
            // back immediately.
            let mut rest = current;
            let mut advanced = false;
            while patterns::EXPRESSION.is_match(&rest) {
                rest = patterns::EXPRESSION
                    .split(&rest)
                    .last()
                    .unwrap_or("")
                    .to_string();
                needs += 2;
                if patterns::VAR_NAME.is_match(&rest)
                    || patterns::YARN_AT_START.is_match(&rest)
                    || patterns::NUMBR_AT_START.is_match(&rest)
                    || patterns::TROOF_AT_START.is_match(&rest)
                {
                    needs -= 1;
                    index += 1;
                    advanced = true;
                    break;
                }
            }
            // an operator with no trailing leaf still owes its operands;
            // move on so the deficit check can report it
            if !advanced {
                index += 1;
            }
        } else if needs != 0
            && (patterns::VAR_NAME.is_match(&current)
                || patterns::YARN_SEARCH.is_match(&current)
                || patterns::NUMBR_SEARCH.is_match(&current)
                || patterns::TROOF_SEARCH.is_match(&current))
        {
            // A bare operand owed to the nested operator: join it to the
            // fragment on its left.
            needs -= 1;
            let taken = fragments.remove(index);
            let merged = format!("{} AN {}", fragments[index - 1], taken);
            fragments[index - 1] = merged;
            if needs != 0 {
                // compensate for the paired operation
                needs -= 1;
                if needs == 0 {
                    // the nested group is complete; it becomes an operand
                    // of the group one further left
                    index -= 1;
                    let taken = fragments.remove(index);
                    let merged = format!("{} AN {}", fragments[index - 1], taken);
                    fragments[index - 1] = merged;
                }
            }
        } else {
            // lone operand, nothing owed
            index += 1;
        }
    }

    match op {
        Op::Not if fragments.len() > 1 => Err(RunError::TooManyOperands),
        Op::Not => Ok(fragments),
        _ if fragments.len() < 2 => Err(RunError::TooFewOperands),
        Op::AllOf | Op::AnyOf => Ok(fragments),
        _ if fragments.len() > 2 => Err(RunError::TooManyOperands),
        _ => Ok(fragments),
    }
}
