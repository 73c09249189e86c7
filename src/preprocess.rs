//! Source cleanup: comment stripping and program delimiters.

use tracing::debug;

use crate::error::RunError;
use crate::lexeme::{Lexeme, LexemeClass};
use crate::patterns;

/// Strip comments, blank out whitespace-only lines, and locate the
/// HAI/KTHXBYE delimiters. Returns the executable interior with empty
/// lines removed. Pushes the opening HAI lexeme once found.
pub fn clean(source: &str, lexemes: &mut Vec<Lexeme>) -> Result<Vec<String>, RunError> {
    let mut lines: Vec<String> = source.split('\n').map(str::to_string).collect();
    strip_comments(&mut lines)?;
    let (start, end) = locate_delimiters(&lines, lexemes)?;
    let interior: Vec<String> = lines[start + 1..end]
        .iter()
        .filter(|line| !line.is_empty())
        .cloned()
        .collect();
    debug!(lines = interior.len(), "cleaned program");
    Ok(interior)
}

/// Replace comment content with empty lines, in place. Keeps the line
/// count identical to the raw source so delimiter indices line up.
fn strip_comments(lines: &mut [String]) -> Result<(), RunError> {
    let mut in_block = false;
    for line in lines.iter_mut() {
        if patterns::SPACES.is_match(line) {
            line.clear();
        } else if in_block {
            if patterns::TLDR.is_match(line) {
                in_block = false;
            }
            line.clear();
        } else if patterns::TLDR.is_match(line) {
            // TLDR with no open OBTW
            return Err(RunError::UnpairedComment);
        } else if patterns::OBTW.is_match(line) {
            in_block = true;
            line.clear();
        } else if let Some(found) = patterns::BTW.find(line) {
            line.truncate(found.start());
        }
    }
    if in_block {
        return Err(RunError::UnpairedComment);
    }
    Ok(())
}

fn locate_delimiters(
    lines: &[String],
    lexemes: &mut Vec<Lexeme>,
) -> Result<(usize, usize), RunError> {
    let mut hai: Option<usize> = None;
    let mut kthxbye: Option<usize> = None;
    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        if patterns::HAI.is_match(line) {
            if hai.is_some() {
                return Err(RunError::DoubleHai);
            }
            lexemes.push(Lexeme::new("HAI", LexemeClass::CodeDelimiter));
            hai = Some(index);
        } else if hai.is_some() && patterns::KTHXBYE.is_match(line) {
            if kthxbye.is_some() {
                return Err(RunError::DoubleKthxbye);
            }
            kthxbye = Some(index);
        }
    }
    match (hai, kthxbye) {
        (None, _) => Err(RunError::NoHai),
        (_, None) => Err(RunError::NoKthxbye),
        (Some(start), Some(end)) => Ok((start, end)),
    }
}
