//! The pattern catalog.
//!
//! Every keyword, operator, and literal shape the interpreter recognizes
//! is one named pattern here. `*_FULL` patterns are anchored to the
//! entire token and are used when constructing literal values; the
//! `*_SEARCH` forms are substring searches used during dispatch. The two
//! must not be conflated: `12ab` search-matches the integer shape but is
//! not an integer literal.

use once_cell::sync::Lazy;
use regex::Regex;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("catalog pattern must compile")
}

// Literal shapes
pub static NUMBR_SEARCH: Lazy<Regex> = Lazy::new(|| re(r"-?[0-9]+"));
pub static NUMBR_FULL: Lazy<Regex> = Lazy::new(|| re(r"^-?[0-9]+$"));
pub static NUMBR_AT_START: Lazy<Regex> = Lazy::new(|| re(r"^-?[0-9]+"));
pub static NUMBAR_SEARCH: Lazy<Regex> = Lazy::new(|| re(r"-?[0-9]*\.[0-9]+"));
pub static NUMBAR_FULL: Lazy<Regex> = Lazy::new(|| re(r"^-?[0-9]*\.[0-9]+$"));
pub static YARN_SEARCH: Lazy<Regex> = Lazy::new(|| re(r#""[^"]*"\s*"#));
pub static YARN_AT_START: Lazy<Regex> = Lazy::new(|| re(r#"^"[^"]*"\s*"#));
pub static TROOF_SEARCH: Lazy<Regex> = Lazy::new(|| re(r"(WIN)|(FAIL)"));
pub static TROOF_FULL: Lazy<Regex> = Lazy::new(|| re(r"^((WIN)|(FAIL))$"));
pub static TROOF_AT_START: Lazy<Regex> = Lazy::new(|| re(r"^(WIN)|(FAIL)"));

/// Identifier: leading alphabetic, then alphanumerics or underscores.
pub static VAR_NAME: Lazy<Regex> = Lazy::new(|| re(r"^[a-zA-Z][a-zA-Z0-9_]*$"));
pub static SPACES: Lazy<Regex> = Lazy::new(|| re(r"^\s*$"));

// Program structure
pub static HAI: Lazy<Regex> = Lazy::new(|| re(r"^HAI\s*"));
pub static KTHXBYE: Lazy<Regex> = Lazy::new(|| re(r"^\s*KTHXBYE$"));
pub static BTW: Lazy<Regex> = Lazy::new(|| re(r"\s*BTW\s"));
pub static OBTW: Lazy<Regex> = Lazy::new(|| re(r"^\s*OBTW\s*"));
pub static TLDR: Lazy<Regex> = Lazy::new(|| re(r"\s*TLDR$"));

// Statement heads
pub static I_HAS_A: Lazy<Regex> = Lazy::new(|| re(r"^\s*I HAS A\s"));
pub static ITZ: Lazy<Regex> = Lazy::new(|| re(r"\sITZ\s"));
pub static VISIBLE: Lazy<Regex> = Lazy::new(|| re(r"\s*VISIBLE\s"));
pub static GIMMEH: Lazy<Regex> = Lazy::new(|| re(r"\s*GIMMEH\s"));
pub static ASSIGN: Lazy<Regex> = Lazy::new(|| re(r"\s+R\s+"));

// Block keywords
pub static O_RLY: Lazy<Regex> = Lazy::new(|| re(r"^\s*O RLY\?\s*$"));
pub static YA_RLY: Lazy<Regex> = Lazy::new(|| re(r"^\s*YA RLY\s*$"));
pub static NO_WAI: Lazy<Regex> = Lazy::new(|| re(r"^\s*NO WAI\s*$"));
pub static WTF: Lazy<Regex> = Lazy::new(|| re(r"^\s*WTF\?\s*$"));
pub static OMG: Lazy<Regex> = Lazy::new(|| re(r"^\s*OMG\s+"));
pub static OMGWTF: Lazy<Regex> = Lazy::new(|| re(r"^\s*OMGWTF\s*$"));
pub static GTFO: Lazy<Regex> = Lazy::new(|| re(r"^\s*GTFO\s*$"));
pub static OIC: Lazy<Regex> = Lazy::new(|| re(r"^\s*OIC\s*$"));

// Expression plumbing
pub static MKAY: Lazy<Regex> = Lazy::new(|| re(r"\sMKAY\s*$"));
pub static AN_SEP: Lazy<Regex> = Lazy::new(|| re(r"\sAN\s"));
pub static SMOOSH: Lazy<Regex> = Lazy::new(|| re(r"(^\s*|\s)SMOOSH\s"));
pub static SMOOSH_HEAD: Lazy<Regex> = Lazy::new(|| re(r"^\s*SMOOSH\s"));

// Expression heads. MATH and COMP both route to the arithmetic
// evaluator; they are kept separate because comparisons accept operands
// of any type and produce TROOF.
pub static MATH_HEAD: Lazy<Regex> = Lazy::new(|| {
    re(r"^\s*(SUM OF|DIFF OF|PRODUKT OF|QUOSHUNT OF|MOD OF|BIGGR OF|SMALLR OF)\s")
});
pub static COMP_HEAD: Lazy<Regex> = Lazy::new(|| re(r"^\s*(BOTH SAEM|DIFFRINT)\s"));
pub static BOOL_HEAD: Lazy<Regex> =
    Lazy::new(|| re(r"^\s*(NOT|BOTH OF|EITHER OF|WON OF|ALL OF|ANY OF)\s"));
pub static BOOL_VARIADIC_HEAD: Lazy<Regex> = Lazy::new(|| re(r"^\s*(ALL OF|ANY OF)\s"));
pub static BOOL_VARIADIC_ANYWHERE: Lazy<Regex> =
    Lazy::new(|| re(r"\s*ALL OF\s|\s*ANY OF\s"));
pub static NOT_HEAD: Lazy<Regex> = Lazy::new(|| re(r"^\s*NOT\s"));

/// Any expression head, including SMOOSH (which alone may match past the
/// start of the region).
pub static EXPRESSION: Lazy<Regex> = Lazy::new(|| {
    re(concat!(
        r"^\s*(SUM OF|DIFF OF|PRODUKT OF|QUOSHUNT OF|MOD OF|BIGGR OF|SMALLR OF",
        r"|BOTH SAEM|DIFFRINT|NOT|BOTH OF|EITHER OF|WON OF|ALL OF|ANY OF)\s",
        r"|(^\s*|\s)SMOOSH\s",
    ))
});
