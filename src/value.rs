//! Runtime values.

/// A tagged runtime value. The payload/type pair is what the symbol
/// table reports at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer (NUMBR).
    Numbr(i64),
    /// Double precision float (NUMBAR).
    Numbar(f64),
    /// String (YARN). Internal double quotes are stored escaped.
    Yarn(String),
    /// Boolean (TROOF), rendered as WIN or FAIL.
    Troof(bool),
    /// Declared but uninitialized (NOOB).
    Noob,
    /// The implicit variable before any expression has written to it.
    /// Distinct from NOOB: both payload and type render empty.
    Unset,
}

impl Value {
    pub fn type_tag(&self) -> &'static str {
        match self {
            Value::Numbr(_) => "NUMBR",
            Value::Numbar(_) => "NUMBAR",
            Value::Yarn(_) => "YARN",
            Value::Troof(_) => "TROOF",
            Value::Noob => "NOOB",
            Value::Unset => "",
        }
    }

    /// The payload as it appears in output and in the symbol table.
    pub fn payload(&self) -> String {
        match self {
            Value::Numbr(n) => n.to_string(),
            Value::Numbar(f) => format_numbar(*f),
            Value::Yarn(s) => s.clone(),
            Value::Troof(true) => "WIN".to_string(),
            Value::Troof(false) => "FAIL".to_string(),
            Value::Noob | Value::Unset => String::new(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Numbr(_) | Value::Numbar(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Numbr(n) => Some(*n as f64),
            Value::Numbar(f) => Some(*f),
            _ => None,
        }
    }

    /// Payload equality, as used by BOTH SAEM and DIFFRINT and by switch
    /// case matching. Numeric payloads compare numerically, string-like
    /// payloads (YARN, TROOF text, empty NOOB) compare textually, and a
    /// numeric payload never equals a string payload.
    pub fn payload_eq(&self, other: &Value) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.payload() == other.payload(),
            _ => false,
        }
    }
}

/// NUMBAR payloads keep one decimal place for integral values, so
/// `3.0` stays `3.0` rather than collapsing to `3`.
fn format_numbar(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        format!("{}", f)
    }
}
