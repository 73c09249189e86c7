//! Lexeme table entries.

use serde::{Serialize, Serializer};

/// Classification of a recognized token, as reported in the lexeme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeClass {
    VariableIdentifier,
    ArithmeticIdentifier,
    BooleanIdentifier,
    ComparisonIdentifier,
    FunctionIdentifier,
    CodeDelimiter,
    OperandsIdentifier,
    StringDelimiter,
    Literal,
    VariableReference,
    ImplicitVariable,
    AssignmentOperator,
    VariableAssignment,
    VariableDeclaration,
    ExpressionDelimiter,
}

impl LexemeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            LexemeClass::VariableIdentifier => "Variable Identifier",
            LexemeClass::ArithmeticIdentifier => "Arithmetic Identifier",
            LexemeClass::BooleanIdentifier => "Boolean Identifier",
            LexemeClass::ComparisonIdentifier => "Comparison Identifier",
            LexemeClass::FunctionIdentifier => "Function Identifier",
            LexemeClass::CodeDelimiter => "Code Delimiter",
            LexemeClass::OperandsIdentifier => "Operands Identifier",
            LexemeClass::StringDelimiter => "String Delimiter",
            LexemeClass::Literal => "Literal",
            LexemeClass::VariableReference => "Variable Reference",
            LexemeClass::ImplicitVariable => "Implicit Variable",
            LexemeClass::AssignmentOperator => "Assignment Operator",
            LexemeClass::VariableAssignment => "Variable Assignment",
            LexemeClass::VariableDeclaration => "Variable Declaration",
            // sic, the table shipped with this spelling
            LexemeClass::ExpressionDelimiter => "Expession Delimiter",
        }
    }
}

impl Serialize for LexemeClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One row of the lexeme table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lexeme {
    pub text: String,
    pub classification: LexemeClass,
}

impl Lexeme {
    pub fn new(text: impl Into<String>, classification: LexemeClass) -> Self {
        Lexeme {
            text: text.into(),
            classification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_strings_match_the_table() {
        assert_eq!(LexemeClass::VariableIdentifier.as_str(), "Variable Identifier");
        assert_eq!(LexemeClass::OperandsIdentifier.as_str(), "Operands Identifier");
        assert_eq!(LexemeClass::ExpressionDelimiter.as_str(), "Expession Delimiter");
    }

    #[test]
    fn lexeme_serializes_classification_as_string() {
        let lexeme = Lexeme::new("MKAY", LexemeClass::ExpressionDelimiter);
        let json = serde_json::to_string(&lexeme).unwrap();
        assert_eq!(
            json,
            r#"{"text":"MKAY","classification":"Expession Delimiter"}"#
        );
    }
}
