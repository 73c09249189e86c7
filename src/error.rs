//! The numbered diagnostic catalog.
//!
//! Every way a run can abort is one variant here. `Display` renders the
//! exact line appended to the output stream; the driver adds the single
//! trailing newline. Numbers 26 and 27 are each used twice, matching the
//! catalog as shipped.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    #[error("Error 01: Program has no HAI code delimiter.")]
    NoHai,
    #[error("Error 02: Program has no KTHXBYE code delimiter.")]
    NoKthxbye,
    #[error("Error 03: Missing OBTW.")]
    UnpairedComment,
    #[error("Error 04: Double HAI keyword.")]
    DoubleHai,
    #[error("Error 05: Double KTHXBYE keyword.")]
    DoubleKthxbye,
    #[error("Error 06: Invalid variable name {0}.")]
    InvalidVariableName(String),
    #[error("Error 07: Invalid value/expression for variable: {0}")]
    InvalidValue(String),
    #[error("Error 08: No value given to variable {0}")]
    MissingInitializer(String),
    #[error("Error 09: Unknown/Undeclared variable reference {0}.")]
    UnknownReference(String),
    #[error("Error 10: Missing statement after VISIBLE.")]
    EmptyVisible,
    #[error("Error 11: Missing statement after GIMMEH.")]
    EmptyGimmeh,
    #[error("Error 12: Multiple arguments after GIMMEH is not allowed.")]
    MultipleGimmeh,
    #[error("Error 13: Unpermitted data type for {context}: {name} is of type {type_tag}.")]
    UnpermittedType {
        context: &'static str,
        name: String,
        type_tag: &'static str,
    },
    #[error("Error 14: Unidentified operation: {0}.")]
    UnknownOperation(String),
    #[error("Error 15: Quoted operand is not of type NUMBR/NUMBAR.")]
    QuotedOperand,
    #[error("Error 16: Expression must have at least 2 operands.")]
    TooFewOperands,
    #[error("Error 17: Expression must have at most 2 operands.")]
    TooManyOperands,
    #[error("Error 18: Missing operand on expression.")]
    EmptyOperand,
    #[error("Error 19: Missing variable before R.")]
    MissingAssignTarget,
    #[error("Error 20: Missing literal/variable/expression after R.")]
    MissingAssignValue,
    #[error("Error 21: Multiple variables before R is not allowed.")]
    MultipleAssignTargets,
    #[error("Error 22: Multiple statements after R is not allowed.")]
    MultipleAssignValues,
    #[error("Error 23: Unpaired double quotes.")]
    UnpairedQuotes,
    #[error("Error 24: ALL OF/ANY OF cannot be called recursively.")]
    RecursiveVariadic,
    #[error("Error 25: ALL OF/ANY OF must be terminated in MKAY.")]
    MissingMkay,
    #[error("Error 26: Double MKAY found.")]
    DoubleMkay,
    #[error("Error 26: If-else/Switch blocks must be terminated by OIC")]
    UnterminatedBlock,
    #[error("Error 27: Lacking operand/s. Please check the expression again.")]
    LackingOperands,
    #[error("Error 27: If-else blocks must be preceded by O RLY?/Switch blocks must be preceded by WTF?")]
    StrayOic,
    #[error("Error 28: O RLY? must be succeeded by YA RLY")]
    MissingYaRly,
    #[error("Error 29: Missing NO WAI.")]
    MissingNoWai,
    #[error("Error 30: Preceding expression of If-else blocks must result to the type \"TROOF\"")]
    ConditionNotTroof,
    #[error("Error 31: The succeeding expression after OMG is missing.")]
    MissingCaseValue,
    #[error("Error 32: Only one succeeding expression after OMG is allowed.")]
    MultipleCaseValues,
    #[error("Error 33: Missing OMGWTF statement.")]
    MissingDefaultCase,
    #[error("Error 34: The Implicit Variable does not contain any value.")]
    EmptyImplicitVariable,
    #[error("Error 35: Switch blocks must be preceded by WTF?")]
    MissingWtf,
    #[error("Error 36: WTF? must be succeeded by a proper OMG statement.")]
    MissingOmg,
    #[error("Error 37: YARN literals must start and end with quotation marks.")]
    UnbalancedYarn,
    #[error("Error 38: This case value is invalid: {0}")]
    InvalidCaseValue(String),
    #[error("Error 39: Only one YA RLY is allowed per block.")]
    DoubleYaRly,
    #[error("Error 40: Only one NO WAI is allowed per block.")]
    DoubleNoWai,
    #[error("Error 41: Only one OMGWTF is allowed per block.")]
    DoubleDefaultCase,
    #[error("Error 42: Missing O RLY? statement.")]
    MissingORly,
    #[error("Error 43: Unrecognizable command.")]
    UnrecognizedCommand,
    #[error("Error 44: Invalid literal: {0}")]
    InvalidLiteral(String),
    #[error("Error 45: Please add an input.")]
    MissingInput,
    #[error("Error 46: Variable declaration is not allowed inside If-Else/Switch blocks.")]
    DeclarationInBlock,
    #[error("Error 47: Only one ORLY? is allowed per block.")]
    NestedORly,
    #[error("Error 48: Only one WTF? is allowed per block.")]
    NestedWtf,
}

impl RunError {
    /// Numeric id of the diagnostic. 26 and 27 are each shared by two
    /// distinct conditions.
    pub fn code(&self) -> u8 {
        match self {
            RunError::NoHai => 1,
            RunError::NoKthxbye => 2,
            RunError::UnpairedComment => 3,
            RunError::DoubleHai => 4,
            RunError::DoubleKthxbye => 5,
            RunError::InvalidVariableName(_) => 6,
            RunError::InvalidValue(_) => 7,
            RunError::MissingInitializer(_) => 8,
            RunError::UnknownReference(_) => 9,
            RunError::EmptyVisible => 10,
            RunError::EmptyGimmeh => 11,
            RunError::MultipleGimmeh => 12,
            RunError::UnpermittedType { .. } => 13,
            RunError::UnknownOperation(_) => 14,
            RunError::QuotedOperand => 15,
            RunError::TooFewOperands => 16,
            RunError::TooManyOperands => 17,
            RunError::EmptyOperand => 18,
            RunError::MissingAssignTarget => 19,
            RunError::MissingAssignValue => 20,
            RunError::MultipleAssignTargets => 21,
            RunError::MultipleAssignValues => 22,
            RunError::UnpairedQuotes => 23,
            RunError::RecursiveVariadic => 24,
            RunError::MissingMkay => 25,
            RunError::DoubleMkay | RunError::UnterminatedBlock => 26,
            RunError::LackingOperands | RunError::StrayOic => 27,
            RunError::MissingYaRly => 28,
            RunError::MissingNoWai => 29,
            RunError::ConditionNotTroof => 30,
            RunError::MissingCaseValue => 31,
            RunError::MultipleCaseValues => 32,
            RunError::MissingDefaultCase => 33,
            RunError::EmptyImplicitVariable => 34,
            RunError::MissingWtf => 35,
            RunError::MissingOmg => 36,
            RunError::UnbalancedYarn => 37,
            RunError::InvalidCaseValue(_) => 38,
            RunError::DoubleYaRly => 39,
            RunError::DoubleNoWai => 40,
            RunError::DoubleDefaultCase => 41,
            RunError::MissingORly => 42,
            RunError::UnrecognizedCommand => 43,
            RunError::InvalidLiteral(_) => 44,
            RunError::MissingInput => 45,
            RunError::DeclarationInBlock => 46,
            RunError::NestedORly => 47,
            RunError::NestedWtf => 48,
        }
    }
}
