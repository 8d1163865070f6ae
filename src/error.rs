use thiserror::Error;

/// The one way evaluation fails: the expression is invalid at `position`.
///
/// `position` is a character offset into the original string, counted in
/// raw source characters (whitespace included). The underlying cause is
/// kept in `source` for diagnostics; callers that only branch on failure
/// can ignore it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid expression {expression:?} (at offset {position})")]
pub struct InvalidExpression {
    /// The full expression that failed to evaluate
    pub expression: String,
    /// Character offset into `expression` at the point of failure
    pub position: usize,
    /// What went wrong at that offset
    #[source]
    pub source: EvalError,
}

/// Internal evaluation faults, surfaced as the cause of an
/// [`InvalidExpression`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A character sequence no tokenizer rule accepts
    #[error("unrecognized token")]
    UnknownToken,
    /// An operator at the start of the expression, with nothing to apply
    /// it to
    #[error("operator without a left operand")]
    OperatorWithoutOperand,
    /// Two bare identifiers next to each other
    #[error("adjacent identifiers")]
    AdjacentIdentifiers,
    /// An operator needed more operands than the expression produced
    #[error("operand stack exhausted")]
    MissingOperand,
    /// The operator stack ran out while unwinding to a `(` marker
    #[error("unmatched parenthesis")]
    UnmatchedParen,
    /// Input ended inside a function call's argument list
    #[error("function call is never closed")]
    UnterminatedCall,
    /// A function call was evaluated without a context to dispatch it to
    #[error("no context to dispatch call to '{0}'")]
    MissingContext(String),
    /// The host context reported a failure
    #[error("context call failed: {0}")]
    Host(String),
}
