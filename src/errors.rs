use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

/// The only failure the evaluator itself can report.
///
/// Carries a human-readable message, the byte offset where scanning stopped
/// and, when there was one, the character found there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at position {position}")]
pub struct SyntaxError {
    message: String,
    position: usize,
    found: Option<char>,
}

impl SyntaxError {
    pub(crate) fn new(message: impl Into<String>, position: usize, found: Option<char>) -> Self {
        Self { message: message.into(), position, found }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset into the evaluated text.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Offending character, `None` at end of input.
    pub fn found(&self) -> Option<char> {
        self.found
    }
}

// Define an enum to represent possible calculation errors
#[derive(Debug, Error)] // Automatically implement `Debug` and `Error` traits for the enum
pub enum EvalError {
    // The text does not follow the expression grammar
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    // Nothing left once surrounding whitespace is trimmed
    #[error("no input provided")]
    EmptyInput,

    // Infinite result rejected by the non-finite policy
    #[error("result is too large")]
    Overflow,

    // NaN result rejected by the non-finite policy
    #[error("invalid calculation")]
    NotANumber,

    // No function registered under this name
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    // Argument outside a function's domain, with a message
    #[error("invalid operation: {0}")]
    Domain(String),

    // Options could not be loaded
    #[error("config error: {0}")]
    Config(String),
}

// Type alias for results that use `EvalError` as the error type
pub type Result<T> = std::result::Result<T, EvalError>;
