//! Error types for calc

use thiserror::Error;

/// Calculation errors
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Not a number: {0}")]
    Parse(String),

    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    pub fn parse(token: impl Into<String>) -> Self {
        Self::Parse(token.into())
    }

    pub fn invalid_operator(token: impl Into<String>) -> Self {
        Self::InvalidOperator(token.into())
    }

    /// True for the errors a user can recover from by retrying input
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::InvalidOperator(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
