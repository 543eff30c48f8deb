//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid user input to the indentation rules.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty indent spec")]
    EmptySpec,

    #[error("invalid indent spec '{spec}': count must be a non-negative integer")]
    InvalidCount { spec: String },

    #[error("invalid indent spec '{spec}': count must be greater than zero")]
    ZeroWidth { spec: String },

    #[error("invalid indent spec '{spec}': count must be at most {max}")]
    TooWide { spec: String, max: usize },
}
