//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the session reports it and returns to the
/// menu. Terminal IO failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A unit price did not parse as a number.
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    /// A selection or square footage did not parse as a number.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),

    /// A parsed selection points outside the catalog.
    #[error("invalid option: {selection} (catalog has {len} entries)")]
    InvalidOption { selection: i64, len: usize },

    /// A cost was requested while the catalog holds nothing.
    #[error("no options available")]
    EmptyCatalog,

    /// The menu choice matched none of the known actions.
    #[error("invalid choice: {0:?}")]
    InvalidChoice(String),
}

impl DomainError {
    pub fn invalid_price(raw: impl Into<String>) -> Self {
        Self::InvalidPrice(raw.into())
    }

    pub fn invalid_input(raw: impl Into<String>) -> Self {
        Self::InvalidInput(raw.into())
    }

    pub fn invalid_option(selection: i64, len: usize) -> Self {
        Self::InvalidOption { selection, len }
    }

    pub fn invalid_choice(raw: impl Into<String>) -> Self {
        Self::InvalidChoice(raw.into())
    }
}
