use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the election core. Every mutating call reports failure
/// synchronously to the calling layer, which owns user-facing messaging;
/// nothing is retried, since the core performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Empty or malformed input to a mutating call.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// A referenced id is absent.
    #[error("Not found: {0}")]
    NotFound(String),
    /// A duplicate id on create, or a repeat ballot submission.
    #[error("Conflict: {0}")]
    Conflict(String),
    /// The operation's precondition does not hold,
    /// e.g. deleting a category that still has candidates.
    #[error("Precondition failed: {0}")]
    Precondition(String),
    /// "Next" pressed on the ballot with no choice while skipping is
    /// disallowed. Expected and frequent; the ballot UI simply re-prompts.
    #[error("Selection required: {0}")]
    SelectionRequired(String),
    /// A ballot was started with zero categories configured.
    #[error("No voting categories are configured")]
    NoCategories,
}

impl Error {
    /// Shorthand for `NotFound` over a described entity.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Shorthand for `Validation` with a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
