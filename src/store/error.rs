//! Error types for the storage engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur in engine operations.
///
/// Every variant is recoverable: the engine state is unchanged when an
/// operation returns an error, and the error is always returned to the
/// immediate caller. Translating an error into display text is the
/// caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Key or value rejected by `set` before any mutation took place.
    #[error("invalid input: key and value must be non-empty")]
    InvalidInput,

    /// `get` was asked for a key that holds no current value.
    #[error("invalid name: no such key")]
    InvalidName,

    /// `rollback` or `commit` was called with no active transaction.
    #[error("no transaction in progress")]
    NoTransaction,
}
