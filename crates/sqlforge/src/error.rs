//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised when a draft cannot be serialized into SQL.
///
/// All variants are fatal, synchronous build-time errors; the draft holds no
/// partial result and there is no recovery path inside the builder.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// No target table was supplied before `build`
    #[error("invalid builder state: missing table(s)")]
    MissingTable,

    /// INSERT draft built with zero value entries
    #[error("invalid builder state: missing at least one INSERT entry")]
    MissingInsertEntry,

    /// UPDATE draft built with zero SET assignments
    #[error("invalid builder state: missing at least one UPDATE set")]
    MissingUpdateSetter,

    /// No statement type was selected before `build`
    #[error("invalid builder state: missing instruction type (SELECT, INSERT, UPDATE or DELETE)")]
    MissingStatementType,
}
