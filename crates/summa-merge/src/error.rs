//! Error types for the merge crate.
//!
//! Only engine configuration can fail here. Errors raised by a domain's
//! combine operator are returned to the caller as the item type's own
//! `Mergeable::Error`, untouched.

/// Errors that can occur while building or configuring an engine.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The configuration failed validation.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// The configuration text could not be parsed.
    #[error("failed to parse engine configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
