use thiserror::Error;

/// Errors produced while building domain items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("inverted interval: start {start} is after end {end}")]
    InvertedInterval { start: i64, end: i64 },

    #[error("fact subject must not be empty")]
    EmptySubject,

    #[error("fact attribute key must not be empty")]
    EmptyAttributeKey,
}

/// Convenience alias for domain results.
pub type DomainResult<T> = Result<T, DomainError>;
