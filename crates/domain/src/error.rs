//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`WordclockError`] via `#[from]` or an explicit `From` impl.

/// Base error returned by domain constructors and application services.
#[derive(Debug, thiserror::Error)]
pub enum WordclockError {
    /// A value failed a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The device could not be reached or answered unexpectedly.
    #[error("device error: {0}")]
    Device(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No tab with this identifier exists.
    #[error("unknown tab: {0}")]
    UnknownTab(String),

    /// A colour was not six hexadecimal digits.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A brightness body was not an integer.
    #[error("invalid brightness: {0:?}")]
    InvalidBrightness(String),
}
