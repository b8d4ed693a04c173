use thiserror::Error;

/// Errors raised while building a mapper or resolving a request's routing.
///
/// Every variant signals a configuration or programming defect. Nothing in
/// this crate retries or recovers from them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required construction input was missing or blank.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The mapper cannot produce a usable routing decision.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A required argument was absent.
    #[error("required argument is absent: {0}")]
    NullInput(&'static str),

    /// A broker URI does not use a recognized scheme.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// Result type alias for mapping operations
pub type Result<T> = std::result::Result<T, Error>;
