//! Error types for SigV4 request signing.

/// Errors that can occur while signing an outgoing request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SigningError {
    /// A header value is not visible ASCII and cannot be canonicalized,
    /// or a computed value could not be stored as a header.
    #[error("Invalid value for header: {0}")]
    InvalidHeaderValue(String),

    /// The request has neither a `host` header nor an authority in its URI.
    #[error("Request has no host to sign")]
    MissingHost,
}
