//! Codec error types.
//!
//! Every failure of the attribute and item codecs is a [`CodecError`]. None of
//! them are retryable: they point at either the call site or a protocol mismatch.

/// Errors raised while converting between native values and attributes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// A native value or wire tag has no codec mapping.
    #[error("type {0} is not supported by the attribute codec")]
    UnsupportedType(String),

    /// A wire number string did not parse under the selected integer/float rule.
    #[error("malformed number {value:?}: {reason}")]
    MalformedNumber {
        /// The string received from the service.
        value: String,
        /// Why parsing failed.
        reason: String,
    },
}

impl CodecError {
    /// Create an [`CodecError::UnsupportedType`] naming the offending type or tag.
    #[must_use]
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType(type_name.into())
    }

    /// Create a [`CodecError::MalformedNumber`].
    #[must_use]
    pub fn malformed_number(value: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedNumber {
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
