//! Client error type.
//!
//! Every failure of a table operation is a [`ClientError`]. Codec failures are
//! tagged with the operation that hit them; the service's own error responses
//! keep their status and verbatim body.

use bytes::Bytes;
use dynamite_auth::SigningError;
use dynamite_model::{CodecError, DynamoDBOperation};
use http::StatusCode;

/// Errors returned by the DynamoDB client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A value could not be converted to or from its wire form.
    #[error("{operation}: {source}")]
    Codec {
        /// Operation being built or parsed.
        operation: DynamoDBOperation,
        /// Underlying codec failure.
        #[source]
        source: CodecError,
    },

    /// The service answered with a status other than 200.
    #[error("request failed: {status}: {}", String::from_utf8_lossy(.body))]
    Request {
        /// Response status, e.g. `400 Bad Request`.
        status: StatusCode,
        /// Response body, byte for byte. Only the `Display` output is lossy.
        body: Bytes,
    },

    /// A request or response document was not valid JSON of the expected shape.
    #[error("{operation}: malformed document: {source}")]
    Protocol {
        /// Operation whose document was malformed.
        operation: DynamoDBOperation,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The response body does not match its `x-amz-crc32` header.
    #[error("response checksum mismatch: header {expected}, computed {actual}")]
    Checksum {
        /// Value of the `x-amz-crc32` header.
        expected: String,
        /// CRC32 of the received body.
        actual: u32,
    },

    /// The request could not be signed.
    #[error("signing failed: {0}")]
    Signing(#[from] SigningError),

    /// The HTTP request could not be assembled.
    #[error("invalid request: {0}")]
    Http(#[from] http::Error),

    /// The HTTP exchange failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The client configuration is incomplete or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Wrap a codec failure for `operation`.
    #[must_use]
    pub fn codec(operation: DynamoDBOperation, source: CodecError) -> Self {
        Self::Codec { operation, source }
    }

    /// Wrap a JSON failure for `operation`.
    #[must_use]
    pub fn protocol(operation: DynamoDBOperation, source: serde_json::Error) -> Self {
        Self::Protocol { operation, source }
    }

    /// Whether a value or wire tag had no codec mapping.
    #[must_use]
    pub fn is_unsupported_type(&self) -> bool {
        matches!(
            self,
            Self::Codec {
                source: CodecError::UnsupportedType(_),
                ..
            }
        )
    }

    /// Whether a wire number failed to parse.
    #[must_use]
    pub fn is_malformed_number(&self) -> bool {
        matches!(
            self,
            Self::Codec {
                source: CodecError::MalformedNumber { .. },
                ..
            }
        )
    }

    /// The service's response status, for [`ClientError::Request`].
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_request_error_with_status_line_and_body() {
        let err = ClientError::Request {
            status: StatusCode::BAD_REQUEST,
            body: Bytes::from_static(br#"{"__type":"ValidationException"}"#),
        };
        assert_eq!(
            err.to_string(),
            r#"request failed: 400 Bad Request: {"__type":"ValidationException"}"#
        );
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_should_classify_codec_errors() {
        let err = ClientError::codec(
            DynamoDBOperation::PutItem,
            CodecError::unsupported("bool"),
        );
        assert!(err.is_unsupported_type());
        assert!(!err.is_malformed_number());
        assert!(err.status().is_none());
        assert!(err.to_string().starts_with("PutItem: "));

        let err = ClientError::codec(
            DynamoDBOperation::GetItem,
            CodecError::malformed_number("abc", "invalid digit"),
        );
        assert!(err.is_malformed_number());
    }
}
