//! Canonical request construction for AWS Signature Version 4.
//!
//! The canonical form of a request is:
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```
//!
//! Every header present on the request at signing time is signed.

use std::collections::BTreeMap;
use std::fmt;

use http::HeaderMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use sha2::{Digest, Sha256};

use crate::error::SigningError;

/// Characters left unencoded in a path segment: the RFC 3986 unreserved set.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A request reduced to the components that take part in its signature.
#[derive(Debug, Clone)]
pub struct CanonicalRequest {
    method: String,
    uri: String,
    query: String,
    /// Lowercase header name to normalized value, sorted by name.
    headers: BTreeMap<String, String>,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Canonicalize the given request components.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError::InvalidHeaderValue`] if a header value is not
    /// visible ASCII.
    pub fn new(
        method: &http::Method,
        uri: &http::Uri,
        headers: &HeaderMap,
        payload_hash: &str,
    ) -> Result<Self, SigningError> {
        let mut canonical_headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in headers {
            let value = value
                .to_str()
                .map_err(|_| SigningError::InvalidHeaderValue(name.as_str().to_owned()))?;
            let value = collapse_whitespace(value.trim());
            // Repeated headers are joined with commas in order of appearance.
            canonical_headers
                .entry(name.as_str().to_owned())
                .and_modify(|existing| {
                    existing.push(',');
                    existing.push_str(&value);
                })
                .or_insert(value);
        }

        Ok(Self {
            method: method.as_str().to_owned(),
            uri: canonical_uri(uri.path()),
            query: canonical_query_string(uri.query().unwrap_or("")),
            headers: canonical_headers,
            payload_hash: payload_hash.to_owned(),
        })
    }

    /// Semicolon-separated list of signed header names, e.g. `host;x-amz-date`.
    #[must_use]
    pub fn signed_headers(&self) -> String {
        self.headers.keys().map(String::as_str).collect::<Vec<_>>().join(";")
    }

    /// Hex-encoded SHA-256 of the canonical request string.
    #[must_use]
    pub fn hash(&self) -> String {
        hex::encode(Sha256::digest(self.to_string().as_bytes()))
    }
}

impl fmt::Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.uri)?;
        writeln!(f, "{}", self.query)?;
        for (name, value) in &self.headers {
            writeln!(f, "{name}:{value}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers())?;
        f.write_str(&self.payload_hash)
    }
}

/// Build the canonical URI by encoding each path segment individually.
///
/// Forward slashes are preserved and an empty path becomes `/`. Segments are
/// decoded before encoding so an already encoded path is not encoded twice.
///
/// # Examples
///
/// ```
/// use dynamite_auth::canonical::canonical_uri;
///
/// assert_eq!(canonical_uri(""), "/");
/// assert_eq!(canonical_uri("/a b"), "/a%20b");
/// ```
#[must_use]
pub fn canonical_uri(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_owned();
    }

    path.split('/')
        .map(|segment| {
            let decoded = percent_decode_str(segment).decode_utf8_lossy();
            utf8_percent_encode(&decoded, URI_ENCODE_SET).to_string()
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Sort query parameters by name, then by value.
///
/// Values are kept as they appear in the URI, since that is what the
/// service sees.
///
/// # Examples
///
/// ```
/// use dynamite_auth::canonical::canonical_query_string;
///
/// assert_eq!(canonical_query_string("b=2&a=1"), "a=1&b=2");
/// assert_eq!(canonical_query_string("flag"), "flag=");
/// ```
#[must_use]
pub fn canonical_query_string(query: &str) -> String {
    let mut params: Vec<(&str, &str)> = query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|param| param.split_once('=').unwrap_or((param, "")))
        .collect();
    params.sort_unstable();

    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Collapse runs of whitespace into a single space.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
            }
            prev_was_space = true;
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }
    result
}
