//! HTTP transport behind the table client.
//!
//! [`Transport`] is the seam between the client and the network: it takes a
//! fully signed request and returns the raw response. [`HttpTransport`] is the
//! production implementation on top of `reqwest`.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use http::HeaderMap;
use tracing::debug;

use crate::error::ClientError;

/// Headers whose values are replaced before a request is dumped.
const REDACTED_HEADERS: &[&str] = &["authorization", "x-amz-security-token"];

/// Future returned by [`Transport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<http::Response<Bytes>, ClientError>> + Send + 'a>>;

/// Sends signed requests and returns the service's raw responses.
///
/// Implementations must not interpret the response: status checks, checksum
/// verification and parsing all happen in the client.
pub trait Transport: Send + Sync + 'static {
    /// Send one request and return the complete response.
    fn send(&self, request: http::Request<Bytes>) -> TransportFuture<'_>;
}

/// [`HttpTransport`] configuration.
#[derive(Debug, Clone, Default)]
pub struct HttpTransportConfig {
    /// Overall timeout per request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Log every outgoing request (method, URL, headers and body) at `debug`.
    pub dump_requests: bool,
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: HttpTransportConfig,
}

impl HttpTransport {
    /// Create a transport with the given configuration.
    pub fn new(config: HttpTransportConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// The configuration this transport was built with.
    #[must_use]
    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: http::Request<Bytes>) -> TransportFuture<'_> {
        Box::pin(async move {
            if self.config.dump_requests {
                dump_request(&request);
            }

            let request = reqwest::Request::try_from(request)?;
            let response = self.client.execute(request).await?;

            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?;

            let mut out = http::Response::new(body);
            *out.status_mut() = status;
            *out.headers_mut() = headers;
            Ok(out)
        })
    }
}

fn dump_request(request: &http::Request<Bytes>) {
    debug!(
        method = %request.method(),
        uri = %request.uri(),
        headers = ?redacted_headers(request.headers()),
        body = %String::from_utf8_lossy(request.body()),
        "Outgoing request"
    );
}

/// Header pairs with credentials masked, in map order.
fn redacted_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if REDACTED_HEADERS.contains(&name.as_str()) {
                "<redacted>".to_owned()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            (name.as_str().to_owned(), value)
        })
        .collect()
}
