//! Client configuration.

use std::env;
use std::time::Duration;

use dynamite_auth::Credentials;

use crate::error::ClientError;
use crate::region::Region;
use crate::transport::HttpTransportConfig;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything a [`Table`](crate::Table) needs besides its name.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Signing region and endpoint.
    pub region: Region,
    /// Credentials requests are signed with.
    pub credentials: Credentials,
    /// Log every outgoing request at `debug`.
    pub dump_requests: bool,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Configuration for `region` with the default transport settings.
    #[must_use]
    pub fn new(region: Region, credentials: Credentials) -> Self {
        Self {
            region,
            credentials,
            dump_requests: false,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// - `DYNAMITE_REGION`, `AWS_REGION`, `AWS_DEFAULT_REGION`: region name,
    ///   first one set wins (default: `us-east-1`)
    /// - `DYNAMITE_ENDPOINT`: endpoint host or URL overriding the region table
    /// - `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`: required
    /// - `AWS_SESSION_TOKEN`: optional
    /// - `DYNAMITE_DUMP_REQUESTS`: log outgoing requests (default: false)
    /// - `DYNAMITE_TIMEOUT_SECS`: request timeout in whole seconds, `0` for none
    ///   (default: 30). A value that is not a whole number is an error.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let region_name = ["DYNAMITE_REGION", "AWS_REGION", "AWS_DEFAULT_REGION"]
            .into_iter()
            .find_map(&lookup)
            .unwrap_or_else(|| "us-east-1".to_owned());

        let region = match lookup("DYNAMITE_ENDPOINT") {
            Some(endpoint) => Region::custom(region_name, endpoint),
            None => region_name.parse()?,
        };

        let access_key_id = lookup("AWS_ACCESS_KEY_ID")
            .ok_or_else(|| ClientError::Config("AWS_ACCESS_KEY_ID not set".to_owned()))?;
        let secret_access_key = lookup("AWS_SECRET_ACCESS_KEY")
            .ok_or_else(|| ClientError::Config("AWS_SECRET_ACCESS_KEY not set".to_owned()))?;
        let mut credentials = Credentials::new(access_key_id, secret_access_key);
        if let Some(token) = lookup("AWS_SESSION_TOKEN") {
            credentials = credentials.with_session_token(token);
        }

        let timeout_secs = match lookup("DYNAMITE_TIMEOUT_SECS") {
            Some(s) => s.trim().parse::<u64>().map_err(|e| {
                ClientError::Config(format!("invalid DYNAMITE_TIMEOUT_SECS {s:?}: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            region,
            credentials,
            dump_requests: env_bool(lookup("DYNAMITE_DUMP_REQUESTS"), false),
            timeout: (timeout_secs > 0).then_some(Duration::from_secs(timeout_secs)),
        })
    }

    /// Log every outgoing request at `debug`.
    #[must_use]
    pub fn with_dump_requests(mut self, dump_requests: bool) -> Self {
        self.dump_requests = dump_requests;
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Settings for the [`HttpTransport`](crate::HttpTransport) built from this configuration.
    #[must_use]
    pub fn transport_config(&self) -> HttpTransportConfig {
        HttpTransportConfig {
            timeout: self.timeout,
            dump_requests: self.dump_requests,
        }
    }
}

fn env_bool(value: Option<String>, default: bool) -> bool {
    value.map_or(default, |v| {
        matches!(v.as_str(), "1" | "true" | "yes" | "TRUE" | "YES")
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ClientConfig, ClientError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    const CREDS: [(&str, &str); 2] = [
        ("AWS_ACCESS_KEY_ID", "AKID"),
        ("AWS_SECRET_ACCESS_KEY", "secret"),
    ];

    #[test]
    fn test_should_default_to_us_east_1() {
        let config = config_from(&CREDS).unwrap();
        assert_eq!(config.region, Region::US_EAST_1);
        assert!(!config.dump_requests);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.credentials.session_token(), None);
    }

    #[test]
    fn test_should_prefer_dynamite_region_over_aws_region() {
        let mut vars = CREDS.to_vec();
        vars.push(("AWS_REGION", "us-west-2"));
        vars.push(("DYNAMITE_REGION", "eu-west-1"));
        let config = config_from(&vars).unwrap();
        assert_eq!(config.region, Region::EU_WEST_1);
    }

    #[test]
    fn test_should_use_custom_endpoint() {
        let mut vars = CREDS.to_vec();
        vars.push(("DYNAMITE_ENDPOINT", "http://localhost:8000"));
        let config = config_from(&vars).unwrap();
        assert_eq!(config.region.name(), "us-east-1");
        assert_eq!(config.region.url(), "http://localhost:8000");
    }

    #[test]
    fn test_should_read_transport_flags_and_session_token() {
        let mut vars = CREDS.to_vec();
        vars.push(("DYNAMITE_DUMP_REQUESTS", "yes"));
        vars.push(("DYNAMITE_TIMEOUT_SECS", "0"));
        vars.push(("AWS_SESSION_TOKEN", "tok"));
        let config = config_from(&vars).unwrap();
        assert!(config.dump_requests);
        assert_eq!(config.timeout, None);
        assert_eq!(config.credentials.session_token(), Some("tok"));

        let transport = config.transport_config();
        assert!(transport.dump_requests);
        assert_eq!(transport.timeout, None);
    }

    #[test]
    fn test_should_require_credentials() {
        let err = config_from(&[("AWS_ACCESS_KEY_ID", "AKID")]).unwrap_err();
        assert!(matches!(err, ClientError::Config(msg) if msg.contains("AWS_SECRET_ACCESS_KEY")));
    }

    #[test]
    fn test_should_reject_unparseable_timeout() {
        let mut vars = CREDS.to_vec();
        vars.push(("DYNAMITE_TIMEOUT_SECS", "abc"));
        let err = config_from(&vars).unwrap_err();
        assert!(matches!(err, ClientError::Config(msg) if msg.contains("DYNAMITE_TIMEOUT_SECS")));

        let mut vars = CREDS.to_vec();
        vars.push(("DYNAMITE_TIMEOUT_SECS", "5"));
        assert_eq!(config_from(&vars).unwrap().timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_should_reject_unknown_region_without_endpoint() {
        let mut vars = CREDS.to_vec();
        vars.push(("AWS_REGION", "nowhere-1"));
        assert!(matches!(config_from(&vars), Err(ClientError::Config(_))));
    }
}
