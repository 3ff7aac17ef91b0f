//! Region to endpoint table.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Regions with a known DynamoDB endpoint.
const KNOWN_REGIONS: &[(&str, &str)] = &[
    ("us-east-1", "dynamodb.us-east-1.amazonaws.com"),
    ("us-west-1", "dynamodb.us-west-1.amazonaws.com"),
    ("us-west-2", "dynamodb.us-west-2.amazonaws.com"),
    ("eu-west-1", "dynamodb.eu-west-1.amazonaws.com"),
    ("ap-northeast-1", "dynamodb.ap-northeast-1.amazonaws.com"),
    ("ap-southeast-1", "dynamodb.ap-southeast-1.amazonaws.com"),
];

/// A signing region and the endpoint requests for it are sent to.
///
/// # Examples
///
/// ```
/// use dynamite_client::Region;
///
/// let region: Region = "eu-west-1".parse().unwrap();
/// assert_eq!(region.url(), "https://dynamodb.eu-west-1.amazonaws.com");
///
/// let local = Region::custom("us-east-1", "http://localhost:8000");
/// assert_eq!(local.url(), "http://localhost:8000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    name: Cow<'static, str>,
    endpoint: Cow<'static, str>,
}

impl Region {
    /// US East (N. Virginia).
    pub const US_EAST_1: Self = Self::known(0);
    /// US West (N. California).
    pub const US_WEST_1: Self = Self::known(1);
    /// US West (Oregon).
    pub const US_WEST_2: Self = Self::known(2);
    /// EU (Ireland).
    pub const EU_WEST_1: Self = Self::known(3);
    /// Asia Pacific (Tokyo).
    pub const AP_NORTHEAST_1: Self = Self::known(4);
    /// Asia Pacific (Singapore).
    pub const AP_SOUTHEAST_1: Self = Self::known(5);

    const fn known(index: usize) -> Self {
        let (name, endpoint) = KNOWN_REGIONS[index];
        Self {
            name: Cow::Borrowed(name),
            endpoint: Cow::Borrowed(endpoint),
        }
    }

    /// Look up a region by its symbolic name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        KNOWN_REGIONS
            .iter()
            .position(|(known, _)| *known == name)
            .map(Self::known)
    }

    /// A region served by an arbitrary endpoint, such as a local emulator.
    ///
    /// `endpoint` is a host (optionally with port), or a full base URL when it
    /// contains a scheme.
    #[must_use]
    pub fn custom(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            endpoint: Cow::Owned(endpoint.into()),
        }
    }

    /// Every region in the built-in table.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..KNOWN_REGIONS.len()).map(Self::known)
    }

    /// Region name used in the credential scope.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Endpoint host, or base URL for custom endpoints given with a scheme.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Base URL requests are sent to, without a trailing slash.
    #[must_use]
    pub fn url(&self) -> String {
        if self.endpoint.contains("://") {
            self.endpoint.trim_end_matches('/').to_owned()
        } else {
            format!("https://{}", self.endpoint)
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::US_EAST_1
    }
}

impl FromStr for Region {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ClientError::Config(format!("unknown region: {s}")))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_resolve_every_known_region() {
        for region in Region::all() {
            assert_eq!(
                region.endpoint(),
                format!("dynamodb.{}.amazonaws.com", region.name())
            );
            assert_eq!(Region::from_name(region.name()), Some(region));
        }
        assert_eq!(Region::all().count(), 6);
    }

    #[test]
    fn test_should_map_us_west_1_to_its_own_endpoint() {
        assert_eq!(Region::US_WEST_1.endpoint(), "dynamodb.us-west-1.amazonaws.com");
        assert_eq!(Region::US_WEST_2.endpoint(), "dynamodb.us-west-2.amazonaws.com");
    }

    #[test]
    fn test_should_reject_unknown_region() {
        let err = "mars-north-1".parse::<Region>().unwrap_err();
        assert!(matches!(err, ClientError::Config(msg) if msg.contains("mars-north-1")));
    }

    #[test]
    fn test_should_build_urls() {
        assert_eq!(Region::US_EAST_1.url(), "https://dynamodb.us-east-1.amazonaws.com");
        assert_eq!(
            Region::custom("local", "localhost:8000").url(),
            "https://localhost:8000"
        );
        assert_eq!(
            Region::custom("local", "http://localhost:8000/").url(),
            "http://localhost:8000"
        );
        assert_eq!(Region::default(), Region::US_EAST_1);
        assert_eq!(Region::AP_SOUTHEAST_1.to_string(), "ap-southeast-1");
    }
}
