use std::fmt;

use async_trait::async_trait;

use super::types::Country;

/// Errors that can occur while fetching the country list.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Client misconfigured (bad URL, TLS backend failed to initialise).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not the expected JSON array.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can produce the full country list in one call.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches every country record.
    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeSource, sample_countries};

    #[test]
    fn test_source_through_trait_object() {
        let source: Box<dyn CountrySource> = Box::new(FakeSource {
            result: Ok(sample_countries()),
        });
        let countries = tokio_test::block_on(source.fetch_all()).unwrap();
        assert_eq!(countries.len(), 3);
        assert_eq!(source.name(), "fake");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FetchError::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            FetchError::Api { status: 503, message: "down".into() }.to_string(),
            "API error (HTTP 503): down"
        );
        assert_eq!(
            FetchError::Parse("expected array".into()).to_string(),
            "parse error: expected array"
        );
    }
}
