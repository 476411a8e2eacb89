//! REST Countries client.
//!
//! The live `/v3.1/all` endpoint refuses to answer without a `fields`
//! filter, so the client always asks for exactly the fields Atlas renders.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{CountrySource, FetchError};
use super::types::Country;

pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1/all";

/// Comma-separated field filter sent with every request.
pub const FIELDS: &str = "name,cca2,cca3,altSpellings,idd,flags";

/// reqwest-backed source for `GET {endpoint}?fields=...`.
pub struct RestCountriesClient {
    endpoint: String,
    client: reqwest::Client,
}

impl RestCountriesClient {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("atlas/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        info!("Fetching countries from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("fields", FIELDS)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Countries response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Countries API error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let countries: Vec<Country> = response.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Parse(e.to_string())
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        info!("Decoded {} countries", countries.len());
        Ok(countries)
    }
}
