//! HTTP client for the Google Places Web Service.

mod endpoints;

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::retry::retry_with_backoff;

pub use endpoints::DETAIL_FIELDS;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";

/// Client for the Google Places, Place Details, Autocomplete and Geocoding
/// endpoints.
///
/// Every response is checked twice: the HTTP status must be 2xx and the JSON
/// envelope's `status` must be `OK` or `ZERO_RESULTS`. Transient failures are
/// retried with exponential backoff up to `max_retries` additional attempts.
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    language: Option<String>,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl GooglePlacesClient {
    /// Creates a client pointed at the production Google endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// Retries are disabled until [`Self::with_retry`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so relative endpoint paths join under
        // the base instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            language: None,
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Builds a client from application configuration.
    ///
    /// # Errors
    ///
    /// See [`Self::with_base_url`].
    pub fn from_config(config: &eatnear_core::AppConfig) -> Result<Self, PlacesError> {
        Ok(Self::with_base_url(
            &config.google_maps_api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.places_base_url,
        )?
        .with_language(&config.language)
        .with_retry(config.max_retries, config.retry_backoff_base_ms))
    }

    /// Sets the response language for place details.
    #[must_use]
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_owned()).filter(|l| !l.is_empty());
        self
    }

    /// Enables retries: `max_retries` extra attempts, waiting roughly
    /// `backoff_base_ms * 2^(n-1)` before the n-th.
    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Builds a request URL for `path` (relative to the base URL) with
    /// percent-encoded query parameters and the API key appended last.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join \"{path}\": {e}"),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request with retries, asserts a 2xx HTTP status and an
    /// accepted envelope status, and returns the parsed JSON body.
    async fn request_json(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<serde_json::Value, PlacesError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || async move {
            let response = self.client.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(PlacesError::UnexpectedStatus {
                    status: status.as_u16(),
                    endpoint: url.path().to_owned(),
                });
            }

            let body = response.text().await?;
            let value: serde_json::Value =
                serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                    context: context.to_owned(),
                    source: e,
                })?;
            Self::check_api_status(&value)?;
            Ok(value)
        })
        .await
    }

    /// Checks the envelope `"status"` field. `OK` and `ZERO_RESULTS` pass;
    /// a missing status is treated as `OK`.
    fn check_api_status(body: &serde_json::Value) -> Result<(), PlacesError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("OK");
        if matches!(status, "OK" | "ZERO_RESULTS") {
            return Ok(());
        }
        let message = body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);
        Err(PlacesError::Status {
            status: status.to_owned(),
            message,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
