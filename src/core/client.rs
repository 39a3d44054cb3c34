//! HTTP transport shared by the translation providers

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::errors::{Result, TranslationError};

/// Thin wrapper over a reqwest client that posts url-encoded forms
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport; `None` leaves requests without a timeout
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client })
    }

    /// Send one form POST and return the raw body.
    ///
    /// The status code is not inspected: both APIs report failures inside
    /// the JSON body, so the body is handed back either way.
    pub async fn post_form<F: Serialize + ?Sized>(&self, url: &str, form: &F) -> Result<String> {
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();
        debug!("Response status: {}", status);
        if !status.is_success() {
            warn!("Non-success HTTP status {} from {}", status, url);
        }

        response.text().await.map_err(|e| TranslationError::NetworkError {
            message: e.to_string(),
        })
    }
}

/// Decode a JSON response body into the provider schema
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| TranslationError::InvalidResponseError {
        message: e.to_string(),
    })
}

/// Best-effort decode: a malformed body yields the zero-valued response
pub fn decode_or_default<T: DeserializeOwned + Default>(body: &str) -> T {
    decode_response(body).unwrap_or_else(|e| {
        warn!("{}; continuing with an empty response", e);
        T::default()
    })
}
