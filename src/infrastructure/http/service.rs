// Shared typed HTTP helper used by the API client modules.
use std::time::Duration;

use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Transport failure as seen by callers: the request never completed, the
/// server answered with a non-success status, or the body did not parse.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid base url '{0}'")]
    BaseUrl(String),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// JSON-over-HTTP client bound to a base URL.
///
/// Owns serialization, status-to-error translation and response decoding so
/// endpoint wrappers only deal in typed values.
pub struct HttpService {
    client: Client,
    base_url: Url,
}

impl HttpService {
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, HttpError> {
        let base_url =
            Url::parse(base_url).map_err(|_| HttpError::BaseUrl(base_url.to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap_or_else(|_| Client::new());

        info!("HTTP service bound to {}", base_url);
        Ok(Self { client, base_url })
    }

    /// POST `body` as JSON to `path` (resolved against the base URL) and
    /// decode the response body into `T`
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(path)
            .map_err(|_| HttpError::BaseUrl(format!("{}{}", self.base_url, path)))?;

        debug!("POST {}", url);

        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| HttpError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        response.json::<T>().await.map_err(|e| HttpError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}
