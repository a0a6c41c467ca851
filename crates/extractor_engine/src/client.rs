use std::time::Duration;

use extractor_logging::extractor_warn;
use serde::{Deserialize, Serialize};

use crate::{ExtractError, ExtractedContent, FailureKind};

/// Fallback shown when the API reports failure without a usable error body.
pub const GENERIC_API_ERROR: &str = "Failed to extract content.";
/// Fixed message for requests that never completed.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error.";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExtractRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtractResponse {
    summary: String,
    key_points: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ApiErrorBody {
    error: Option<String>,
}

#[async_trait::async_trait]
pub trait ExtractClient: Send + Sync {
    async fn extract(&self, url: &str) -> Result<ExtractedContent, ExtractError>;
}

/// Client for `POST {base_url}/extract` backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestExtractClient {
    base_url: String,
    settings: ClientSettings,
}

impl ReqwestExtractClient {
    pub fn new(base_url: impl Into<String>, settings: ClientSettings) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            settings,
        }
    }

    fn build_client(&self) -> Result<reqwest::Client, ExtractError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|_| ExtractError::new(FailureKind::Network, NETWORK_ERROR_MESSAGE))
    }
}

#[async_trait::async_trait]
impl ExtractClient for ReqwestExtractClient {
    async fn extract(&self, url: &str) -> Result<ExtractedContent, ExtractError> {
        reqwest::Url::parse(url).map_err(|_| {
            ExtractError::new(
                FailureKind::InvalidUrl,
                "Invalid or missing URL. Must start with http:// or https://",
            )
        })?;

        let client = self.build_client()?;
        let endpoint = format!("{}/extract", self.base_url);

        let response = client
            .post(&endpoint)
            .json(&ExtractRequest { url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            let message = body.error.unwrap_or_else(|| GENERIC_API_ERROR.to_owned());
            return Err(ExtractError::new(
                FailureKind::Api {
                    status: status.as_u16(),
                },
                message,
            ));
        }

        let content: ExtractResponse = response.json().await.map_err(|err| {
            extractor_warn!("Malformed success body from {}: {}", endpoint, err);
            ExtractError::new(
                FailureKind::Decode,
                "Malformed response from the extraction service.",
            )
        })?;

        Ok(ExtractedContent {
            summary: content.summary,
            key_points: content.key_points,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ExtractError {
    if err.is_timeout() {
        return ExtractError::new(FailureKind::Timeout, "The extraction request timed out.");
    }
    ExtractError::new(FailureKind::Network, NETWORK_ERROR_MESSAGE)
}
