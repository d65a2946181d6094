use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::models::{ApiError, HistoryRecord, Prediction, TransactionPayload};

/// Anything that can score a transaction and list what it has scored.
///
/// Implemented over HTTP by [`ScorerClient`]; tests swap in an in-memory fake.
#[async_trait]
pub trait FraudScorer: Send + Sync {
    /// POST /predict/
    async fn predict(&self, payload: &TransactionPayload) -> Result<Prediction, ApiError>;

    /// GET /history/
    async fn history(&self) -> Result<Vec<HistoryRecord>, ApiError>;

    /// Base URL shown to the user in connection error messages
    fn base_url(&self) -> &str;
}

/// HTTP client for the remote fraud-scoring service
pub struct ScorerClient {
    http_client: HttpClient,
    base_url: String,
}

impl ScorerClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://fraud-detection-api-ddtn.onrender.com";

    /// Create a client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Map a transport failure onto the error taxonomy.
    /// Timeouts count as connection failures; there is no separate timeout kind.
    fn classify_send_error(e: reqwest::Error) -> ApiError {
        if e.is_connect() || e.is_timeout() {
            ApiError::Connection(e.to_string())
        } else {
            ApiError::Request(format!("Request failed: {}", e))
        }
    }

    /// Anything but 200 is surfaced verbatim with its status and body
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Scorer returned {}: {}", status.as_u16(), body);
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl FraudScorer for ScorerClient {
    async fn predict(&self, payload: &TransactionPayload) -> Result<Prediction, ApiError> {
        let url = format!("{}/predict/", self.base_url);
        debug!("POST {} (Amount={:.2}, Time={:.0})", url, payload.amount, payload.time);

        let response = self
            .http_client
            .post(&url)
            .headers(Self::create_headers())
            .json(payload)
            .send()
            .await
            .map_err(Self::classify_send_error)?;

        debug!("POST {} -> {}", url, response.status());
        Self::read_json(response).await
    }

    async fn history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        let url = format!("{}/history/", self.base_url);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .headers(Self::create_headers())
            .send()
            .await
            .map_err(Self::classify_send_error)?;

        debug!("GET {} -> {}", url, response.status());
        Self::read_json(response).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
