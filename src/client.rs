// Client API Wrapper - typed access to the neighborhood API over HTTP
//
// Any non-2xx status or `success: false` body is an error; otherwise the
// envelope's `data` is handed back.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::envelope::ApiResponse;
use crate::model::NeighborhoodRecord;
use crate::preferences::{SearchPreferences, SearchRequest};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("{0}")]
    Api(String),

    #[error("response envelope has no data")]
    MissingData,

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// `message` and `timestamp` from the health check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone)]
pub struct NeighborhoodClient {
    base_url: String,
    http: reqwest::Client,
}

impl NeighborhoodClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        NeighborhoodClient {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Base URL from NEIGHBORHOOD_API_URL, falling back to localhost:5000
    pub fn from_env() -> Self {
        let url = std::env::var("NEIGHBORHOOD_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Transport
    // ========================================================================

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<ApiResponse<T>> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, endpoint))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<ApiResponse<T>> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, endpoint))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<ApiResponse<T>> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "API request failed".to_string());
            return Err(ClientError::Api(message));
        }

        Ok(envelope)
    }

    fn data<T>(envelope: ApiResponse<T>) -> Result<T> {
        envelope.data.ok_or(ClientError::MissingData)
    }

    // ========================================================================
    // Neighborhood calls
    // ========================================================================

    pub async fn get_neighborhoods(&self) -> Result<Vec<NeighborhoodRecord>> {
        Self::data(self.get("/api/neighborhoods").await?)
    }

    pub async fn get_neighborhood(&self, id: &str) -> Result<NeighborhoodRecord> {
        Self::data(self.get(&neighborhood_path(id)).await?)
    }

    pub async fn search_neighborhoods(
        &self,
        preferences: &SearchPreferences,
    ) -> Result<Vec<NeighborhoodRecord>> {
        let body = SearchRequest {
            preferences: preferences.clone(),
        };
        Self::data(self.post("/api/neighborhoods/search", &body).await?)
    }

    pub async fn health_check(&self) -> Result<HealthStatus> {
        let envelope: ApiResponse<serde_json::Value> = self.get("/api/health").await?;
        Ok(HealthStatus {
            message: envelope.message.unwrap_or_default(),
            timestamp: envelope.timestamp.unwrap_or_default(),
        })
    }
}

/// Path for a single record; the id is percent-encoded as one path segment
fn neighborhood_path(id: &str) -> String {
    format!("/api/neighborhoods/{}", urlencoding::encode(id))
}

impl Default for NeighborhoodClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
