//! HTTP client for the notes API — the client tier's fetch layer.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Note;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },
    #[error("server returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("failed to decode response from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },
}

/// Seam over the four CRUD operations so the page controller can be
/// driven against a fake in tests.
#[async_trait]
pub trait NotesApi {
    async fn list(&self) -> Result<Vec<Note>, ApiError>;
    async fn create(&self, title: &str, text: &str) -> Result<Note, ApiError>;
    async fn update(&self, id: i64, title: &str, text: &str) -> Result<Note, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// reqwest-backed client targeting a running notes backend.
///
/// No retries and no timeout beyond reqwest defaults; a call cannot be
/// cancelled once started.
pub struct HttpNotesApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNotesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn check_status(url: &str, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn list(&self) -> Result<Vec<Note>, ApiError> {
        let url = format!("{}/api/notes", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            ApiError::Transport {
                url: url.clone(),
                source: e,
            }
        })?;

        let response = Self::check_status(&url, response)?;
        response.json::<Vec<Note>>().await.map_err(|e| ApiError::Decode {
            url: url.clone(),
            source: e,
        })
    }

    async fn create(&self, title: &str, text: &str) -> Result<Note, ApiError> {
        let url = format!("{}/api/notes/create", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "title": title, "text": text }))
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let response = Self::check_status(&url, response)?;
        response.json::<Note>().await.map_err(|e| ApiError::Decode {
            url: url.clone(),
            source: e,
        })
    }

    async fn update(&self, id: i64, title: &str, text: &str) -> Result<Note, ApiError> {
        let url = format!("{}/api/notes/update/{}", self.base_url, id);

        let response = self
            .client
            .put(&url)
            .json(&serde_json::json!({ "title": title, "text": text }))
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let response = Self::check_status(&url, response)?;
        response.json::<Note>().await.map_err(|e| ApiError::Decode {
            url: url.clone(),
            source: e,
        })
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let url = format!("{}/api/notes/delete/{}", self.base_url, id);

        let response = self.client.delete(&url).send().await.map_err(|e| {
            ApiError::Transport {
                url: url.clone(),
                source: e,
            }
        })?;

        Self::check_status(&url, response)?;
        Ok(())
    }
}
