//! Typed HTTP client for the todo summary API.

use crate::error::ClientError;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use todo_summary_core::{Todo, TodoId, TodoPatch};

/// Base URL used unless overridden
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Serialize)]
struct CreateTodo<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Confirmation returned by `DELETE /todos/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    /// Confirmation text
    pub message: String,
}

/// Result of `POST /summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryResponse {
    /// Confirmation text
    pub message: String,
    /// The delivered summary
    pub summary: String,
}

/// HTTP client for one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://localhost:5000/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// API root this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /todos`
    ///
    /// # Errors
    ///
    /// Returns `ClientError` for transport failures or error responses.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.send(self.client.get(self.url("/todos"))).await
    }

    /// `POST /todos`
    ///
    /// # Errors
    ///
    /// Returns `ClientError` for transport failures or error responses.
    pub async fn create_todo(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<Todo, ClientError> {
        let body = CreateTodo { title, description };
        self.send(self.client.post(self.url("/todos")).json(&body))
            .await
    }

    /// `PUT /todos/:id`
    ///
    /// # Errors
    ///
    /// Returns `ClientError` for transport failures or error responses.
    pub async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo, ClientError> {
        self.send(self.client.put(self.url(&format!("/todos/{id}"))).json(patch))
            .await
    }

    /// `DELETE /todos/:id`
    ///
    /// # Errors
    ///
    /// Returns `ClientError` for transport failures or error responses.
    pub async fn delete_todo(&self, id: TodoId) -> Result<MessageResponse, ClientError> {
        self.send(self.client.delete(self.url(&format!("/todos/{id}"))))
            .await
    }

    /// `POST /summarize`
    ///
    /// # Errors
    ///
    /// Returns `ClientError` for transport failures or error responses.
    pub async fn summarize(&self) -> Result<SummaryResponse, ClientError> {
        self.send(self.client.post(self.url("/summarize"))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes).map_or_else(
                |_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                },
                |body| body.error,
            );
            tracing::debug!(status = status.as_u16(), %message, "API error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
