use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ChatEndpoint;
use crate::error::ExchangeError;

/// Request body for `POST /api/chat`. The session id is null on the first
/// exchange and echoed back on every later one.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    session_id: Option<&'a str>,
}

/// Successful answer from `POST /api/chat`. The backend also sends fields
/// like `data_used`; they are not part of this side's contract and are
/// ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
struct GreetingResponse {
    greeting: String,
}

/// Answer from `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// The seam between the chat session and the assistant backend. The REPL is
/// written against this trait so tests can script exchanges without a server.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    /// Fetch the proactively generated opening message. Called at most once
    /// per session lifetime, when the transcript is still empty.
    async fn fetch_greeting(&self) -> Result<String, ExchangeError>;

    /// One request/response exchange: no streaming, no retries, no
    /// cancellation of an in-flight call.
    async fn send_message(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<AssistantReply, ExchangeError>;
}

/// HTTP implementation of [`AssistantApi`] against the WasteLess backend.
pub struct AssistantClient {
    endpoint: ChatEndpoint,
    client: reqwest::Client,
}

impl AssistantClient {
    pub fn new(endpoint: ChatEndpoint) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &ChatEndpoint {
        &self.endpoint
    }

    /// Connectivity probe against `GET /api/health`. Not part of the chat
    /// protocol; callers treat failure as advisory.
    pub async fn health(&self) -> Result<HealthStatus, ExchangeError> {
        let response = self.client.get(self.endpoint.health_url()).send().await?;
        let body = check_status(response).await?;
        decode(&body)
    }
}

#[async_trait]
impl AssistantApi for AssistantClient {
    async fn fetch_greeting(&self) -> Result<String, ExchangeError> {
        let response = self.client.get(self.endpoint.greeting_url()).send().await?;
        let body = check_status(response).await?;
        let greeting: GreetingResponse = decode(&body)?;
        Ok(greeting.greeting)
    }

    async fn send_message(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<AssistantReply, ExchangeError> {
        let request = ChatRequest {
            message,
            session_id,
        };
        let response = self
            .client
            .post(self.endpoint.chat_url())
            .json(&request)
            .send()
            .await?;
        let body = check_status(response).await?;
        decode(&body)
    }
}

/// Map a non-success status to [`ExchangeError::Endpoint`], otherwise hand
/// back the raw body for decoding.
async fn check_status(response: reqwest::Response) -> Result<String, ExchangeError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ExchangeError::Endpoint { status, body });
    }
    Ok(body)
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ExchangeError> {
    serde_json::from_str(body).map_err(|e| ExchangeError::Malformed(e.to_string()))
}
