use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wasteless_chat::{AssistantClient, ChatEndpoint};

/// Mock WasteLess backend for exercising the HTTP client.
pub struct MockBackend {
    server: MockServer,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn client(&self) -> AssistantClient {
        AssistantClient::new(ChatEndpoint::new(self.server.uri()))
    }

    pub async fn mock_greeting(&self, greeting: &str) {
        Mock::given(method("GET"))
            .and(path("/api/chat/greeting"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "greeting": greeting
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_greeting_error(&self) {
        Mock::given(method("GET"))
            .and(path("/api/chat/greeting"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": "greeting generation failed"
            })))
            .mount(&self.server)
            .await;
    }

    /// Expect a chat request with exactly this body; answer with the given
    /// reply and session id, plus the extra fields the real backend sends.
    pub async fn mock_chat(
        &self,
        expect_message: &str,
        expect_session_id: Option<&str>,
        response: &str,
        session_id: &str,
    ) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(json!({
                "message": expect_message,
                "session_id": expect_session_id
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "response": response,
                "session_id": session_id,
                "data_used": { "products": ["Milk"] }
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_chat_error(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": "assistant unavailable"
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_chat_malformed(&self) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_health(&self) {
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "message": "EcoPredict API is running"
            })))
            .mount(&self.server)
            .await;
    }
}
