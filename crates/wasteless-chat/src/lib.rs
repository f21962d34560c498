//! # wasteless-chat
//!
//! Client-side session protocol for the WasteLess assistant backend.
//!
//! Two pieces:
//!
//! - [`ChatSession`]: a pure state machine over an append-only transcript.
//!   It never performs I/O itself; exchange results are fed in and mapped to
//!   transcript entries, with fixed fallback messages on the failure path so
//!   the conversation is never left empty or broken.
//! - [`AssistantClient`]: the HTTP implementation of the [`AssistantApi`]
//!   seam, speaking plain request/response JSON to the backend's
//!   `/api/chat/greeting` and `/api/chat` endpoints.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wasteless_chat::{AssistantClient, ChatEndpoint, ChatSession};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = AssistantClient::new(ChatEndpoint::from_env());
//!     let mut session = ChatSession::new();
//!
//!     // The transcript is never left empty: on failure a fixed
//!     // fallback greeting is substituted.
//!     session.greet(&client).await;
//!
//!     session.exchange(&client, "How much milk is expiring soon?").await;
//!     for message in session.transcript() {
//!         println!("{}: {}", message.role.as_str(), message.content);
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use client::{AssistantApi, AssistantClient, AssistantReply, HealthStatus};
pub use config::{ChatEndpoint, API_URL_ENV, DEFAULT_API_URL};
pub use error::ExchangeError;
pub use session::{ChatSession, OutboundMessage, Phase, FALLBACK_ERROR_REPLY, FALLBACK_GREETING};
