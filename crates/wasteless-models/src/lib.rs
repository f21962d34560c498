//! Shared data types for the WasteLess dashboard core.
//!
//! Everything in here is plain data: inventory records, derived expiration
//! status, and chat transcript entries. Behavior lives in the
//! `wasteless-inventory` and `wasteless-chat` crates.

pub mod types;

pub use types::{ChatMessage, ExpirationStatus, InventoryItem, Role};
