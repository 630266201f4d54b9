//! Typed Rust client for the TextMagic REST API (v2).
//!
//! The crate has three layers: a domain layer of validated request types, a
//! transport layer for wire-format details (argument flattening, response
//! interpretation), and a client layer that throttles and dispatches requests.
//! Responses are returned as [`serde_json::Value`]; deletions return `true`.
//!
//! ```rust,no_run
//! use textmagic::{Pagination, SendMessage, TextmagicClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), textmagic::TextmagicError> {
//!     let client = TextmagicClient::new("username", "api-key")?;
//!     let message = SendMessage::text_to_phones("hello", ["+15550001111"])?;
//!     let sent = client.send(&message).await?;
//!     println!("sent: {sent}");
//!
//!     let recent = client.get_messages(Pagination::default()).await?;
//!     println!("recent: {recent}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_MIN_REQUEST_INTERVAL, DEFAULT_TIMEOUT, TextmagicClient,
    TextmagicClientBuilder, TextmagicError,
};
pub use domain::{
    ArgumentError, AvailableNumbers, BuyNumber, Contact, ContactList, CountryCode,
    IntoResourceId, MessageBody, MessagingStats, Pagination, Phone, PhoneNumber, ResourceId,
    SendMessage, SendMessageBuilder, SendOptions, SpendingStats, StatsGrouping, Template,
    UserInfo,
};
