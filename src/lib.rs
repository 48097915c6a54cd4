//! Typed Rust client for the Alerty ACM messaging API.
//!
//! The crate is split the same way as its API surface: a domain layer of
//! validated types, a credentials layer resolving the API key (override first,
//! then `ALERTY_ACM_API_KEY`), a transport layer for the JSON wire format, and a
//! small client layer sending one request per call.
//!
//! ```rust,no_run
//! use alerty_acm::AlertyClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), alerty_acm::AlertyError> {
//!     let client = AlertyClient::with_key("...");
//!     let response = client.send_message("11987654321", "hello").await?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod credentials;
pub mod domain;
mod transport;

pub use client::{AlertyClient, AlertyClientBuilder, AlertyError};
pub use credentials::{
    API_KEY_ENV, CredentialError, Credentials, EnvSource, KeySource, NoSource, StaticSource,
};
pub use domain::{ApiKey, ContactId, MessageText, SendMessage, ValidationError, validate_number};
