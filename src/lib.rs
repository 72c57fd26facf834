//! Typed Rust client for sending a single SMS through the Infobip `sms/2/text/advanced` API.
//!
//! The crate is split the same way throughout: a domain layer of strong types, a transport
//! layer for wire-format details, and a small client layer orchestrating the request.
//!
//! Malformed input fails loudly with a [`ValidationError`] before any I/O. Anything that goes
//! wrong once the request is issued is folded into the returned [`SendResult`].
//!
//! ```rust,no_run
//! use infobip_sms::{AccountConfig, SendResult, SmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), infobip_sms::ValidationError> {
//!     let client = SmsClient::new();
//!     let config = AccountConfig::new("xyz123.api.infobip.com", "...")?;
//!     match client.send_sms(&config, "+15551234567", "hello").await? {
//!         SendResult::Sent(sent) => println!("accepted: {}", sent.message_id),
//!         SendResult::Failed(failure) => eprintln!("failed: {}", failure.error_message),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{SmsClient, SmsClientBuilder, SmsClientError};
pub use domain::{
    AccountConfig, ApiKey, Destination, Domain, FailureKind, MessageText, OutboundMessage,
    PhoneNumber, SendFailure, SendResult, SenderId, SentMessage, StatusGroup, ValidationError,
};
pub use transport::{
    PayloadDestination, PayloadMessage, RequestPayload, build_headers, build_request_body,
    build_url, normalize_response, normalize_transport_error,
};
