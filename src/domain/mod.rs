//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{AccountConfig, OutboundMessage};
pub use response::{FailureKind, SendFailure, SendResult, SentMessage};
pub use validation::{ValidationError, require_non_empty};
pub use value::{ApiKey, Destination, Domain, MessageText, PhoneNumber, SenderId, StatusGroup};
