use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::value::StatusGroup;

/// Outcome of a send attempt that got past input validation.
///
/// Serializes to the flat record shape `{"success": true, "messageId", "status", "category"}`
/// or `{"success": false, "errorMessage", "errorDetails"?}`.
#[derive(Debug, Clone, PartialEq)]
pub enum SendResult {
    Sent(SentMessage),
    Failed(SendFailure),
}

impl SendResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent(_))
    }

    pub fn sent(&self) -> Option<&SentMessage> {
        match self {
            Self::Sent(sent) => Some(sent),
            Self::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&SendFailure> {
        match self {
            Self::Sent(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub message_id: String,
    /// Provider status name, e.g. `PENDING_ACCEPTED`.
    pub status: String,
    /// Provider status group name, e.g. `PENDING`.
    pub category: String,
    pub description: Option<String>,
    pub to: Option<String>,
    pub bulk_id: Option<String>,
}

impl SentMessage {
    pub fn known_category(&self) -> Option<StatusGroup> {
        StatusGroup::from_name(&self.category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The provider answered with a non-2xx HTTP status.
    Provider { http_status: u16 },
    /// No HTTP response was received (DNS, connect, TLS, timeout).
    Transport,
    /// A 2xx response whose body did not have the expected shape.
    MalformedResponse,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendFailure {
    pub kind: FailureKind,
    pub error_message: String,
    /// Full provider error body, when one was returned as JSON.
    pub error_details: Option<serde_json::Value>,
}

impl Serialize for SendResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Sent(sent) => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("messageId", &sent.message_id)?;
                map.serialize_entry("status", &sent.status)?;
                map.serialize_entry("category", &sent.category)?;
                map.end()
            }
            Self::Failed(failure) => {
                let len = if failure.error_details.is_some() { 3 } else { 2 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("errorMessage", &failure.error_message)?;
                if let Some(details) = failure.error_details.as_ref() {
                    map.serialize_entry("errorDetails", details)?;
                }
                map.end()
            }
        }
    }
}
