use std::error::Error as StdError;

use serde::{Deserialize, Serialize};

use crate::domain::{
    ApiKey, Domain, FailureKind, OutboundMessage, SendFailure, SendResult, SentMessage,
};

/// Path of the single-message send endpoint, relative to the account host.
pub const SEND_PATH: &str = "/sms/2/text/advanced";

const AUTHORIZATION_SCHEME: &str = "App";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains no messages")]
    NoMessages,
}

/// Wire body for `POST /sms/2/text/advanced`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPayload {
    pub messages: Vec<PayloadMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadMessage {
    pub destinations: Vec<PayloadDestination>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadDestination {
    pub to: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendJsonResponse {
    #[serde(default)]
    bulk_id: Option<String>,
    messages: Vec<MessageJsonResult>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageJsonResult {
    message_id: String,
    status: MessageJsonStatus,
    #[serde(default)]
    to: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageJsonStatus {
    name: String,
    group_name: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorJsonResponse {
    request_error: RequestErrorJson,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestErrorJson {
    service_exception: ServiceExceptionJson,
}

#[derive(Debug, Clone, Deserialize)]
struct ServiceExceptionJson {
    text: String,
}

pub fn build_url(domain: &Domain) -> String {
    format!("https://{}{SEND_PATH}", domain.as_str())
}

pub fn build_headers(api_key: &ApiKey) -> Vec<(String, String)> {
    vec![
        ("Content-Type".to_owned(), "application/json".to_owned()),
        (
            "Authorization".to_owned(),
            format!("{AUTHORIZATION_SCHEME} {}", api_key.as_str()),
        ),
    ]
}

pub fn build_request_body(message: &OutboundMessage) -> RequestPayload {
    RequestPayload {
        messages: vec![PayloadMessage {
            destinations: vec![PayloadDestination {
                to: message.destination().raw().to_owned(),
            }],
            text: message.text().as_str().to_owned(),
            from: message.from().map(|from| from.as_str().to_owned()),
        }],
    }
}

/// Map an HTTP response (any status) to a [`SendResult`].
pub fn normalize_response(status: u16, body: &str) -> SendResult {
    if (200..=299).contains(&status) {
        return match decode_send_json_response(body) {
            Ok(sent) => SendResult::Sent(sent),
            Err(err) => SendResult::Failed(SendFailure {
                kind: FailureKind::MalformedResponse,
                error_message: format!("malformed provider response: {err}"),
                error_details: serde_json::from_str(body).ok(),
            }),
        };
    }

    let kind = FailureKind::Provider {
        http_status: status,
    };
    let fallback = format!("request failed with status code {status}");
    let Ok(details) = serde_json::from_str::<serde_json::Value>(body) else {
        return SendResult::Failed(SendFailure {
            kind,
            error_message: fallback,
            error_details: None,
        });
    };

    let error_message = serde_json::from_value::<ErrorJsonResponse>(details.clone())
        .map(|parsed| parsed.request_error.service_exception.text)
        .unwrap_or(fallback);

    SendResult::Failed(SendFailure {
        kind,
        error_message,
        error_details: Some(details),
    })
}

/// Map a failure that produced no HTTP response to a [`SendResult`].
pub fn normalize_transport_error(err: &dyn StdError) -> SendResult {
    SendResult::Failed(SendFailure {
        kind: FailureKind::Transport,
        error_message: err.to_string(),
        error_details: None,
    })
}

fn decode_send_json_response(json: &str) -> Result<SentMessage, TransportError> {
    let parsed: SendJsonResponse = serde_json::from_str(json)?;
    let first = parsed
        .messages
        .into_iter()
        .next()
        .ok_or(TransportError::NoMessages)?;

    Ok(SentMessage {
        message_id: first.message_id,
        status: first.status.name,
        category: first.status.group_name,
        description: first.status.description,
        to: first.to,
        bulk_id: parsed.bulk_id,
    })
}
