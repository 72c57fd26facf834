//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{AccountConfig, Domain, OutboundMessage, SendResult, ValidationError};
use crate::transport::{
    RequestPayload, SEND_PATH, build_headers, build_request_body, build_url, normalize_response,
    normalize_transport_error,
};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: &'a RequestPayload,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: &'a RequestPayload,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url);
            for (name, value) in headers {
                request = request.header(name, value);
            }
            let response = request.json(body).send().await?;
            let status = response.status().as_u16();
            Ok(response_with_body(status, response.text().await))
        })
    }
}

/// Once a status line has arrived the exchange counts as answered: a body that cannot be
/// read is treated as empty so the status still drives normalization.
fn response_with_body<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> HttpResponse {
    let body = body.unwrap_or_else(|err| {
        tracing::warn!(status, error = %err, "failed to read response body");
        String::new()
    });
    HttpResponse { status, body }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned while constructing an [`SmsClient`].
///
/// Send failures are never reported through this type; see [`SendResult`].
pub enum SmsClientError {
    /// The underlying HTTP client could not be created (TLS backend, invalid settings).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Clone, Default)]
/// Builder for [`SmsClient`].
///
/// Use this when you need a request timeout or a custom user-agent. Without one the
/// client relies on the HTTP stack's defaults and never times out on its own.
pub struct SmsClientBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    insecure_http: bool,
}

impl SmsClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Talk plain `http://` to the account domain instead of `https://`.
    ///
    /// Only meant for local test servers. Available in debug builds, or in release builds
    /// with the `allow-insecure-http` feature.
    #[must_use]
    #[cfg(any(debug_assertions, feature = "allow-insecure-http"))]
    pub fn allow_insecure_http(mut self) -> Self {
        tracing::warn!(
            target: "infobip_sms::security",
            "allow_insecure_http() called - SMS traffic and API key will NOT be encrypted"
        );
        self.insecure_http = true;
        self
    }

    /// Build a [`SmsClient`].
    pub fn build(self) -> Result<SmsClient, SmsClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsClientError::Transport(Box::new(err)))?;

        Ok(SmsClient {
            insecure_http: self.insecure_http,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Sends single SMS messages through the `/sms/2/text/advanced` endpoint.
///
/// The client holds no account state: credentials travel with every call in an
/// [`AccountConfig`], so one client can serve many accounts concurrently.
///
/// Errors come in two shapes:
/// - malformed input is rejected with [`ValidationError`] before any I/O,
/// - everything that goes wrong after that (HTTP errors, provider rejections,
///   unreachable hosts, unexpected bodies) comes back as [`SendResult::Failed`].
pub struct SmsClient {
    insecure_http: bool,
    http: Arc<dyn HttpTransport>,
}

impl Default for SmsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SmsClient {
    /// Create a client with default HTTP settings.
    ///
    /// For more customization, use [`SmsClient::builder`].
    pub fn new() -> Self {
        Self {
            insecure_http: false,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> SmsClientBuilder {
        SmsClientBuilder::new()
    }

    /// Validate `destination` and `text`, then send one message.
    ///
    /// Errors:
    /// - Returns [`ValidationError::Empty`] naming `destination` or `text` when either is
    ///   empty; no request is made in that case.
    pub async fn send_sms(
        &self,
        config: &AccountConfig,
        destination: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<SendResult, ValidationError> {
        let message = OutboundMessage::parse(destination, text)?;
        Ok(self.send_message(config, &message).await)
    }

    /// Send an already validated message with a single POST. Never retries.
    pub async fn send_message(
        &self,
        config: &AccountConfig,
        message: &OutboundMessage,
    ) -> SendResult {
        let url = self.endpoint_url(config.domain());
        let body = build_request_body(message);
        let headers = build_headers(config.api_key());

        tracing::debug!(
            domain = config.domain().as_str(),
            destination = message.destination().raw(),
            "sending sms"
        );

        let result = match self.http.post_json(&url, headers, &body).await {
            Ok(response) => normalize_response(response.status, &response.body),
            Err(err) => normalize_transport_error(err.as_ref()),
        };

        match &result {
            SendResult::Sent(sent) => tracing::debug!(
                message_id = %sent.message_id,
                status = %sent.status,
                category = %sent.category,
                "sms accepted"
            ),
            SendResult::Failed(failure) => tracing::warn!(
                kind = ?failure.kind,
                error = %failure.error_message,
                "sms send failed"
            ),
        }

        result
    }

    fn endpoint_url(&self, domain: &Domain) -> String {
        if self.insecure_http {
            format!("http://{}{SEND_PATH}", domain.as_str())
        } else {
            build_url(domain)
        }
    }
}
