use crate::domain::validation::{ValidationError, require_non_empty};

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Account-specific API host, e.g. `xyz123.api.infobip.com`.
///
/// Invariant: non-empty. No further validation or escaping is applied; the value is inserted
/// verbatim into the endpoint URL.
pub struct Domain(String);

impl Domain {
    /// Field label used in validation errors.
    pub const FIELD: &'static str = "domain";

    /// Create a validated [`Domain`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_empty(value.into(), Self::FIELD)?))
    }

    /// Borrow the validated host.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Provider API key, sent as `Authorization: App <key>`.
///
/// Invariant: non-empty. Sent exactly as given. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Field label used in validation errors.
    pub const FIELD: &'static str = "apiKey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_empty(value.into(), Self::FIELD)?))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination address as sent to the provider (`to`).
///
/// Invariant: non-empty. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`Destination`].
pub struct Destination(String);

impl Destination {
    /// Field label used in validation errors.
    pub const FIELD: &'static str = "destination";

    /// Create a validated (non-empty) destination.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_empty(value.into(), Self::FIELD)?))
    }

    /// Raw value as sent to the provider.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Destination {
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text.
///
/// Invariant: non-empty. Whitespace-only text is a valid message and is sent as is.
pub struct MessageText(String);

impl MessageText {
    /// Field label used in validation errors.
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_empty(value.into(), Self::FIELD)?))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id (`from`): an alphanumeric name or a numeric sender registered on the account.
///
/// Invariant: non-empty.
pub struct SenderId(String);

impl SenderId {
    /// Field label used in validation errors.
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self(require_non_empty(value.into(), Self::FIELD)?))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Phone number parsed and normalized to E.164 before sending.
pub struct PhoneNumber {
    e164: String,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let raw = require_non_empty(input.into(), Destination::FIELD)?;
        let parsed = phonenumber::parse(default_region, raw.trim())
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        Ok(Self {
            e164: phonenumber::format(&parsed)
                .mode(phonenumber::Mode::E164)
                .to_string(),
        })
    }

    pub fn e164(&self) -> &str {
        &self.e164
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status groups the provider reports in `status.groupName`.
pub enum StatusGroup {
    Pending,
    Undeliverable,
    Delivered,
    Expired,
    Rejected,
}

impl StatusGroup {
    /// Map a provider group name to a known group, if one exists.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PENDING" => Some(Self::Pending),
            "UNDELIVERABLE" => Some(Self::Undeliverable),
            "DELIVERED" => Some(Self::Delivered),
            "EXPIRED" => Some(Self::Expired),
            "REJECTED" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns `true` if the provider has given up on the message.
    pub fn is_final_failure(self) -> bool {
        matches!(self, Self::Undeliverable | Self::Expired | Self::Rejected)
    }
}
