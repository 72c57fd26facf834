use crate::domain::validation::ValidationError;
use crate::domain::value::{ApiKey, Destination, Domain, MessageText, PhoneNumber, SenderId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-call account settings: the account's API host and its key.
pub struct AccountConfig {
    domain: Domain,
    api_key: ApiKey,
}

impl AccountConfig {
    /// Validate both parts; the domain is checked first.
    pub fn new(
        domain: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            domain: Domain::new(domain)?,
            api_key: ApiKey::new(api_key)?,
        })
    }

    pub fn from_parts(domain: Domain, api_key: ApiKey) -> Self {
        Self { domain, api_key }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One message to one destination.
pub struct OutboundMessage {
    destination: Destination,
    text: MessageText,
    from: Option<SenderId>,
}

impl OutboundMessage {
    pub fn new(destination: Destination, text: MessageText) -> Self {
        Self {
            destination,
            text,
            from: None,
        }
    }

    /// Address a number already normalized to E.164.
    pub fn to_phone_number(phone: PhoneNumber, text: MessageText) -> Self {
        Self::new(phone.into(), text)
    }

    /// Validate raw input; the destination is checked before the text.
    pub fn parse(
        destination: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(Destination::new(destination)?, MessageText::new(text)?))
    }

    /// Send from a specific sender id instead of the account default.
    pub fn with_sender(mut self, from: SenderId) -> Self {
        self.from = Some(from);
        self
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn from(&self) -> Option<&SenderId> {
        self.from.as_ref()
    }
}
