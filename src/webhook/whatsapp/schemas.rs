//! # Inbound Webhook Schemas
//!
//! The relay in front of the bot posts a flattened notification,
//! `{"from": "<sender number>", "message": "<text>"}`, instead of the full
//! WhatsApp Business envelope.

use serde::Deserialize;

/// Raw webhook body as posted by the relay.
///
/// Both fields are optional here so that a body missing one of them is
/// reported as an invalid payload instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct WebhookPayload {
    /// Sender's WhatsApp ID (phone number)
    #[serde(default)]
    pub from: Option<String>,
    /// Text the sender wrote
    #[serde(default)]
    pub message: Option<String>,
}

impl WebhookPayload {
    /// Parses a raw body, anything that is not a JSON object with string
    /// fields yields an empty payload which fails validation.
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Returns the validated message when both fields are present and non-empty
    pub fn into_inbound(self) -> Option<InboundMessage> {
        match (self.from, self.message) {
            (Some(from), Some(text)) if !from.is_empty() && !text.is_empty() => {
                Some(InboundMessage { from, text })
            }
            _ => None,
        }
    }
}

/// Validated inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Sender's WhatsApp ID (phone number)
    pub from: String,
    /// Text exactly as the sender wrote it
    pub text: String,
}
