//! # WhatsApp Outgoing Message Schemas
//!
//! Payloads sent to the WhatsApp Cloud API `/messages` endpoint.
//!
//! Every payload shares the same envelope (`messaging_product`,
//! `recipient_type`, `to`) and carries exactly one content shape:
//! plain text, an interactive reply-button message or an interactive list.
//! The shapes form a closed enum, so the `type` discriminators written on
//! the wire always agree with the populated object.

use crate::consts;
use serde::{Deserialize, Serialize};

/// Message to send to WhatsApp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    /// Messaging product, always "whatsapp"
    pub messaging_product: String,
    /// Recipient type, always "individual"
    pub recipient_type: String,
    /// Recipient's WhatsApp ID (phone number)
    pub to: String,
    /// Content, serialized as `type` plus the type-specific object
    #[serde(flatten)]
    pub content: MessageContent,
}

impl OutgoingMessage {
    fn with_content(to: String, content: MessageContent) -> Self {
        Self {
            messaging_product: consts::WHATSAPP_MESSAGING_PRODUCT.to_string(),
            recipient_type: consts::WHATSAPP_RECIPIENT_TYPE.to_string(),
            to,
            content,
        }
    }

    /// Creates a new text message
    pub fn new_text(to: String, body: String) -> Self {
        Self::with_content(
            to,
            MessageContent::Text {
                text: OutgoingTextContent { body },
            },
        )
    }

    /// Creates a new interactive reply-button message.
    ///
    /// WhatsApp renders at most three reply buttons, buttons past the
    /// third are dropped.
    pub fn new_buttons(to: String, body: String, buttons: Vec<ButtonReply>) -> Self {
        let buttons = buttons
            .into_iter()
            .take(consts::MAX_REPLY_BUTTONS)
            .map(ReplyButton::new)
            .collect();

        Self::with_content(
            to,
            MessageContent::Interactive {
                interactive: InteractiveContent::Button {
                    body: InteractiveBody { text: body },
                    action: ButtonAction { buttons },
                },
            },
        )
    }

    /// Creates a new interactive list message.
    ///
    /// WhatsApp accepts at most ten rows across all sections. Rows past the
    /// limit are dropped and sections left without rows are removed.
    pub fn new_list(
        to: String,
        header: String,
        body: String,
        footer: String,
        button_label: String,
        sections: Vec<InteractiveSection>,
    ) -> Self {
        let mut remaining = consts::MAX_LIST_ROWS;
        let sections = sections
            .into_iter()
            .filter_map(|mut section| {
                section.rows.truncate(remaining);
                remaining -= section.rows.len();
                (!section.rows.is_empty()).then_some(section)
            })
            .collect();

        Self::with_content(
            to,
            MessageContent::Interactive {
                interactive: InteractiveContent::List {
                    header: InteractiveHeader {
                        header_type: "text".to_string(),
                        text: header,
                    },
                    body: InteractiveBody { text: body },
                    footer: InteractiveFooter { text: footer },
                    action: ListAction {
                        button: button_label,
                        sections,
                    },
                },
            },
        )
    }

    /// Body of a text message, `None` for interactive messages
    pub fn text_body(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text { text } => Some(&text.body),
            MessageContent::Interactive { .. } => None,
        }
    }

    /// Short name of the payload shape, used in logs and metrics
    pub fn kind(&self) -> &'static str {
        match &self.content {
            MessageContent::Text { .. } => "text",
            MessageContent::Interactive {
                interactive: InteractiveContent::Button { .. },
            } => "button",
            MessageContent::Interactive {
                interactive: InteractiveContent::List { .. },
            } => "list",
        }
    }
}

/// Type-specific content of an outgoing message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageContent {
    Text { text: OutgoingTextContent },
    Interactive { interactive: InteractiveContent },
}

/// Text content for outgoing messages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingTextContent {
    /// Message body text
    pub body: String,
}

/// Interactive content structure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InteractiveContent {
    Button {
        body: InteractiveBody,
        action: ButtonAction,
    },
    List {
        header: InteractiveHeader,
        body: InteractiveBody,
        footer: InteractiveFooter,
        action: ListAction,
    },
}

/// Interactive message header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractiveHeader {
    /// Header type (e.g., "text")
    #[serde(rename = "type")]
    pub header_type: String,
    /// Header text
    pub text: String,
}

/// Interactive message body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractiveBody {
    pub text: String,
}

/// Interactive message footer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractiveFooter {
    pub text: String,
}

/// Action of a reply-button message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonAction {
    pub buttons: Vec<ReplyButton>,
}

/// Wire form of a reply button: `{"type": "reply", "reply": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyButton {
    #[serde(rename = "type")]
    pub button_type: String,
    pub reply: ButtonReply,
}

impl ReplyButton {
    fn new(reply: ButtonReply) -> Self {
        Self {
            button_type: "reply".to_string(),
            reply,
        }
    }
}

/// Selectable reply button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonReply {
    /// Unique button ID, echoed back when the user taps it
    pub id: String,
    /// Button label (displayed to user)
    pub title: String,
}

impl ButtonReply {
    pub fn new(id: String, title: String) -> Self {
        Self { id, title }
    }
}

/// Action of a list message (button and sections)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListAction {
    /// Label of the button that opens the list
    pub button: String,
    /// List sections
    pub sections: Vec<InteractiveSection>,
}

/// Interactive section containing rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractiveSection {
    /// Optional section title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// List of rows in the section
    pub rows: Vec<InteractiveRow>,
}

/// Interactive row (list item)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractiveRow {
    /// Unique row ID
    pub id: String,
    /// Row title (displayed to user)
    pub title: String,
    /// Optional row description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl InteractiveRow {
    /// Creates a new interactive row
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            description: None,
        }
    }
}

/// Response from WhatsApp API when sending a message
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WhatsAppMessageResponse {
    /// Messaging product
    pub messaging_product: String,
    /// Array of contacts (recipients)
    pub contacts: Vec<WhatsAppContact>,
    /// Array of messages sent
    pub messages: Vec<WhatsAppMessageStatus>,
}

impl WhatsAppMessageResponse {
    /// Provider-assigned ID of the first accepted message
    pub fn message_id(&self) -> Option<&str> {
        self.messages.first().map(|m| m.id.as_str())
    }
}

/// Contact information in response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WhatsAppContact {
    /// WhatsApp ID of the contact
    pub wa_id: String,
    /// Input phone number
    pub input: String,
}

/// Message status in response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WhatsAppMessageStatus {
    /// Message ID
    pub id: String,
}
