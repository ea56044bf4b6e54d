//! Builders for the messages the bot sends.
//!
//! Plain text covers every menu reply. The two interactive menus exist only
//! because WhatsApp caps reply-button messages at three choices: the button
//! menu shows the first three options, the list menu shows all five.

use super::outgoing_schemas::{ButtonReply, InteractiveRow, InteractiveSection, OutgoingMessage};
use crate::consts;

pub fn compose_text(recipient: &str, text: &str) -> OutgoingMessage {
    OutgoingMessage::new_text(recipient.to_string(), text.to_string())
}

/// Reply-button menu with the first three menu entries
pub fn compose_button_menu(recipient: &str) -> OutgoingMessage {
    let buttons = consts::MENU_ENTRIES
        .iter()
        .take(consts::MAX_REPLY_BUTTONS)
        .map(|(id, title)| ButtonReply::new(id.to_string(), title.to_string()))
        .collect();

    OutgoingMessage::new_buttons(
        recipient.to_string(),
        consts::MENU_BUTTONS_BODY.to_string(),
        buttons,
    )
}

/// List menu with every menu entry in a single section
pub fn compose_list_menu(recipient: &str) -> OutgoingMessage {
    let rows = consts::MENU_ENTRIES
        .iter()
        .map(|(id, title)| InteractiveRow::new(id.to_string(), title.to_string()))
        .collect();

    OutgoingMessage::new_list(
        recipient.to_string(),
        consts::MENU_LIST_HEADER.to_string(),
        consts::MENU_LIST_BODY.to_string(),
        consts::MENU_LIST_FOOTER.to_string(),
        consts::MENU_LIST_BUTTON_LABEL.to_string(),
        vec![InteractiveSection {
            title: Some(consts::MENU_LIST_SECTION_TITLE.to_string()),
            rows,
        }],
    )
}
