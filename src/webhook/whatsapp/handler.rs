//! # WhatsApp Webhook Handler
//!
//! Routes one inbound message: validate it, pick the menu reply, then send
//! the reply to the customer and a copy of the original text to the admin.
//!
//! Every customer message must reach a human, so the admin copy is sent for
//! every valid message, not only when the customer asks for an agent. Both
//! sends run concurrently and are awaited before the webhook is answered;
//! a failure on either leg fails the whole request.

use super::{
    client::{DispatchError, ImplMessageDispatcher},
    composer,
    menu::MenuOption,
    outgoing_schemas::WhatsAppMessageResponse,
    schemas::WebhookPayload,
};
use crate::metric;
use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum RouterError {
    /// `from` or `message` missing or empty, nothing was sent
    #[display("invalid payload, must include 'from' and 'message'")]
    InvalidPayload,
    /// At least one of the two sends failed
    #[display("failed to dispatch message: {_0}")]
    Dispatch(DispatchError),
}

/// Result of a fully delivered inbound message
#[derive(Debug)]
pub struct InboundOutcome {
    pub option: MenuOption,
    pub reply: WhatsAppMessageResponse,
    pub forward: WhatsAppMessageResponse,
}

/// Text the admin receives for every inbound message
pub fn admin_forward_text(from: &str, text: &str) -> String {
    format!("User {from} sent: \"{text}\"")
}

/// Handles an inbound webhook payload
///
/// # Arguments
///
/// * `payload` - The raw webhook body
/// * `dispatcher` - Client used to send both messages
/// * `admin_wa_id` - WhatsApp ID receiving the forwarded copy
///
/// # Returns
///
/// The resolved option and both provider responses, or the first failure
#[tracing::instrument(skip_all)]
pub async fn handle_inbound(
    payload: WebhookPayload,
    dispatcher: &ImplMessageDispatcher,
    admin_wa_id: &str,
) -> Result<InboundOutcome, RouterError> {
    let Some(inbound) = payload.into_inbound() else {
        logfire::warn!("Invalid payload. Must include 'from' and 'message'.");
        return Err(RouterError::InvalidPayload);
    };

    logfire::info!(
        "Received message from {from}: {text}",
        from = inbound.from.clone(),
        text = inbound.text.clone()
    );

    let option = MenuOption::resolve(&inbound.text);
    metric::incr_menu_option_statds(option.as_str());

    let reply = composer::compose_text(&inbound.from, option.reply_text());
    let forward = composer::compose_text(
        admin_wa_id,
        &admin_forward_text(&inbound.from, &inbound.text),
    );

    let (reply_result, forward_result) =
        futures::join!(dispatcher.send(&reply), dispatcher.send(&forward));

    if let Err(e) = &reply_result {
        logfire::error!(
            "Failed to reply to {from}: {error}",
            from = inbound.from.clone(),
            error = e.to_string()
        );
    }
    if let Err(e) = &forward_result {
        logfire::error!(
            "Failed to forward message from {from} to admin: {error}",
            from = inbound.from.clone(),
            error = e.to_string()
        );
    }

    let reply = reply_result.map_err(RouterError::Dispatch)?;
    let forward = forward_result.map_err(RouterError::Dispatch)?;

    tracing::info!(option = option.as_str(), "replied and forwarded to admin");

    Ok(InboundOutcome {
        option,
        reply,
        forward,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{
        consts,
        webhook::whatsapp::{
            client::MockMessageDispatcher,
            outgoing_schemas::{OutgoingMessage, WhatsAppMessageStatus},
        },
    };

    pub(crate) const ADMIN: &str = "15550000000";
    const USER: &str = "15551234567";

    pub(crate) fn ok_response(id: &str) -> WhatsAppMessageResponse {
        WhatsAppMessageResponse {
            messaging_product: "whatsapp".to_string(),
            contacts: vec![],
            messages: vec![WhatsAppMessageStatus { id: id.to_string() }],
        }
    }

    fn payload(from: Option<&str>, message: Option<&str>) -> WebhookPayload {
        WebhookPayload {
            from: from.map(String::from),
            message: message.map(String::from),
        }
    }

    fn is_reply(message: &OutgoingMessage, body: &str) -> bool {
        message.to == USER && message.text_body() == Some(body)
    }

    fn is_admin_copy(message: &OutgoingMessage, text: &str) -> bool {
        message.to == ADMIN && message.text_body() == Some(admin_forward_text(USER, text).as_str())
    }

    #[ntex::test]
    async fn test_invalid_payload_sends_nothing() {
        for invalid in [
            payload(None, Some("1")),
            payload(Some(USER), None),
            payload(None, None),
            payload(Some(""), Some("1")),
            payload(Some(USER), Some("")),
        ] {
            let mut mock = MockMessageDispatcher::new();
            mock.expect_send().never();
            let dispatcher: ImplMessageDispatcher = Box::new(mock);

            let result = handle_inbound(invalid, &dispatcher, ADMIN).await;
            assert!(matches!(result, Err(RouterError::InvalidPayload)));
        }
    }

    #[ntex::test]
    async fn test_buy_option_replies_and_forwards() {
        let mut mock = MockMessageDispatcher::new();
        mock.expect_send()
            .withf(|m| is_reply(m, consts::BUY_TEXT))
            .times(1)
            .returning(|_| Ok(ok_response("wamid.reply")));
        mock.expect_send()
            .withf(|m| m.to == ADMIN && m.text_body() == Some("User 15551234567 sent: \"2\""))
            .times(1)
            .returning(|_| Ok(ok_response("wamid.forward")));
        let dispatcher: ImplMessageDispatcher = Box::new(mock);

        let outcome = handle_inbound(payload(Some(USER), Some("2")), &dispatcher, ADMIN)
            .await
            .unwrap();

        assert_eq!(outcome.option, MenuOption::Buy);
        assert_eq!(outcome.reply.message_id(), Some("wamid.reply"));
        assert_eq!(outcome.forward.message_id(), Some("wamid.forward"));
    }

    #[ntex::test]
    async fn test_every_branch_sends_exactly_two_messages() {
        let cases = [
            (" Start ", consts::MENU_TEXT),
            ("1", consts::LISTINGS_TEXT),
            ("3", consts::SELL_TEXT),
            ("4", consts::AGENT_TEXT),
            ("FAQS", consts::FAQS_TEXT),
            ("hello", consts::FALLBACK_TEXT),
            ("6", consts::FALLBACK_TEXT),
        ];

        for (text, expected_reply) in cases {
            let mut mock = MockMessageDispatcher::new();
            mock.expect_send()
                .withf(move |m| is_reply(m, expected_reply))
                .times(1)
                .returning(|_| Ok(ok_response("wamid.reply")));
            mock.expect_send()
                .withf(move |m| is_admin_copy(m, text))
                .times(1)
                .returning(|_| Ok(ok_response("wamid.forward")));
            let dispatcher: ImplMessageDispatcher = Box::new(mock);

            let result = handle_inbound(payload(Some(USER), Some(text)), &dispatcher, ADMIN).await;
            assert!(result.is_ok(), "{text:?}");
        }
    }

    #[ntex::test]
    async fn test_reply_failure_fails_request_without_retry() {
        let mut mock = MockMessageDispatcher::new();
        mock.expect_send()
            .withf(|m| m.to == USER)
            .times(1)
            .returning(|_| {
                Err(DispatchError::Provider {
                    status: 500,
                    body: "internal".to_string(),
                })
            });
        mock.expect_send()
            .withf(|m| m.to == ADMIN)
            .times(1)
            .returning(|_| Ok(ok_response("wamid.forward")));
        let dispatcher: ImplMessageDispatcher = Box::new(mock);

        let result = handle_inbound(payload(Some(USER), Some("1")), &dispatcher, ADMIN).await;

        assert!(matches!(
            result,
            Err(RouterError::Dispatch(DispatchError::Provider { status: 500, .. }))
        ));
    }

    #[ntex::test]
    async fn test_admin_forward_failure_fails_request() {
        let mut mock = MockMessageDispatcher::new();
        mock.expect_send()
            .withf(|m| m.to == USER)
            .times(1)
            .returning(|_| Ok(ok_response("wamid.reply")));
        mock.expect_send()
            .withf(|m| m.to == ADMIN)
            .times(1)
            .returning(|_| Err(DispatchError::Transport("connection reset".to_string())));
        let dispatcher: ImplMessageDispatcher = Box::new(mock);

        let result = handle_inbound(payload(Some(USER), Some("menu")), &dispatcher, ADMIN).await;

        assert!(matches!(
            result,
            Err(RouterError::Dispatch(DispatchError::Transport(_)))
        ));
    }

    #[test]
    fn test_admin_forward_text_keeps_raw_message() {
        assert_eq!(
            admin_forward_text("15551234567", " Menu "),
            "User 15551234567 sent: \" Menu \""
        );
    }
}
