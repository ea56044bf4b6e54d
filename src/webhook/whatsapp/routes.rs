//! WhatsApp webhook endpoint handlers
//!
//! Implements the verification endpoint (GET) and the message receiver
//! (POST). The receiver answers only after both the customer reply and the
//! admin copy were sent, so the status code tells the relay whether the
//! message was fully delivered.

use super::{handler, schemas, security};
use crate::{consts, errors, server::AppState};
use ntex::{util::Bytes, web};
use serde::Deserialize;

/// Query parameters for webhook verification
///
/// Every field is optional so that an incomplete handshake is refused with
/// 403 like any other mismatch.
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    /// The mode parameter, should be "subscribe"
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    /// The verification token configured on the relay
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    /// The challenge string to echo back
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Webhook verification endpoint (GET)
///
/// # Returns
/// - 200 with the challenge string if mode and token match
/// - 403 otherwise, including a missing parameter or no configured token
#[web::get("")]
pub async fn verify(
    query: web::types::Query<VerifyQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let query = query.into_inner();

    if query.mode.as_deref() != Some("subscribe") {
        logfire::warn!(
            "Invalid mode: expected 'subscribe', got '{mode}'",
            mode = query.mode.unwrap_or_default()
        );
        return Err(errors::WebhookError::Unauthorized.into());
    }

    match (&app_state.verify_token, &query.verify_token) {
        (Some(expected), Some(given)) if expected == given => {}
        _ => {
            logfire::warn!("Invalid verify token");
            return Err(errors::WebhookError::Unauthorized.into());
        }
    }

    let Some(challenge) = query.challenge else {
        logfire::warn!("Missing hub.challenge");
        return Err(errors::WebhookError::Unauthorized.into());
    };

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body(challenge))
}

/// Webhook receiver endpoint (POST)
///
/// # Request Body
/// `{"from": "<sender number>", "message": "<text>"}`
///
/// # Returns
/// - 200 once the reply and the admin copy were both sent
/// - 400 if `from` or `message` is missing or empty
/// - 403 if signature checking is enabled and the signature is wrong
/// - 500 if either send failed
#[web::post("")]
pub async fn receive(
    req: web::HttpRequest,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    if let Some(app_secret) = &app_state.app_secret {
        let signature = req
            .headers()
            .get(consts::WHATSAPP_SIGNATURE_HEADER)
            .and_then(|value| value.to_str().ok());

        if let Err(e) = security::verify_signature(signature, &body, app_secret) {
            logfire::warn!(
                "Webhook signature verification failed: {error}",
                error = e.to_string()
            );
            return Err(errors::WebhookError::Unauthorized.into());
        }
    }

    let payload = schemas::WebhookPayload::from_slice(&body);

    let outcome =
        handler::handle_inbound(payload, &app_state.dispatcher, &app_state.admin_wa_id)
            .await
            .map_err(errors::WebhookError::from)?;

    tracing::debug!(
        option = outcome.option.as_str(),
        reply_id = outcome.reply.message_id(),
        forward_id = outcome.forward.message_id(),
        "webhook acknowledged"
    );

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OK"))
}
