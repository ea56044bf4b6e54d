//! # WhatsApp API Client
//!
//! Delivers outgoing messages to the WhatsApp Cloud API. One call is one
//! HTTPS round-trip: no retries, no batching and no local timeout. Transport
//! errors and non-2xx statuses are reported through [`DispatchError`] and
//! left to the caller. Any 2xx counts as delivered, even when its body
//! cannot be read.

use super::outgoing_schemas::{OutgoingMessage, WhatsAppMessageResponse};
use crate::{config::AppConfig, metric};
use async_trait::async_trait;
use derive_more::{Display, Error};

/// Failure to deliver a message to WhatsApp
#[derive(Debug, Display, Error)]
pub enum DispatchError {
    /// The request never got a response
    #[display("failed to send request to WhatsApp API: {_0}")]
    Transport(#[error(not(source))] String),
    /// WhatsApp answered with a non-success status
    #[display("WhatsApp API returned error status {status}: {body}")]
    Provider { status: u16, body: String },
}

impl DispatchError {
    pub fn outcome(&self) -> &'static str {
        match self {
            DispatchError::Transport(_) => "transport_error",
            DispatchError::Provider { .. } => "provider_error",
        }
    }
}

/// Anything able to deliver an [`OutgoingMessage`].
///
/// The router and the startup notifier only depend on this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageDispatcher: Send + Sync {
    async fn send(
        &self,
        message: &OutgoingMessage,
    ) -> Result<WhatsAppMessageResponse, DispatchError>;
}

pub type ImplMessageDispatcher = Box<dyn MessageDispatcher>;

/// WhatsApp API client for sending messages
#[derive(Clone)]
pub struct WhatsAppClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// WhatsApp Business API endpoint for sending messages
    endpoint: String,
    /// Authentication token
    auth_token: String,
}

impl WhatsAppClient {
    pub fn new(app_config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: app_config.whatsapp_send_msg_endpoint(),
            auth_token: app_config.whatsapp_business_auth.clone(),
        }
    }

    async fn post_message(
        &self,
        message: &OutgoingMessage,
    ) -> Result<WhatsAppMessageResponse, DispatchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.auth_token))
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            return Err(DispatchError::Provider { status, body });
        }

        // The message is already accepted, an unreadable body must not fail it
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            logfire::warn!(
                "Unexpected WhatsApp API response body: {error}",
                error = e.to_string()
            );
            WhatsAppMessageResponse::default()
        }))
    }
}

#[async_trait]
impl MessageDispatcher for WhatsAppClient {
    #[tracing::instrument(skip_all, fields(to = %message.to, kind = message.kind()))]
    async fn send(
        &self,
        message: &OutgoingMessage,
    ) -> Result<WhatsAppMessageResponse, DispatchError> {
        match self.post_message(message).await {
            Ok(response) => {
                metric::incr_dispatch_statds("ok");
                logfire::info!(
                    "Message sent: {message_id}",
                    message_id = response.message_id().unwrap_or_default().to_string()
                );
                Ok(response)
            }
            Err(e) => {
                metric::incr_dispatch_statds(e.outcome());
                tracing::debug!(outcome = e.outcome(), error = %e, "dispatch failed");
                Err(e)
            }
        }
    }
}
