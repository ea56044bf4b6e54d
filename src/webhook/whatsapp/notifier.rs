//! Startup alert sent to the admin once the server is listening.
//!
//! The alert is best effort: failures are logged and counted, never retried
//! and never propagated to the server.

use super::{
    client::{DispatchError, MessageDispatcher},
    composer,
    outgoing_schemas::{OutgoingMessage, WhatsAppMessageResponse},
};
use crate::{config::StartupNotice, consts, metric};
use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
#[display("failed to send startup alert to admin: {_0}")]
pub struct StartupNotifyError(DispatchError);

pub fn startup_alert_text(port: u16) -> String {
    format!(
        "{name} Bot is LIVE on port {port}.",
        name = consts::BUSINESS_NAME
    )
}

/// Builds the configured startup message for the admin
pub fn compose_startup_notice(
    notice: StartupNotice,
    admin_wa_id: &str,
    port: u16,
) -> OutgoingMessage {
    match notice {
        StartupNotice::Text => composer::compose_text(admin_wa_id, &startup_alert_text(port)),
        StartupNotice::Buttons => composer::compose_button_menu(admin_wa_id),
        StartupNotice::List => composer::compose_list_menu(admin_wa_id),
    }
}

/// Sends the startup notice and records the outcome.
///
/// The returned result is informational only, callers are not expected to
/// act on it.
pub async fn notify_startup(
    dispatcher: &dyn MessageDispatcher,
    notice: StartupNotice,
    admin_wa_id: &str,
    port: u16,
) -> Result<WhatsAppMessageResponse, StartupNotifyError> {
    let message = compose_startup_notice(notice, admin_wa_id, port);

    match dispatcher.send(&message).await {
        Ok(response) => {
            metric::incr_startup_notice_statds("sent");
            logfire::info!("Admin alert sent successfully.");
            Ok(response)
        }
        Err(e) => {
            let err = StartupNotifyError(e);
            metric::incr_startup_notice_statds("failed");
            logfire::error!("{error}", error = err.to_string());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhook::whatsapp::{
        client::MockMessageDispatcher,
        handler::tests::{ADMIN, ok_response},
    };

    #[test]
    fn test_startup_alert_text() {
        assert_eq!(
            startup_alert_text(3000),
            "FY'S PROPERTY Bot is LIVE on port 3000."
        );
    }

    #[test]
    fn test_compose_startup_notice_variants() {
        assert_eq!(
            compose_startup_notice(StartupNotice::Text, ADMIN, 8080).text_body(),
            Some("FY'S PROPERTY Bot is LIVE on port 8080.")
        );
        assert_eq!(
            compose_startup_notice(StartupNotice::Buttons, ADMIN, 8080).kind(),
            "button"
        );

        let list = compose_startup_notice(StartupNotice::List, ADMIN, 8080);
        assert_eq!(list.kind(), "list");
        assert_eq!(list.to, ADMIN);
    }

    #[ntex::test]
    async fn test_notify_startup_sends_once_to_admin() {
        let mut mock = MockMessageDispatcher::new();
        mock.expect_send()
            .withf(|m| m.to == ADMIN && m.kind() == "text")
            .times(1)
            .returning(|_| Ok(ok_response("wamid.alert")));

        let response = notify_startup(&mock, StartupNotice::Text, ADMIN, 3000)
            .await
            .unwrap();

        assert_eq!(response.message_id(), Some("wamid.alert"));
    }

    #[ntex::test]
    async fn test_notify_startup_failure_is_typed_and_not_retried() {
        let mut mock = MockMessageDispatcher::new();
        mock.expect_send().times(1).returning(|_| {
            Err(DispatchError::Provider {
                status: 401,
                body: "invalid token".to_string(),
            })
        });

        let err = notify_startup(&mock, StartupNotice::List, ADMIN, 3000)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("401"));
    }
}
