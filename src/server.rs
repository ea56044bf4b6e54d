//! Application state and handlers not linked to the webhook

use crate::{config::AppConfig, consts, errors, webhook::whatsapp::client};
use ntex::web;

/// State shared by the handlers of one server worker
pub struct AppState {
    pub dispatcher: client::ImplMessageDispatcher,
    pub admin_wa_id: String,
    pub verify_token: Option<String>,
    pub app_secret: Option<String>,
}

impl AppState {
    pub fn new(app_config: &AppConfig, dispatcher: client::ImplMessageDispatcher) -> Self {
        Self {
            dispatcher,
            admin_wa_id: app_config.admin_wa_id.clone(),
            verify_token: app_config.whatsapp_verify_token.clone(),
            app_secret: app_config.whatsapp_app_secret.clone(),
        }
    }
}

/// Liveness probe, no side effects
#[web::get("/")]
pub async fn index() -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(consts::LIVENESS_BODY))
}

/// Return a [UrlNotFound](errors::WebhookError::UrlNotFound) error for urls not defined
pub async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(errors::WebhookError::UrlNotFound.into())
}
