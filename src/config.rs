//! Application configuration management with security considerations.
//!
//! All values are read once from the environment in `main`, validated, and
//! then handed to the components that need them. Nothing below `main` reads
//! the environment.
//!
//! # Security Notes
//! - Sensitive fields are clearly marked and should never be logged
//! - Production environments should inject them from a secret manager

use anyhow::{Context, bail};
use envconfig::Envconfig;
use std::str::FromStr;

/// What the admin receives when the process starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartupNotice {
    /// Plain "bot is live" alert
    #[default]
    Text,
    /// Interactive reply-button menu
    Buttons,
    /// Interactive list menu
    List,
}

impl FromStr for StartupNotice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(StartupNotice::Text),
            "buttons" | "button" => Ok(StartupNotice::Buttons),
            "list" => Ok(StartupNotice::List),
            other => Err(format!(
                "unknown startup notice '{other}', expected text, buttons or list"
            )),
        }
    }
}

/// Application configuration with security-aware field management.
///
/// Variable names follow the ones the bot has always been deployed with
/// (`VERSION`, `PHONE_NUMBER_ID`, `ACCESS_TOKEN`, `ADMIN_WAID`, `PORT`).
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Host address for web server binding (NON-SENSITIVE)
    #[envconfig(from = "WEB_SERVER_HOST", default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(from = "PORT", default = "3000")]
    pub web_server_port: u16,

    /// Base URL of the WhatsApp Cloud API (NON-SENSITIVE)
    #[envconfig(from = "WHATSAPP_API_BASE_URL", default = "https://graph.facebook.com")]
    pub whatsapp_api_base_url: String,

    /// Graph API version, e.g. "v22.0" (NON-SENSITIVE)
    #[envconfig(from = "VERSION")]
    pub whatsapp_api_version: String,

    /// WhatsApp Business phone number ID used as sender (SEMI-SENSITIVE)
    #[envconfig(from = "PHONE_NUMBER_ID")]
    pub whatsapp_business_phone_number_id: String,

    /// 🔒 SENSITIVE: WhatsApp Business access token
    #[envconfig(from = "ACCESS_TOKEN")]
    pub whatsapp_business_auth: String,

    /// WhatsApp ID of the admin who receives alerts and forwards (SEMI-SENSITIVE)
    #[envconfig(from = "ADMIN_WAID")]
    pub admin_wa_id: String,

    /// Startup message variant: "text", "buttons" or "list" (NON-SENSITIVE)
    #[envconfig(from = "STARTUP_NOTICE", default = "text")]
    pub startup_notice: StartupNotice,

    /// 🔒 SENSITIVE: token expected by the `GET /webhook` handshake
    #[envconfig(from = "WHATSAPP_VERIFY_TOKEN")]
    pub whatsapp_verify_token: Option<String>,

    /// 🔒 SENSITIVE: app secret used to check `X-Hub-Signature-256`
    #[envconfig(from = "WHATSAPP_APP_SECRET")]
    pub whatsapp_app_secret: Option<String>,

    /// 🔒 SENSITIVE: Logfire write token, telemetry stays local without it
    #[envconfig(from = "LOGFIRE_TOKEN")]
    pub logfire_token: Option<String>,
}

impl AppConfig {
    /// Loads the configuration from the environment and validates it.
    ///
    /// Missing or blank required values are fatal at startup.
    pub fn load() -> anyhow::Result<Self> {
        let app_config = Self::init_from_env()
            .context("failed to load application configuration from environment")?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Rejects required values that are present but blank
    pub fn validate(&self) -> anyhow::Result<()> {
        let required = [
            ("VERSION", &self.whatsapp_api_version),
            ("PHONE_NUMBER_ID", &self.whatsapp_business_phone_number_id),
            ("ACCESS_TOKEN", &self.whatsapp_business_auth),
            ("ADMIN_WAID", &self.admin_wa_id),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                bail!("required configuration value {name} is empty");
            }
        }

        Ok(())
    }

    /// Constructs the WhatsApp Business API endpoint for sending messages
    pub fn whatsapp_send_msg_endpoint(&self) -> String {
        format!(
            "{base}/{version}/{id}/messages",
            base = self.whatsapp_api_base_url.trim_end_matches('/'),
            version = self.whatsapp_api_version,
            id = self.whatsapp_business_phone_number_id
        )
    }
}
