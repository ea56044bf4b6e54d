//! # FY'S PROPERTY WhatsApp Bot
//!
//! Main entry point for the webhook responder.
//! Loads configuration, configures telemetry, serves the webhook and alerts
//! the admin once the server is listening.

pub mod config;
pub mod consts;
pub mod errors;
pub mod metric;
pub mod server;
pub mod webhook;

use logfire::config::MetricsOptions;
use ntex::web;
use webhook::whatsapp::{client::WhatsAppClient, notifier};

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration
    let app_config = config::AppConfig::load()?;

    // Initialize logging and metrics
    let mut logfire_config = logfire::configure()
        .install_panic_handler()
        .with_metrics(Some(MetricsOptions::default()))
        .send_to_logfire(logfire::config::SendToLogfire::IfTokenPresent);
    if let Some(token) = &app_config.logfire_token {
        logfire_config = logfire_config.with_token(token);
    }
    let shutdown_handler = logfire_config.finish()?;

    let whatsapp_client = WhatsAppClient::new(&app_config);

    configure_and_run_server(app_config, whatsapp_client).await?;

    shutdown_handler.shutdown()?;

    Ok(())
}

/// Creates application state from the provided services
fn create_app_state(
    app_config: &config::AppConfig,
    whatsapp_client: WhatsAppClient,
) -> server::AppState {
    server::AppState::new(app_config, Box::new(whatsapp_client))
}

/// Binds the web server, fires the startup alert, then serves until shutdown
async fn configure_and_run_server(
    app_config: config::AppConfig,
    whatsapp_client: WhatsAppClient,
) -> anyhow::Result<()> {
    let server_addr = (
        app_config.web_server_host.clone(),
        app_config.web_server_port,
    );

    let state_config = app_config.clone();
    let state_client = whatsapp_client.clone();
    let http_server = web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .state(create_app_state(&state_config, state_client.clone()))
            .configure(webhook::routes::whatsapp)
            .service(server::index)
            .default_service(web::route().to(server::serve_not_found))
    })
    .bind(server_addr)?;

    logfire::info!(
        "Server is running on port {port}",
        port = i64::from(app_config.web_server_port)
    );

    // Best effort: the outcome is logged and counted by the notifier
    ntex::rt::spawn(async move {
        let _ = notifier::notify_startup(
            &whatsapp_client,
            app_config.startup_notice,
            &app_config.admin_wa_id,
            app_config.web_server_port,
        )
        .await;
    });

    http_server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
