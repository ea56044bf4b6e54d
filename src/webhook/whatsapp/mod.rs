//! WhatsApp webhook integration module
//!
//! ## Submodules
//!
//! - [`routes`] - HTTP endpoint handlers (`GET`/`POST /webhook`)
//! - [`handler`] - Validates an inbound message, replies and forwards it to the admin
//! - [`menu`] - Maps inbound text to one of the fixed menu replies
//! - [`composer`] - Builds the text and interactive menu messages
//! - [`client`] - WhatsApp Cloud API client for sending messages
//! - [`notifier`] - Admin alert sent once the server is listening
//! - [`schemas`] - Inbound webhook body
//! - [`outgoing_schemas`] - Payloads sent to WhatsApp
//! - [`security`] - Optional `X-Hub-Signature-256` verification

pub mod client;
pub mod composer;
pub mod handler;
pub mod menu;
pub mod notifier;
pub mod outgoing_schemas;
pub mod routes;
pub mod schemas;
pub mod security;

pub use routes::{receive, verify};
