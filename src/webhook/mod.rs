//! Webhook handlers for external integrations
//!
//! ## Modules
//!
//! - [`whatsapp`] - Inbound customer messages relayed from WhatsApp, and
//!   everything the bot sends back through the WhatsApp Cloud API

pub mod routes;
pub mod whatsapp;
