use ntex::web;

/// Configures webhook routes.
///
/// These routes are public endpoints that don't require a session.
///
/// # Routes
/// - `GET /webhook` - Verification handshake
/// - `POST /webhook` - Inbound message receiver
pub fn whatsapp(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/webhook").service((super::whatsapp::verify, super::whatsapp::receive)),
    );
}
