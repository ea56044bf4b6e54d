use crate::webhook::whatsapp::handler::RouterError;
use derive_more::{Display, Error};
use ntex::{http, web};

/// Errors returned to webhook callers.
///
/// Provider details never reach the caller, they are logged where the
/// failure happens and the caller only sees the status code.
#[derive(Debug, Display, Error)]
pub enum WebhookError {
    #[display("Invalid payload. Must include 'from' and 'message'.")]
    InvalidPayload,
    #[display("Forbidden")]
    Unauthorized,
    #[display("Not Found")]
    UrlNotFound,
    #[display("Internal Server Error")]
    DispatchFailed,
}

impl From<RouterError> for WebhookError {
    fn from(err: RouterError) -> Self {
        match err {
            RouterError::InvalidPayload => WebhookError::InvalidPayload,
            RouterError::Dispatch(_) => WebhookError::DispatchFailed,
        }
    }
}

impl web::error::WebResponseError for WebhookError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        web::HttpResponse::build(self.status_code())
            .set_header("content-type", "text/plain; charset=utf-8")
            .body(self.to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            WebhookError::InvalidPayload => http::StatusCode::BAD_REQUEST,
            WebhookError::Unauthorized => http::StatusCode::FORBIDDEN,
            WebhookError::UrlNotFound => http::StatusCode::NOT_FOUND,
            WebhookError::DispatchFailed => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::webhook::whatsapp::client::DispatchError;
    use ntex::web::error::WebResponseError;

    #[test]
    fn test_router_errors_map_to_status_codes() {
        let invalid = WebhookError::from(RouterError::InvalidPayload);
        assert_eq!(invalid.status_code(), http::StatusCode::BAD_REQUEST);

        let dispatch = WebhookError::from(RouterError::Dispatch(DispatchError::Provider {
            status: 401,
            body: "token expired".to_string(),
        }));
        assert_eq!(
            dispatch.status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(!dispatch.to_string().contains("token expired"));
    }
}
