// Route exports
pub mod page;
pub mod recommend;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use crate::models::ErrorResponse;

pub use recommend::AppState;

impl error::ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ErrorResponse::invalid_input(format!("Invalid JSON: {}", err)).into()
}

/// Handle urlencoded form errors
pub fn handle_form_payload_error(err: error::UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Form payload error on {}: {}", req.path(), err);
    ErrorResponse::invalid_input(format!("Invalid form: {}", err)).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::FormConfig::default().error_handler(handle_form_payload_error))
        .route("/", web::get().to(recommend::form_page))
        .route("/", web::post().to(recommend::submit))
        .service(
            web::scope("/api/v1")
                .configure(recommend::configure),
        );
}
