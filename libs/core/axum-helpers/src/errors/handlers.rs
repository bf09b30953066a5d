use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// JSON 404, used as the router fallback and by handlers whose lookup came
/// back empty.
pub async fn not_found() -> Response {
    let code = ErrorCode::NotFound;
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(code, code.default_message())),
    )
        .into_response()
}
