use axum::http::StatusCode;
use axum_core::response::{IntoResponse as AxumCoreIntoResponse, Response};
use eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum AttestorServerError {
    #[error(transparent)]
    Unexpected(#[from] Report),
    #[error("Invalid device record: {0}")]
    BadDeviceRequest(String),
}

/// Trait implementation to convert this error into an axum http response
impl AxumCoreIntoResponse for AttestorServerError {
    fn into_response(self) -> Response {
        match self {
            bad_request_error @ AttestorServerError::BadDeviceRequest(_) => {
                (StatusCode::BAD_REQUEST, bad_request_error.to_string()).into_response()
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something wrong happened.",
            )
                .into_response(),
        }
    }
}
