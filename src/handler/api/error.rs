use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::service::laybuy::error::LaybuyError;

use super::response::ApiError;

impl IntoResponse for LaybuyError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            Self::NotConfigured { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::RefundFailed => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Transport { .. } => StatusCode::BAD_GATEWAY,
            Self::Decode { .. } => StatusCode::BAD_GATEWAY,
            Self::NotAnObject => StatusCode::BAD_GATEWAY,
            Self::InvalidPathSegment { .. } => StatusCode::BAD_REQUEST,
            Self::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status_code.is_server_error() {
            tracing::error!("laybuy request failed: {:?}", self);
        }
        (
            status_code,
            Json(ApiError {
                message: &self.to_string(),
            }),
        )
            .into_response()
    }
}
