use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Envelope of every successful answer of the gateway API.
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<'a, T: Serialize> {
    pub data: Option<T>,
    pub message: &'a str,
}

pub fn success<T: Serialize>(data: T, message: &str) -> (StatusCode, Json<ApiResponse<'_, T>>) {
    let body = ApiResponse {
        data: Some(data),
        message,
    };
    (StatusCode::OK, Json(body))
}

/// Body of every non-2xx answer. Laybuy failures reach it through
/// `IntoResponse for LaybuyError`.
#[derive(Serialize, Deserialize)]
pub struct ApiError<'a> {
    pub message: &'a str,
}

pub fn error(status_code: StatusCode, message: &str) -> (StatusCode, Json<ApiError<'_>>) {
    (status_code, Json(ApiError { message }))
}
