use crate::validation::FieldViolation;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{error, warn};

pub type ApiResult<T> = Result<T, ApiError>;

/// Error payload returned by every endpoint.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

/// Either a plain message or the list of rejected fields.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldViolation>),
}

/// An error already classified for the HTTP boundary.
///
/// Slices convert their own error enums into this type; it is the only place where
/// failures are mapped to status codes.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: ErrorDetail,
}

impl ApiError {
    /// 422 with one entry per rejected field.
    #[must_use]
    pub const fn validation(violations: Vec<FieldViolation>) -> Self {
        Self { status: StatusCode::UNPROCESSABLE_ENTITY, detail: ErrorDetail::Fields(violations) }
    }

    /// 500 carrying the underlying cause for diagnostics.
    pub fn internal(detail: impl Into<Cow<'static, str>>) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    pub fn with_status(status: StatusCode, detail: impl Into<Cow<'static, str>>) -> Self {
        Self { status, detail: ErrorDetail::Message(detail.into().into_owned()) }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub const fn detail(&self) -> &ErrorDetail {
        &self.detail
    }
}

/// Body decoding failures keep axum's classification: 400 for malformed JSON,
/// 415 for a missing content type, 422 for missing or mistyped fields.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::with_status(rejection.status(), rejection.body_text())
    }
}

impl From<crate::server::ApiStateError> for ApiError {
    fn from(err: crate::server::ApiStateError) -> Self {
        Self::internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "Request failed");
        } else {
            warn!(status = %self.status, detail = ?self.detail, "Request rejected");
        }

        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.expect("read body").to_bytes();
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn validation_errors_list_fields() {
        let response = ApiError::validation(vec![
            FieldViolation::new("name", "must not be empty"),
            FieldViolation::new("email", "must be a valid email address"),
        ])
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["detail"][0]["field"], "name");
        assert_eq!(body["detail"][1]["field"], "email");
    }

    #[tokio::test]
    async fn internal_errors_carry_a_message() {
        let response = ApiError::internal("Failed to save message: connection refused").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "Failed to save message: connection refused");
    }
}
