use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing or invalid X-User-Id header")]
    Unauthorized,

    #[error(transparent)]
    Domain(#[from] larder_shared::Error),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),
}

/// Kind reported for a request the extractors could not read.
fn rejection_kind(status: StatusCode) -> &'static str {
    match status {
        StatusCode::UNPROCESSABLE_ENTITY => "validation",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "unsupported_media_type",
        StatusCode::PAYLOAD_TOO_LARGE => "payload_too_large",
        status if status.is_server_error() => "internal",
        _ => "bad_request",
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Domain(larder_shared::Error::Unknown(err))
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use larder_shared::Error;

        let (status, kind, message, details) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                self.to_string(),
                None,
            ),
            AppError::Json(rejection) => {
                let status = rejection.status();
                (status, rejection_kind(status), rejection.body_text(), None)
            }
            AppError::Query(rejection) => {
                let status = rejection.status();
                (status, rejection_kind(status), rejection.body_text(), None)
            }
            AppError::Path(rejection) => {
                let status = rejection.status();
                (status, rejection_kind(status), rejection.body_text(), None)
            }
            AppError::Domain(Error::Validate(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation",
                "input validation failed".to_owned(),
                serde_json::to_value(&errors).ok(),
            ),
            AppError::Domain(Error::User(msg)) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            AppError::Domain(err @ Error::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "not_found", err.to_string(), None)
            }
            AppError::Domain(Error::Forbidden) => (
                StatusCode::FORBIDDEN,
                "forbidden",
                "you do not have access to this resource".to_owned(),
                None,
            ),
            AppError::Domain(Error::Server(msg)) => {
                tracing::error!(error = %msg, "server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "internal server error".to_owned(),
                    None,
                )
            }
            AppError::Domain(Error::Unknown(err)) => {
                tracing::error!(error = ?err, "unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "internal server error".to_owned(),
                    None,
                )
            }
        };

        let mut body = json!({ "error": kind, "message": message });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}
