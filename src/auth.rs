use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

pub const USER_HEADER: &str = "x-user-id";
const MAX_USER_ID_LEN: usize = 64;

/// Caller identity taken from the `X-User-Id` header.
///
/// Identity is asserted by whatever sits in front of the service.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser(pub String);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .ok_or(AppError::Unauthorized)?;

        if value.is_empty() || value.len() > MAX_USER_ID_LEN {
            return Err(AppError::Unauthorized);
        }

        Ok(AuthUser(value.to_owned()))
    }
}
