//! Double-submit-cookie CSRF scheme.
//!
//! The token endpoint sets a `csrftoken` cookie and echoes the same value in
//! the response body. Protected write requests must send the cookie back
//! together with an `X-CSRFToken` header carrying the same value. Nothing is
//! stored server side.

use crate::error::AppError;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "x-csrftoken";

/// 32 lowercase hex characters.
pub fn issue_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Check that the cookie and header tokens are both present and equal.
pub fn verify(jar: &CookieJar, headers: &HeaderMap) -> Result<(), AppError> {
    let cookie_token = jar
        .get(CSRF_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| AppError::Forbidden("CSRF cookie missing".into()))?;
    let header_token = headers
        .get(CSRF_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Forbidden("CSRF token missing".into()))?;
    if cookie_token != header_token {
        return Err(AppError::Forbidden("CSRF token incorrect".into()));
    }
    Ok(())
}
