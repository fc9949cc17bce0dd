//! CSRF token issuance.

use crate::csrf::{issue_token, CSRF_COOKIE};
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsrfBody {
    csrf_token: String,
}

/// GET /get-csrf-token/ — sets the `csrftoken` cookie and echoes the value.
/// A client that already holds the cookie gets the same token back.
pub async fn get_csrf_token(jar: CookieJar) -> (CookieJar, Json<CsrfBody>) {
    let token = jar
        .get(CSRF_COOKIE)
        .map(|c| c.value().to_string())
        .unwrap_or_else(issue_token);
    let cookie = Cookie::build((CSRF_COOKIE, token.clone()))
        .path("/")
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), Json(CsrfBody { csrf_token: token }))
}
