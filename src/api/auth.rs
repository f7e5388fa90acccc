//! HTTP Basic authentication for `/private`
//!
//! One configured credential pair; no sessions, no realms.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Extension,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::config::AuthConfig;

const NOT_AUTHENTICATED: &str = "You are not authenticated!";
const WRONG_CREDENTIALS: &str = "Wrong credentials!";

/// Axum middleware checking the `Authorization` header against `AuthConfig`.
pub async fn basic_auth(
    Extension(auth): Extension<Arc<AuthConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(value) = request.headers().get(header::AUTHORIZATION) else {
        return challenge(NOT_AUTHENTICATED);
    };

    match decode_credentials(value) {
        Some((user, password)) if user == auth.username && password == auth.password => {
            next.run(request).await
        }
        Some((user, _)) => {
            tracing::warn!(user = %user, uri = %request.uri(), "Rejected basic auth credentials");
            challenge(WRONG_CREDENTIALS)
        }
        None => {
            tracing::warn!(uri = %request.uri(), "Undecodable Authorization header");
            challenge(WRONG_CREDENTIALS)
        }
    }
}

/// `<scheme> base64(user:password)` → `(user, password)`
fn decode_credentials(value: &HeaderValue) -> Option<(String, String)> {
    let value = value.to_str().ok()?;
    let (_scheme, encoded) = value.split_once(' ')?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some((user.to_string(), password.to_string()))
}

fn challenge(message: &'static str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic")],
        message,
    )
        .into_response()
}
