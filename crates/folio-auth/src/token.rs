//! Opaque token generation and transport

use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, COOKIE};

use crate::error::AuthError;

/// Name of the admin session cookie
pub const SESSION_COOKIE: &str = "admin-session";

/// Generate a fresh session token: 32 random bytes, hex-encoded to 64
/// characters. Collision probability is cryptographically negligible and
/// not otherwise guarded.
pub fn generate_token() -> Result<String, AuthError> {
    let mut buf = [0u8; 32];
    getrandom::getrandom(&mut buf).map_err(|e| AuthError::TokenGeneration(e.to_string()))?;
    Ok(hex::encode(buf))
}

/// Pull a session token out of request headers.
///
/// The `admin-session` cookie wins; an `Authorization: Bearer` header is
/// the fallback for non-browser clients.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = parse_cookie(headers, SESSION_COOKIE) {
        return Some(token);
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    for part in raw.split(';') {
        let part = part.trim();
        if let Some((key, value)) = part.split_once('=')
            && key == name
        {
            return Some(value.to_string());
        }
    }
    None
}

/// Build the `Set-Cookie` value issued on login.
pub fn session_cookie(token: &str, secure: bool, max_age_seconds: u64) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        SESSION_COOKIE, token, max_age_seconds
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build the `Set-Cookie` value that clears the session cookie on logout.
pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie = format!(
        "{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0",
        SESSION_COOKIE
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
