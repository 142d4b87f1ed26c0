//! Authentication extractors and routes

use axum::{
    Json, Router,
    extract::{FromRef, FromRequestParts, State},
    http::{HeaderMap, StatusCode, header, request::Parts},
    response::IntoResponse,
    routing::{get, post},
};
use folio_auth::{SESSION_TTL_SECONDS, clear_session_cookie, extract_token, session_cookie};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

use super::types::{LoginRequest, LoginResponse, LogoutResponse, SessionResponse};

// ==================== Auth Extractor ====================

/// Extractor gating the protected management routes.
///
/// Carries the verified session token. Every request re-verifies against
/// the session store; decisions are never cached.
pub struct RequireAuth(pub String);

impl<S> FromRequestParts<S> for RequireAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // No token anywhere means no store lookup at all.
        let token = extract_token(&parts.headers).ok_or(ApiError::Unauthorized)?;

        if !app_state.auth.verify(&token).await? {
            return Err(ApiError::Unauthorized);
        }

        debug!("Authenticated admin request");
        Ok(RequireAuth(token))
    }
}

// ==================== Auth Routes ====================

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    debug!("Login attempt");

    let token = state.auth.login(&request.email, &request.password).await?;

    metrics::counter!("folio_logins_total").increment(1);

    let cookie = session_cookie(&token, state.secure_cookies, SESSION_TTL_SECONDS);
    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            success: true,
            token,
        }),
    ))
}

/// POST /api/auth/logout
async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(token) = extract_token(&headers) {
        state.auth.logout(&token).await?;
    }

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, clear_session_cookie(state.secure_cookies))],
        Json(LogoutResponse { success: true }),
    ))
}

/// GET /api/auth/session
async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, ApiError> {
    let authenticated = match extract_token(&headers) {
        None => false,
        Some(token) => state.auth.verify(&token).await?,
    };

    Ok(Json(SessionResponse { authenticated }))
}

/// Create auth routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/session", get(session))
}
