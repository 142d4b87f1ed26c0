//! Contact message routes
//!
//! The public contact form appends to the stored message list; everything
//! else is admin inbox management behind `RequireAuth`. List updates are
//! read-modify-write over the whole document, so concurrent editors race
//! and the last write wins (accepted for single-operator usage).

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use tracing::{debug, info};

use folio_content::{
    CONTACT_MESSAGES_KEY, ContactMessage, validate::validate_new_message,
};
use folio_store::{read_record, write_record};

use crate::error::ApiError;
use crate::state::AppState;

use super::auth::RequireAuth;
use super::types::{NewMessageRequest, UpdateMessagesRequest, UpdateMessagesResponse};

async fn load_messages(state: &AppState) -> Result<Vec<ContactMessage>, ApiError> {
    Ok(read_record(state.store.as_ref(), CONTACT_MESSAGES_KEY)
        .await?
        .unwrap_or_default())
}

async fn save_messages(
    state: &AppState,
    messages: &[ContactMessage],
) -> Result<(), ApiError> {
    write_record(state.store.as_ref(), CONTACT_MESSAGES_KEY, &messages, None).await?;
    Ok(())
}

/// POST /api/contact (public)
async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<NewMessageRequest>,
) -> Result<(StatusCode, Json<ContactMessage>), ApiError> {
    validate_new_message(&request.name, &request.email, &request.message)?;

    let message = ContactMessage::new(
        request.name,
        request.email,
        request.subject,
        request.message,
    );

    let mut messages = load_messages(&state).await?;
    // Newest first, so the admin inbox reads top-down.
    messages.insert(0, message.clone());
    save_messages(&state, &messages).await?;

    info!("Received contact message {}", message.id);
    metrics::counter!("folio_contact_messages_total").increment(1);

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/messages
async fn list_messages(
    _auth: RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    let mut messages = load_messages(&state).await?;
    // Submissions land at the front already, but the stored document may
    // have been written by another tool; order by timestamp regardless.
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(messages))
}

/// PATCH /api/messages/status
///
/// Bulk update. If any id is unknown the whole batch is rejected and
/// nothing is written.
async fn update_messages(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Json(request): Json<UpdateMessagesRequest>,
) -> Result<Json<UpdateMessagesResponse>, ApiError> {
    if request.ids.is_empty() {
        return Err(ApiError::BadRequest("ids must not be empty".to_string()));
    }
    if request.status.is_none() && request.important.is_none() {
        return Err(ApiError::BadRequest(
            "at least one of status or important is required".to_string(),
        ));
    }

    let mut messages = load_messages(&state).await?;

    for id in &request.ids {
        if !messages.iter().any(|m| &m.id == id) {
            return Err(ApiError::BadRequest(format!("Unknown message id: {}", id)));
        }
    }

    let mut updated = 0;
    for message in messages.iter_mut() {
        if request.ids.contains(&message.id) {
            if let Some(status) = request.status {
                message.status = status;
            }
            if let Some(important) = request.important {
                message.is_important = important;
            }
            updated += 1;
        }
    }

    save_messages(&state, &messages).await?;

    debug!("Updated {} messages", updated);
    Ok(Json(UpdateMessagesResponse {
        success: true,
        updated,
    }))
}

/// DELETE /api/messages/{id}
async fn delete_message(
    _auth: RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut messages = load_messages(&state).await?;

    let before = messages.len();
    messages.retain(|m| m.id != id);
    if messages.len() == before {
        return Err(ApiError::NotFound(format!("Message: {}", id)));
    }

    save_messages(&state, &messages).await?;

    info!("Deleted contact message {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Create contact message routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/contact", post(submit_message))
        .route("/api/messages", get(list_messages))
        .route("/api/messages/status", patch(update_messages))
        .route("/api/messages/{id}", delete(delete_message))
}
