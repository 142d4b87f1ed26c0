//! Request/Response DTOs

use serde::{Deserialize, Serialize};

use folio_content::MessageStatus;

// ==================== Auth Types ====================

/// Login request
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// Logout response
#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Session check response
#[derive(Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

// ==================== Contact Message Types ====================

/// Contact form submission
#[derive(Deserialize)]
pub struct NewMessageRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// Bulk message update request. At least one of `status`/`important`
/// must be present.
#[derive(Deserialize)]
pub struct UpdateMessagesRequest {
    pub ids: Vec<String>,
    #[serde(default)]
    pub status: Option<MessageStatus>,
    #[serde(default)]
    pub important: Option<bool>,
}

/// Bulk message update response
#[derive(Serialize)]
pub struct UpdateMessagesResponse {
    pub success: bool,
    pub updated: usize,
}
