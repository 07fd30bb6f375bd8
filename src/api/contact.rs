//! Contact-form endpoints: submit a message, list stored messages.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use serde_json::Value;
use tracing::{info, warn};

use super::{helpers, state::AppState};
use crate::core::{models::ContactMessage, validation::validate_contact};
use crate::errors::ApiError;

pub const SENT_MESSAGE: &str = "Message sent successfully";

/// `POST /api/contact`
///
/// # Errors
///
/// 400 when the body is not JSON or breaks a validation rule; nothing is
/// stored in that case.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload.map_err(|e| {
        warn!("Rejected contact body: {}", e.body_text());
        ApiError::BadRequest(format!("Invalid request body: {}", e.body_text()))
    })?;

    let candidate = validate_contact(&body).inspect_err(|e| {
        warn!(error = %e, "Contact submission failed validation");
    })?;

    #[cfg(feature = "debug-logs")]
    info!("Contact submission: {:?}", candidate);

    let stored = state
        .storage
        .create_contact_message(candidate)
        .await
        .map_err(|e| ApiError::storage("Failed to store message", e))?;

    info!(message_id = stored.id, "Stored contact message");
    Ok(helpers::message_response(StatusCode::CREATED, SENT_MESSAGE))
}

/// `GET /api/contact`
///
/// # Errors
///
/// 401 when an admin token is configured and the request does not carry it,
/// 500 when the store cannot be read.
pub async fn list_contacts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    if let Some(expected) = &state.config.contact_admin_token {
        if !helpers::token_matches(helpers::bearer_token(&headers), expected) {
            warn!("Contact listing refused: missing or wrong admin token");
            return Err(ApiError::Unauthorized);
        }
    }

    let messages = state
        .storage
        .list_contact_messages()
        .await
        .map_err(|e| ApiError::storage("Failed to retrieve messages", e))?;

    Ok(Json(messages))
}
