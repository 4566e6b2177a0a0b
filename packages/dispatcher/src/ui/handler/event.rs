//! Message creation event endpoint.
//!
//! `POST /events/chat-rooms/{chat_room_id}/messages/{message_id}` with the created
//! document as JSON. Failures answer 5xx so the delivering platform can retry.
//! Bodies that are not a valid document, including missing ids, answer 400 with
//! the same JSON error body.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::{
        conversion::message_created_event,
        http::{DispatchResponseDto, ErrorResponseDto, MessageDocumentDto},
    },
    ui::state::AppState,
};

type ErrorResponse = (StatusCode, Json<ErrorResponseDto>);

fn error_response(status: StatusCode, error: impl ToString) -> ErrorResponse {
    (
        status,
        Json(ErrorResponseDto {
            error: error.to_string(),
        }),
    )
}

/// Handle a newly created chat message
pub async fn handle_message_created(
    State(state): State<Arc<AppState>>,
    Path((chat_room_id, message_id)): Path<(String, String)>,
    document: Result<Json<MessageDocumentDto>, JsonRejection>,
) -> Result<Json<DispatchResponseDto>, ErrorResponse> {
    let Json(document) = document.map_err(|rejection| {
        tracing::warn!("Rejected message '{}': {}", message_id, rejection.body_text());
        error_response(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    // DTO から Domain Model への変換
    let event = message_created_event(chat_room_id, message_id.clone(), document).map_err(|e| {
        tracing::warn!("Rejected message '{}': {}", message_id, e);
        error_response(StatusCode::BAD_REQUEST, e)
    })?;

    match state.dispatch_notification_usecase.execute(event).await {
        Ok(outcome) => Ok(Json(outcome.into())),
        Err(e) => {
            tracing::error!("Failed to dispatch notification for '{}': {}", message_id, e);
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, e))
        }
    }
}
