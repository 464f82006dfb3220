// src/handlers/chat.rs
use crate::middleware::auth::auth_middleware;
use crate::models::auth::ErrorResponse;
use crate::models::chat::{
    AskRequest, ChatMessageRequest, ChatMessageResponse, ChatSession, CreateSessionRequest,
};
use crate::sessions::{ChatError, SessionManager, SessionTarget};
use crate::AppState;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::sync::Arc;

pub fn chat_routes() -> Router {
    let admin_routes = Router::new()
        .route("/api/ai/chat/sessions", get(list_chat_sessions))
        .route_layer(axum::middleware::from_fn(auth_middleware));

    Router::new()
        .route("/api/ai/chat/sessions", post(create_chat_session))
        .route(
            "/api/ai/chat/sessions/:session_id",
            get(get_chat_session).delete(delete_chat_session),
        )
        .route(
            "/api/ai/chat/sessions/:session_id/messages",
            post(add_message_to_existing_session),
        )
        .route("/api/ai/chat/message", post(add_message_to_session))
        .route("/api/ai/ask", post(ai_ask))
        .merge(admin_routes)
}

fn error_response(err: ChatError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        ChatError::MissingQuestion | ChatError::InvalidSessionId => StatusCode::BAD_REQUEST,
        ChatError::SessionNotFound => StatusCode::NOT_FOUND,
        ChatError::NotConfigured
        | ChatError::Provider(_)
        | ChatError::Database(_)
        | ChatError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    match &err {
        ChatError::Provider(e) => tracing::error!("Completion provider failure: {}", e),
        ChatError::Database(e) => tracing::error!("Session store failure: {}", e),
        _ => {}
    }

    (
        status,
        Json(ErrorResponse {
            success: false,
            message: err.to_string(),
        }),
    )
}

async fn create_chat_session(
    Extension(state): Extension<Arc<AppState>>,
    payload: Option<Json<CreateSessionRequest>>,
) -> Result<(StatusCode, Json<ChatSession>), (StatusCode, Json<ErrorResponse>)> {
    let metadata = payload
        .and_then(|Json(body)| body.metadata)
        .unwrap_or_else(|| json!({}));

    let session = SessionManager::new(state.db_pool.clone())
        .create_session(metadata)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(session)))
}

async fn get_chat_session(
    Path(session_id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<ChatSession>, (StatusCode, Json<ErrorResponse>)> {
    let session = SessionManager::new(state.db_pool.clone())
        .get_session(&session_id)
        .await
        .map_err(error_response)?;

    Ok(Json(session))
}

async fn delete_chat_session(
    Path(session_id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    SessionManager::new(state.db_pool.clone())
        .delete_session(&session_id)
        .await
        .map_err(error_response)?;

    Ok(Json(json!({ "message": "Session deleted" })))
}

/// Admin-only listing of every conversation, most recently active first.
async fn list_chat_sessions(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<ChatSession>>, (StatusCode, Json<ErrorResponse>)> {
    let sessions = SessionManager::new(state.db_pool.clone())
        .list_sessions()
        .await
        .map_err(error_response)?;

    Ok(Json(sessions))
}

/// Unified chat endpoint. Without a conversation_id a new session is created
/// implicitly; with one, the exchange is appended to the existing history.
async fn add_message_to_session(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<ChatMessageRequest>,
) -> Result<Json<ChatMessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let target = match payload.conversation_id {
        Some(id) => SessionTarget::Existing(id),
        None => SessionTarget::new_conversation(),
    };
    respond_to_question(&state, target, &payload.question).await
}

/// Legacy alias: the session id arrives in the path instead of the body.
async fn add_message_to_existing_session(
    Path(session_id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<ChatMessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    respond_to_question(&state, SessionTarget::Existing(session_id), &payload.question).await
}

/// Legacy endpoint: every question starts its own session.
async fn ai_ask(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<ChatMessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    respond_to_question(&state, SessionTarget::legacy_question(), &payload.question).await
}

async fn respond_to_question(
    state: &AppState,
    target: SessionTarget,
    question: &str,
) -> Result<Json<ChatMessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let outcome = SessionManager::new(state.db_pool.clone())
        .ask(state.groq_client.as_ref(), target, question)
        .await
        .map_err(error_response)?;

    Ok(Json(ChatMessageResponse {
        answer: outcome.answer,
        conversation_id: outcome.conversation_id.to_string(),
        user_message: outcome.user_message,
        bot_message: outcome.bot_message,
    }))
}
