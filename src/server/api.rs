use crate::agent::RelayAgent;
use std::sync::Arc;
use axum::{
    routing::post,
    Router,
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::{ HeaderMap, StatusCode },
    response::IntoResponse,
};
use serde::{ Deserialize, Serialize };
use tower_http::cors::{ Any, CorsLayer };
use tower_http::services::ServeDir;
use log::error;

/// Session used when the client does not name one.
const DEFAULT_SESSION: &str = "default";

#[derive(Deserialize)]
pub struct InitializeRequest {
    pub language: String,
    pub level: String,
    pub context: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionRequest {
    pub transcribed_text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text_to_translate: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    pub assistant_reply: String,
}

#[derive(Clone)]
struct AppState {
    agent: Arc<RelayAgent>,
}

pub fn build_router(agent: Arc<RelayAgent>, pages_dir: &str, static_dir: &str) -> Router {
    let app_state = AppState { agent };

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/initializeConversation", post(initialize_conversation_handler))
        .route("/sendTranscription", post(send_transcription_handler))
        .route("/sendTranslation", post(send_translation_handler))
        .route("/clearConversation", post(clear_conversation_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback_service(ServeDir::new(pages_dir).append_index_html_on_directories(true))
        .layer(cors)
        .with_state(app_state)
}

/// Clients holding separate conversations send an X-Session-Id header;
/// everyone else shares the default session. An empty header value counts
/// as absent.
fn session_id(headers: &HeaderMap) -> &str {
    headers
        .get("x-session-id")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_SESSION)
}

async fn initialize_conversation_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<InitializeRequest>, JsonRejection>
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "Invalid initialization request").into_response();
        }
    };

    match
        state.agent.initialize_conversation(
            session_id(&headers),
            &req.language,
            &req.level,
            &req.context
        ).await
    {
        Ok(reply) => Json(ReplyResponse { assistant_reply: reply }).into_response(),
        Err(e) => {
            error!("Failed to initialize conversation: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error processing initialization request",
            ).into_response()
        }
    }
}

async fn send_transcription_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<TranscriptionRequest>, JsonRejection>
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "Invalid transcription request").into_response();
        }
    };

    match state.agent.process_message(session_id(&headers), &req.transcribed_text).await {
        Ok(reply) => Json(ReplyResponse { assistant_reply: reply }).into_response(),
        Err(e) => {
            error!("Failed to relay transcription: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error processing transcribed text").into_response()
        }
    }
}

async fn send_translation_handler(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "Invalid translation request").into_response();
        }
    };

    match state.agent.translate(&req.text_to_translate).await {
        Ok(reply) => Json(ReplyResponse { assistant_reply: reply }).into_response(),
        Err(e) => {
            error!("Failed to translate text: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error processing translated text").into_response()
        }
    }
}

async fn clear_conversation_handler(
    State(state): State<AppState>,
    headers: HeaderMap
) -> impl IntoResponse {
    state.agent.clear(session_id(&headers)).await;
    StatusCode::OK
}
