//! Chat request handler.
//!
//! `POST /api/chat` validates the conversation, generates search results for
//! the last message, embeds them in the prompt and forwards the prompt to the
//! completion provider. One provider call per valid request; nothing is
//! stored.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use juris_core::courts::{CourtCode, parse_codes};
use juris_core::llm::CompletionRequest;
use juris_core::models::{ChatResponse, Message};
use juris_core::prompt;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::AppState;
use crate::error::{AppError, AppResult};

/// Reply used when the provider answers without any text.
pub const FALLBACK_REPLY: &str = "Desculpe, não consegui processar sua solicitação.";

/// `POST /api/chat` — answer the last message using generated search results.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(body) = payload.map_err(|e| AppError::InvalidMessages(e.body_text()))?;
    let (messages, courts) = parse_body(&body)?;

    let query = messages.last().map(|m| m.content.as_str()).unwrap_or("");
    let results = state.results.search(query, &courts).await.map_err(|e| {
        error!("result generation failed: {e}");
        AppError::from(e)
    })?;

    debug!(
        history = messages.len(),
        courts = courts.len(),
        results = results.len(),
        "assembling prompt"
    );

    let llm = &state.config.llm;
    let request = CompletionRequest {
        model: llm.model.clone(),
        messages: prompt::assemble(&messages, &results),
        temperature: llm.temperature,
        max_tokens: llm.max_tokens,
    };

    let reply = state.provider.complete(request).await.map_err(|e| {
        error!("chat completion failed: {e}");
        AppError::from(e)
    })?;

    let message = reply.unwrap_or_else(|| {
        warn!("provider returned no content, using fallback reply");
        FALLBACK_REPLY.to_string()
    });

    Ok(Json(ChatResponse {
        message,
        results: Some(results),
    }))
}

/// Pull `messages` and `courts` out of the raw body.
///
/// `messages` must be an array of `{role, content}`; `courts` may be absent,
/// `null`, or an array of catalog codes.
fn parse_body(body: &Value) -> AppResult<(Vec<Message>, Vec<CourtCode>)> {
    let raw_messages = match body.get("messages") {
        Some(v @ Value::Array(_)) => v.clone(),
        Some(_) => return Err(AppError::InvalidMessages("`messages` must be an array".into())),
        None => return Err(AppError::InvalidMessages("`messages` is required".into())),
    };
    let messages: Vec<Message> = serde_json::from_value(raw_messages)
        .map_err(|e| AppError::InvalidMessages(e.to_string()))?;

    let courts = match body.get("courts") {
        None | Some(Value::Null) => Vec::new(),
        Some(v) => {
            let raw: Vec<String> = serde_json::from_value(v.clone())
                .map_err(|e| AppError::InvalidCourts(e.to_string()))?;
            parse_codes(&raw).map_err(|e| AppError::InvalidCourts(e.to_string()))?
        }
    };

    Ok((messages, courts))
}
