//! 聊天处理器

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use super::model::{ChatRequest, ChatResponse};
use crate::app::AppState;
use crate::core::error::CoreError;

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, CoreError> {
    let Json(payload) = payload?;

    let response = state.chat_service.handle_chat(&payload.message).await?;
    Ok(Json(ChatResponse { response }))
}
