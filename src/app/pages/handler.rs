//! 页面处理器

use axum::{
    extract::State,
    response::{Html, Json},
};
use tracing::error;

use crate::app::AppState;
use crate::core::error::CoreError;

/// 原样返回 `index.html`
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    let path = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(Html(html)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(CoreError::NotFound(format!("{} not found", path.display())))
        }
        Err(e) => {
            error!("Failed to read {}: {}", path.display(), e);
            Err(CoreError::InternalServerError("Failed to read landing page".to_string()))
        }
    }
}

pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    let products = state.catalog.count().await.map_err(|e| {
        error!("Database error: {}", e);
        CoreError::InternalServerError("Storage failure".to_string())
    })?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "products": products,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
