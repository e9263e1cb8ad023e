//! 应用层

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::core::middleware::request_logging_middleware;

pub mod catalog;
pub mod chat;
pub mod pages;

use catalog::CatalogStore;
use chat::ChatService;

#[derive(Clone)]
pub struct AppState {
    pub chat_service: ChatService,
    pub catalog: CatalogStore,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(chat_service: ChatService, catalog: CatalogStore, static_dir: PathBuf) -> Self {
        Self {
            chat_service,
            catalog,
            static_dir,
        }
    }
}

/// 创建路由
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(pages::handler::index))
        .route("/chat", post(chat::handler::chat))
        .route("/health", get(pages::handler::health_check))
        .nest_service("/static", static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware)),
        )
        .with_state(state)
}
