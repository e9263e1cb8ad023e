use std::sync::Arc;

use shop_assistant::{
    app::{
        catalog::{default_catalog, CatalogStore},
        chat::ChatService,
    },
    create_router,
    infrastructure::{completion::OpenAiClient, database::DatabaseManager, logger::Logger},
    AppConfig, AppState,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    Logger::init("info");

    info!("Starting shop assistant server...");

    let db = DatabaseManager::new(&config.database_url)
        .await
        .map_err(|e| {
            error!("Failed to open database: {}", e);
            e
        })?;

    let catalog = CatalogStore::new(&db);
    catalog.initialize_schema().await?;
    catalog.seed_if_empty(&default_catalog()).await?;

    let completion = Arc::new(OpenAiClient::from_config(&config));
    let chat_service = ChatService::new(catalog.clone(), completion);
    let state = AppState::new(chat_service, catalog, config.static_dir.clone());

    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Shop assistant running on http://{}", addr);
    info!("📊 Available endpoints:");
    info!("   GET    /           - Landing page");
    info!("   POST   /chat       - Product recommendations");
    info!("   GET    /health     - Health check");
    info!("   GET    /static/*   - Static assets");
    info!("💡 Example request:");
    info!(
        "   curl -X POST http://{}/chat -H 'Content-Type: application/json' -d '{{\"message\":\"I need headphones\"}}'",
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
