//! 启动前自检
//!
//! 依次检查数据库、静态资源与环境变量，任一失败即以非零状态退出。

use shop_assistant::{
    app::catalog::{default_catalog, CatalogStore},
    config::{ApiKeyStatus, AppConfig},
    infrastructure::database::DatabaseManager,
};
use std::process::ExitCode;

const STATIC_FILES: &[&str] = &["index.html", "style.css", "script.js"];

async fn check_database(config: &AppConfig) -> bool {
    println!("🔍 Testing database setup...");

    let result = async {
        let db = DatabaseManager::new(&config.database_url).await?;
        let store = CatalogStore::new(&db);
        store.initialize_schema().await?;
        println!("✅ Database tables created successfully");
        store.seed_if_empty(&default_catalog()).await?;
        println!("✅ Database seeded successfully");
        Ok::<_, sqlx::Error>(store.list_all_products().await?)
    }
    .await;

    match result {
        Ok(products) => {
            println!("✅ Found {} products in database:", products.len());
            for p in &products {
                println!("   - {} ({}) - ${}", p.name, p.category, p.price);
            }
            true
        }
        Err(e) => {
            println!("❌ Database test failed: {}", e);
            false
        }
    }
}

fn check_static_files(config: &AppConfig) -> bool {
    println!("\n🔍 Testing static files...");

    let mut missing = Vec::new();
    for name in STATIC_FILES {
        let path = config.static_dir.join(name);
        if path.exists() {
            println!("✅ {} exists", path.display());
        } else {
            println!("❌ {} is missing", path.display());
            missing.push(path.display().to_string());
        }
    }

    if !missing.is_empty() {
        println!("\n❌ Missing files: {}", missing.join(", "));
        return false;
    }
    true
}

fn check_environment(config: &AppConfig) -> bool {
    println!("\n🔍 Testing environment setup...");

    match config.api_key_status() {
        ApiKeyStatus::Configured => {
            println!("✅ OpenAI API key configured");
            true
        }
        ApiKeyStatus::Missing | ApiKeyStatus::Placeholder => {
            println!("⚠️  OpenAI API key not configured");
            println!("   Please set OPENAI_API_KEY in the environment or the .env file");
            false
        }
    }
}

fn print_configuration(config: &AppConfig) {
    println!("\n🔍 Configuration:");
    println!("   bind address: {}", config.bind_addr);
    println!("   model:        {}", config.model);
    println!("   database:     {}", config.database_url);
    println!("   static dir:   {}", config.static_dir.display());
}

#[tokio::main]
async fn main() -> ExitCode {
    println!("🚀 Shop assistant setup check\n");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("❌ Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let results = [
        check_database(&config).await,
        check_static_files(&config),
        check_environment(&config),
    ];
    print_configuration(&config);

    println!("\n{}", "=".repeat(50));

    if results.iter().all(|ok| *ok) {
        println!("🎉 All checks passed! The service is ready to run.");
        println!("\nTo start the service:");
        println!("   cargo run --bin shop_assistant");
        println!("\nThen visit: http://{}", config.bind_addr);
        ExitCode::SUCCESS
    } else {
        println!("❌ Some checks failed. Please fix the issues above.");
        ExitCode::FAILURE
    }
}
