//! 数据库基础设施

use sqlx::{
    pool::PoolOptions,
    sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Error,
};
use std::{str::FromStr, time::Duration};

/// SQLite 连接池句柄，由启动流程显式创建后传给各个存储
#[derive(Clone)]
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn new(database_url: &str) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if is_in_memory(database_url) {
            in_memory_pool_options()
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(8))
        };

        let pool = pool_options.connect_with(options).await?;

        Ok(Self { pool })
    }

    pub async fn in_memory() -> Result<Self, Error> {
        let pool = in_memory_pool_options().connect("sqlite::memory:").await?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// 内存库在最后一个连接关闭时即被销毁，因此固定保留一个永不回收的连接
fn in_memory_pool_options() -> PoolOptions<Sqlite> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://shop?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://./ecommerce.db?mode=rwc"));
    }

    #[tokio::test]
    async fn test_memory_url_pins_a_single_connection() {
        let db = DatabaseManager::new("sqlite::memory:").await.unwrap();
        let options = db.get_pool().options();

        assert_eq!(options.get_max_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }

    #[tokio::test]
    async fn test_memory_url_keeps_data_between_queries() {
        let db = DatabaseManager::new("sqlite::memory:").await.unwrap();
        let pool = db.get_pool();

        sqlx::query("CREATE TABLE t (v INTEGER)").execute(pool).await.unwrap();
        sqlx::query("INSERT INTO t (v) VALUES (7)").execute(pool).await.unwrap();

        let (v,): (i64,) = sqlx::query_as("SELECT v FROM t").fetch_one(pool).await.unwrap();
        assert_eq!(v, 7);
    }
}
