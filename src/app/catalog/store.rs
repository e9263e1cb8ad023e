//! 商品目录存储
//!
//! 表结构显式定义在 [`SCHEMA`] 中。目录在首次启动时写入，之后只读。

use sqlx::{sqlite::SqlitePool, Error};
use tracing::info;

use super::model::{NewProduct, Product};
use crate::infrastructure::database::DatabaseManager;

/// `products` 表及索引
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT NOT NULL,
        price REAL NOT NULL CHECK (price >= 0)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_products_name ON products (name)",
    "CREATE INDEX IF NOT EXISTS ix_products_category ON products (category)",
];

#[derive(Clone)]
pub struct CatalogStore {
    pool: SqlitePool,
}

impl CatalogStore {
    pub fn new(db: &DatabaseManager) -> Self {
        Self {
            pool: db.get_pool().clone(),
        }
    }

    /// 建表，可在每次启动时重复调用
    pub async fn initialize_schema(&self) -> Result<(), Error> {
        info!("Creating database tables...");

        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        info!("Database tables ready");
        Ok(())
    }

    /// 表为空时在一个事务内写入全部 `rows`，返回是否写入。
    ///
    /// 多个进程同时首次启动时仍可能重复写入。
    pub async fn seed_if_empty(&self, rows: &[NewProduct]) -> Result<bool, Error> {
        let (exists,): (i64,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM products)")
            .fetch_one(&self.pool)
            .await?;

        if exists != 0 {
            info!("Catalog already contains products, skipping seed");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;
        for row in rows {
            sqlx::query(
                "INSERT INTO products (name, description, category, price) VALUES (?, ?, ?, ?)",
            )
            .bind(row.name)
            .bind(row.description)
            .bind(row.category)
            .bind(row.price)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        info!("Seeded catalog with {} products", rows.len());
        Ok(true)
    }

    /// 按插入顺序返回全部商品
    pub async fn list_all_products(&self) -> Result<Vec<Product>, Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, category, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn count(&self) -> Result<i64, Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
