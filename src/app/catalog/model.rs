//! 商品目录数据模型

use serde::{Deserialize, Serialize};

/// 已持久化的商品行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
}

/// 待插入的商品，`id` 由数据库分配
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub price: f64,
}

/// 首次启动时写入的六个商品，每个分类两个
pub fn default_catalog() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Wireless Headphones",
            description: "High-quality Bluetooth headphones with noise cancellation",
            category: "Electronics",
            price: 199.99,
        },
        NewProduct {
            name: "Smartphone",
            description: "Latest model with advanced camera and fast processor",
            category: "Electronics",
            price: 699.99,
        },
        NewProduct {
            name: "Yoga Mat",
            description: "Non-slip exercise mat perfect for yoga and fitness",
            category: "Fitness",
            price: 29.99,
        },
        NewProduct {
            name: "Resistance Bands Set",
            description: "Complete set of resistance bands for strength training",
            category: "Fitness",
            price: 24.99,
        },
        NewProduct {
            name: "Coffee Maker",
            description: "Programmable coffee maker with 12-cup capacity",
            category: "Home",
            price: 89.99,
        },
        NewProduct {
            name: "Air Purifier",
            description: "HEPA filter air purifier for clean indoor air",
            category: "Home",
            price: 149.99,
        },
    ]
}
