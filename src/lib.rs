//! # 商品推荐聊天服务
//!
//! 分层结构：
//! - `app`: 应用层，商品目录、聊天、页面
//! - `core`: 核心层，错误处理与中间件
//! - `infrastructure`: 基础设施层，数据库、日志、补全 API 客户端
//! - `config`: 环境变量配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{create_router, AppState};
pub use config::AppConfig;
