//! 落地页与健康检查

pub mod handler;
