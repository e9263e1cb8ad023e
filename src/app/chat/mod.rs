//! 聊天：提示词拼装、补全调用与 HTTP 处理器

pub mod handler;
pub mod model;
pub mod prompt;
pub mod service;

pub use service::{ChatError, ChatService};
