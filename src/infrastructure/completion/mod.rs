//! 文本补全能力接口
//!
//! 聊天服务只依赖 [`CompletionClient`]，具体实现（OpenAI 兼容 HTTP 接口或测试桩）
//! 在启动时注入。

use async_trait::async_trait;

pub mod openai;

pub use openai::OpenAiClient;

/// 一次补全请求：一条系统指令加一条用户消息
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_message: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response contained no completion")]
    EmptyResponse,

    #[error("{0}")]
    Other(String),
}

/// 外部文本补全能力
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// 同步完成一次请求，返回生成的文本
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
