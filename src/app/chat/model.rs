//! 聊天请求与响应

use serde::{Deserialize, Serialize};

/// 任意字符串（包括空串）都会原样转发给补全服务
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
