//! 聊天业务服务

use std::sync::Arc;
use tracing::{debug, error};

use super::prompt::{build_system_prompt, format_catalog_for_prompt};
use crate::app::catalog::CatalogStore;
use crate::core::error::CoreError;
use crate::infrastructure::completion::{CompletionClient, CompletionError, CompletionRequest};

pub const MAX_TOKENS: u32 = 300;
pub const TEMPERATURE: f64 = 0.7;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// 存储故障
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),

    /// 补全调用失败，原因会返回给客户端
    #[error("Error processing request: {0}")]
    Completion(#[from] CompletionError),
}

impl From<ChatError> for CoreError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Storage(e) => {
                error!("Database error: {}", e);
                CoreError::InternalServerError("Storage failure".to_string())
            }
            ChatError::Completion(e) => {
                error!("Completion error: {}", e);
                CoreError::InternalServerError(format!("Error processing request: {}", e))
            }
        }
    }
}

/// 无状态聊天服务：每次调用读一次目录、调用一次补全
#[derive(Clone)]
pub struct ChatService {
    catalog: CatalogStore,
    completion: Arc<dyn CompletionClient>,
}

impl ChatService {
    pub fn new(catalog: CatalogStore, completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            catalog,
            completion,
        }
    }

    pub async fn handle_chat(&self, user_message: &str) -> Result<String, ChatError> {
        let products = self.catalog.list_all_products().await?;
        debug!("Building prompt from {} products", products.len());

        let catalog_text = format_catalog_for_prompt(&products);
        let request = CompletionRequest {
            system_prompt: build_system_prompt(&catalog_text),
            user_message: user_message.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let text = self.completion.complete(&request).await?;
        Ok(text.trim().to_string())
    }
}
