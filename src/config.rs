//! 环境变量配置

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// `.env` 模板中的占位符
pub const API_KEY_PLACEHOLDER: &str = "your-openai-api-key-here";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./ecommerce.db?mode=rwc";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:9876";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR `{value}`: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 补全 API 密钥，可能为空
    pub api_key: String,
    /// 模型名称
    pub model: String,
    /// 补全 API 基础地址
    pub openai_base_url: String,
    /// SQLite 连接串
    pub database_url: String,
    /// HTTP 监听地址
    pub bind_addr: SocketAddr,
    /// 静态资源目录
    pub static_dir: PathBuf,
}

/// API 密钥状态，只由诊断工具报告，服务本身不强制
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyStatus {
    Missing,
    Placeholder,
    Configured,
}

impl AppConfig {
    /// 先加载 `.env`（若存在），再读取进程环境变量
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过任意查找函数构建配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_value = get("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        Ok(Self {
            api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            model: get("OPENAI_MODEL", DEFAULT_MODEL),
            openai_base_url: get("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            database_url: get("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_addr,
            static_dir: PathBuf::from(get("STATIC_DIR", DEFAULT_STATIC_DIR)),
        })
    }

    pub fn api_key_status(&self) -> ApiKeyStatus {
        let key = self.api_key.trim();
        if key.is_empty() {
            ApiKeyStatus::Missing
        } else if key == API_KEY_PLACEHOLDER {
            ApiKeyStatus::Placeholder
        } else {
            ApiKeyStatus::Configured
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr.port(), 9876);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.api_key_status(), ApiKeyStatus::Missing);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("BIND_ADDR", "0.0.0.0:8000"),
            ("DATABASE_URL", "sqlite::memory:"),
        ])
        .unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.api_key_status(), ApiKeyStatus::Configured);
    }

    #[test]
    fn test_placeholder_key() {
        let config = config_from(&[("OPENAI_API_KEY", API_KEY_PLACEHOLDER)]).unwrap();
        assert_eq!(config.api_key_status(), ApiKeyStatus::Placeholder);
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = config_from(&[("BIND_ADDR", "not-an-address")]).unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }
}
