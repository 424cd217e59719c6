//! 应用配置管理
//!
//! 进程启动时加载一次：可执行文件旁的 config.json → .env → 环境变量，
//! 之后只读，通过 `AppState` 注入处理器。

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::AppError;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_MODEL: &str = "CONTENT_GENIUS_MODEL";
pub const ENV_HOST: &str = "CONTENT_GENIUS_HOST";
pub const ENV_PORT: &str = "CONTENT_GENIUS_PORT";

/// 获取配置文件路径
pub fn get_config_path() -> PathBuf {
    // 配置文件位于可执行文件同级目录
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

/// 应用配置结构体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// LLM API 密钥
    #[serde(default)]
    pub api_key: String,

    /// LLM API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,

    /// 温度参数 (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// 最大输出 token 数
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f64 {
    0.8
}

fn default_max_tokens() -> u32 {
    200
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8765
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl AppConfig {
    /// 加载进程配置
    pub fn load() -> Result<Self, AppError> {
        let path = get_config_path();
        let mut config = match load_config_from_file(&path)? {
            Some(config) => {
                info!("Loaded config file: {}", path.display());
                config
            }
            None => AppConfig::default(),
        };

        if let Ok(env_path) = dotenvy::dotenv() {
            debug!("Loaded environment file: {}", env_path.display());
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// 用环境变量覆盖配置，空值忽略
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(api_key) = get(ENV_API_KEY) {
            self.api_key = api_key;
        }
        if let Some(base_url) = get(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(model) = get(ENV_MODEL) {
            self.model = model;
        }
        if let Some(host) = get(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("invalid {}: {} ({})", ENV_PORT, port, e)))?;
        }
        Ok(())
    }

    /// 解析监听地址
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid listen address {}:{} ({})", self.host, self.port, e)))
    }

    pub fn api_key_set(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// 从文件加载配置，文件不存在时返回 None
pub fn load_config_from_file(path: &Path) -> Result<Option<AppConfig>, AppError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("failed to read {}: {}", path.display(), e)))?;
    let config = serde_json::from_str(&content)
        .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))?;
    Ok(Some(config))
}
