//! LLM 类型定义

use serde::{Deserialize, Serialize};

/// 聊天消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 角色：system, user
    pub role: String,
    /// 消息内容
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// 聊天选项
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatOptions {
    /// 温度参数
    pub temperature: Option<f64>,
    /// 最大 token 数
    pub max_tokens: Option<u32>,
}

/// 一次补全的结果（取自第一个 choice）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatCompletion {
    /// 生成的文本
    pub content: String,
    /// 完成原因
    pub finish_reason: Option<String>,
    /// 提供方返回的 choice 数量
    pub choice_count: usize,
}

/// LLM 错误类型
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP 请求错误
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 配置错误
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// JSON 解析错误
    #[error("failed to parse provider response: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 响应中没有可用的 choice
    #[error("provider returned no completion choices")]
    EmptyResponse,
}

impl LlmError {
    /// 错误及其完整的 source 链，用于服务端日志
    ///
    /// reqwest 的 Display 不含底层原因（如连接被拒绝），需要沿 source 展开。
    pub fn detail(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        message
    }
}
