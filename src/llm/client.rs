//! LLM 客户端

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use super::openai::complete_openai;
use super::types::{ChatCompletion, ChatMessage, ChatOptions, LlmError};

/// 文本生成提供方
///
/// 处理器只依赖这个 trait，测试中可替换为桩实现。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        model: &str,
        options: ChatOptions,
    ) -> Result<ChatCompletion, LlmError>;
}

/// OpenAI 兼容的 LLM 客户端
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::ConfigError("API Key is required".to_string()));
        }

        // 不设置超时，沿用传输层默认值
        let client = Client::builder()
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        model: &str,
        options: ChatOptions,
    ) -> Result<ChatCompletion, LlmError> {
        info!("LLM request: model={}, messages={}", model, messages.len());
        complete_openai(
            &self.client,
            &self.api_key,
            &self.base_url,
            messages,
            model,
            &options,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let err = LlmClient::new("", "https://api.openai.com").err().unwrap();
        assert!(matches!(err, LlmError::ConfigError(_)));
    }

    #[test]
    fn test_new_accepts_any_base_url() {
        assert!(LlmClient::new("sk-test", "http://127.0.0.1:9").is_ok());
    }
}
