//! 帖子生成服务
//!
//! 封装文本生成提供方，与配置系统集成。进程启动时构建一次。

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::llm::{ChatCompletion, ChatOptions, LlmClient, LlmError, TextGenerator};
use crate::models::PostBrief;

use super::PromptService;

/// 帖子生成服务
pub struct PostService {
    generator: Option<Arc<dyn TextGenerator>>,
    prompts: PromptService,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl PostService {
    /// 使用给定的提供方创建服务，模型参数取自配置
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, config: &AppConfig) -> Self {
        Self {
            generator,
            prompts: PromptService::new(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// 根据配置构建 OpenAI 客户端；未配置密钥时服务仍可启动，生成请求会失败
    pub fn from_config(config: &AppConfig) -> Self {
        let generator: Option<Arc<dyn TextGenerator>> =
            match LlmClient::new(&config.api_key, &config.base_url) {
                Ok(client) => {
                    info!("LLM provider configured: base_url={}, model={}", config.base_url, config.model);
                    Some(Arc::new(client))
                }
                Err(e) => {
                    warn!("LLM provider not configured: {}", e);
                    None
                }
            };
        Self::new(generator, config)
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// 生成帖子，只调用一次提供方
    pub async fn generate(&self, brief: &PostBrief) -> Result<ChatCompletion, LlmError> {
        let generator = self.generator.as_ref().ok_or_else(|| {
            LlmError::ConfigError("API Key not configured. Set OPENAI_API_KEY.".to_string())
        })?;

        let messages = self.prompts.build_post_messages(brief);
        let options = ChatOptions {
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        };

        generator.complete(messages, &self.model, options).await
    }
}
