//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

use super::choices::{ChoiceOption, Platform, Tone};
use crate::error::AppError;

/// 缺少必填字段时返回给调用方的提示
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: topic, tone, or platform";

/// 生成帖子请求
///
/// 所有字段都可缺省，校验在 [`GeneratePostRequest::validate`] 中完成。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
}

impl GeneratePostRequest {
    /// 由表单中的封闭选项构造请求
    pub fn new(
        topic: impl Into<String>,
        tone: Tone,
        platform: Platform,
        call_to_action: Option<String>,
    ) -> Self {
        Self {
            topic: Some(topic.into()),
            tone: Some(tone.as_str().to_string()),
            platform: Some(platform.as_str().to_string()),
            call_to_action,
        }
    }

    /// 校验必填字段，空字符串视为缺失
    pub fn validate(self) -> Result<PostBrief, AppError> {
        let topic = non_empty(self.topic);
        let tone = non_empty(self.tone);
        let platform = non_empty(self.platform);

        match (topic, tone, platform) {
            (Some(topic), Some(tone), Some(platform)) => Ok(PostBrief {
                topic,
                tone,
                platform,
                call_to_action: non_empty(self.call_to_action),
            }),
            _ => Err(AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// 校验通过的生成请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBrief {
    pub topic: String,
    pub tone: String,
    pub platform: String,
    /// 为 None 时提示词中不包含行动号召
    pub call_to_action: Option<String>,
}

/// 生成帖子响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePostResponse {
    pub post: String,
}

/// 错误响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 表单选项响应
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub tones: Vec<ChoiceOption>,
    pub platforms: Vec<ChoiceOption>,
}

impl OptionsResponse {
    pub fn new() -> Self {
        Self {
            tones: Tone::options(),
            platforms: Platform::options(),
        }
    }
}

impl Default for OptionsResponse {
    fn default() -> Self {
        Self::new()
    }
}
