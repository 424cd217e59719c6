//! Prompt 构建服务
//!
//! 把校验后的表单字段套入固定模板，生成 system + user 两条消息。

use crate::llm::ChatMessage;
use crate::models::PostBrief;

/// 系统提示词
pub const SYSTEM_PROMPT: &str = "You are a creative social media content assistant. \
Your goal is to generate engaging and platform-appropriate social media posts. \
Ensure the post matches the requested tone and includes relevant emojis and hashtags \
where appropriate for the platform.";

/// 行动号召指令前缀
pub const CTA_DIRECTIVE_PREFIX: &str = "Encourage users to: ";

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 构建发送给提供方的消息列表
    pub fn build_post_messages(&self, brief: &PostBrief) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(self.build_user_prompt(brief)),
        ]
    }

    /// 构建用户提示词
    pub fn build_user_prompt(&self, brief: &PostBrief) -> String {
        let mut lines = vec![
            format!("Generate a social media post about: \"{}\"", brief.topic),
            String::new(),
            format!("Desired Tone: {}", brief.tone),
            format!("Target Platform: {}", brief.platform),
        ];

        if let Some(cta) = Self::cta_directive(brief.call_to_action.as_deref()) {
            lines.push(cta);
        }

        lines.push(String::new());
        lines.push("Draft Post:".to_string());
        lines.join("\n")
    }

    /// 行动号召指令，空值时不生成
    fn cta_directive(call_to_action: Option<&str>) -> Option<String> {
        call_to_action
            .filter(|cta| !cta.is_empty())
            .map(|cta| format!("{}{}.", CTA_DIRECTIVE_PREFIX, cta))
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(cta: Option<&str>) -> PostBrief {
        PostBrief {
            topic: "eco product launch".to_string(),
            tone: "enthusiastic".to_string(),
            platform: "LinkedIn".to_string(),
            call_to_action: cta.map(String::from),
        }
    }

    #[test]
    fn test_messages_are_system_then_user() {
        let messages = PromptService::new().build_post_messages(&brief(None));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
    }

    #[test]
    fn test_user_prompt_interpolates_fields() {
        let prompt = PromptService::new().build_user_prompt(&brief(None));
        assert!(prompt.contains("Generate a social media post about: \"eco product launch\""));
        assert!(prompt.contains("Desired Tone: enthusiastic"));
        assert!(prompt.contains("Target Platform: LinkedIn"));
        assert!(prompt.ends_with("Draft Post:"));
    }

    #[test]
    fn test_no_cta_directive_without_call_to_action() {
        let service = PromptService::new();
        assert!(!service.build_user_prompt(&brief(None)).contains(CTA_DIRECTIVE_PREFIX));
        assert!(!service.build_user_prompt(&brief(Some(""))).contains(CTA_DIRECTIVE_PREFIX));
    }

    #[test]
    fn test_single_cta_directive_names_value_verbatim() {
        let cta = "Visit our website: https://example.com/eco?ref=li";
        let prompt = PromptService::new().build_user_prompt(&brief(Some(cta)));
        assert_eq!(prompt.matches(CTA_DIRECTIVE_PREFIX).count(), 1);
        assert!(prompt.contains(&format!("Encourage users to: {}.", cta)));
    }
}
