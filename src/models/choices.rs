//! 表单中的封闭选项：语气与目标平台

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 选项解析失败
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}', expected one of: {expected}")]
pub struct ParseChoiceError {
    kind: &'static str,
    value: String,
    expected: String,
}

/// 前端下拉框使用的选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// 期望语气
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Enthusiastic,
    Informative,
    Humorous,
    Professional,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Enthusiastic,
        Tone::Informative,
        Tone::Humorous,
        Tone::Professional,
        Tone::Friendly,
    ];

    /// 发送给接口的取值
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Enthusiastic => "enthusiastic",
            Tone::Informative => "informative",
            Tone::Humorous => "humorous",
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Enthusiastic => "Enthusiastic",
            Tone::Informative => "Informative",
            Tone::Humorous => "Humorous",
            Tone::Professional => "Professional",
            Tone::Friendly => "Friendly",
        }
    }

    pub fn options() -> Vec<ChoiceOption> {
        Self::ALL
            .iter()
            .map(|t| ChoiceOption {
                value: t.as_str(),
                label: t.label(),
            })
            .collect()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseChoiceError {
                kind: "tone",
                value: s.to_string(),
                expected: Self::ALL.map(Tone::as_str).join(", "),
            })
    }
}

/// 目标平台
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    LinkedIn,
    InstagramCaption,
    TwitterTweet,
    FacebookPost,
    TikTokScriptIdea,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::LinkedIn,
        Platform::InstagramCaption,
        Platform::TwitterTweet,
        Platform::FacebookPost,
        Platform::TikTokScriptIdea,
    ];

    /// 发送给接口的取值，会原样写入提示词
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::InstagramCaption => "Instagram Caption",
            Platform::TwitterTweet => "Twitter Tweet",
            Platform::FacebookPost => "Facebook Post",
            Platform::TikTokScriptIdea => "TikTok Script Idea",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::TwitterTweet => "Twitter (Tweet)",
            other => other.as_str(),
        }
    }

    /// 命令行中使用的短名
    pub fn slug(self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::InstagramCaption => "instagram",
            Platform::TwitterTweet => "twitter",
            Platform::FacebookPost => "facebook",
            Platform::TikTokScriptIdea => "tiktok",
        }
    }

    pub fn options() -> Vec<ChoiceOption> {
        Self::ALL
            .iter()
            .map(|p| ChoiceOption {
                value: p.as_str(),
                label: p.label(),
            })
            .collect()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParseChoiceError;

    /// 同时接受接口取值（"Twitter Tweet"）和短名（"twitter"）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(needle) || p.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseChoiceError {
                kind: "platform",
                value: s.to_string(),
                expected: Self::ALL.map(Platform::slug).join(", "),
            })
    }
}
