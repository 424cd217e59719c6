//! LLM 模块
//!
//! 提供 OpenAI 兼容的补全客户端和可替换的 `TextGenerator` 接口。

mod client;
mod format;
mod openai;
mod types;

pub use client::{LlmClient, TextGenerator};
pub use format::{build_openai_endpoint, fix_base_url};
pub use types::*;
