//! 服务层模块

mod post_service;
mod prompt_service;

pub use post_service::PostService;
pub use prompt_service::{PromptService, CTA_DIRECTIVE_PREFIX, SYSTEM_PROMPT};
