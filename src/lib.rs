//! ContentGenius - 社交媒体帖子生成助手
//!
//! 一个表单页面 + 一个生成接口：接口校验字段、套用固定提示词模板、
//! 调用一次 OpenAI 兼容的补全服务并返回第一条结果。

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod web;
