//! 数据模型模块

pub mod api;
pub mod choices;

pub use api::*;
pub use choices::*;
