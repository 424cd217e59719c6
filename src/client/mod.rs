//! 表单客户端
//!
//! 把四个表单字段提交给生成接口，并用一个显式的状态枚举记录结果。
//! 浏览器页面（`web`）与命令行工具共享同一套状态语义。

mod form;

pub use form::{
    ClientError, FormClient, FormFields, FormState, CONNECT_ERROR_MESSAGE,
    FALLBACK_ERROR_MESSAGE,
};
