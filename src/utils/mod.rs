//! 工具模块

mod request_id;

pub use request_id::{generate_request_id, mask_api_key};
