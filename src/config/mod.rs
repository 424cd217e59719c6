//! 配置模块

mod app_config;

pub use app_config::{get_config_path, load_config_from_file, AppConfig};
