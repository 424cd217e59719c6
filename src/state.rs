//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。启动时构建一次，之后只读。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::PostService;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    /// 进程配置
    pub config: Arc<AppConfig>,
    /// 帖子生成服务
    pub post_service: Arc<PostService>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(config: AppConfig, post_service: PostService) -> Self {
        Self {
            config: Arc::new(config),
            post_service: Arc::new(post_service),
        }
    }
}

/// 根据配置创建可共享的应用状态
pub fn create_shared_state(config: AppConfig) -> Arc<AppState> {
    let post_service = PostService::from_config(&config);
    Arc::new(AppState::new(config, post_service))
}
