//! API 路由模块

mod generate;
mod health;
mod page;

pub use generate::generate_routes;
pub use health::health_routes;
pub use page::page_routes;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(page_routes())
        .merge(generate_routes())
        .with_state(state)
}

/// 创建完整应用（路由 + CORS + 请求追踪）
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(create_api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
