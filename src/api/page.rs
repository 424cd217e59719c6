//! 表单页面与选项端点

use axum::{response::Html, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::OptionsResponse;
use crate::state::AppState;
use crate::web::render_index_page;

/// 首页
async fn index() -> Html<String> {
    Html(render_index_page())
}

/// 表单下拉选项
async fn options() -> Json<OptionsResponse> {
    Json(OptionsResponse::new())
}

/// 创建页面路由
pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/api/options", get(options))
}
