//! 帖子生成端点

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{GeneratePostRequest, GeneratePostResponse};
use crate::state::AppState;
use crate::utils::generate_request_id;
use crate::web::GENERATE_POST_PATH;

/// 生成社交媒体帖子
///
/// 请求体按 JSON 解析，不要求 Content-Type。解析失败与提供方失败一样返回 500。
async fn generate_post(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<GeneratePostResponse>> {
    let request_id = generate_request_id();

    let req: GeneratePostRequest = serde_json::from_slice(&body).map_err(|e| {
        error!(request_id = %request_id, "Error generating social media post: invalid request body: {}", e);
        AppError::Generation(e.to_string())
    })?;

    let brief = req.validate().map_err(|e| {
        warn!(request_id = %request_id, "Rejected post request: {}", e);
        e
    })?;

    info!(
        request_id = %request_id,
        tone = %brief.tone,
        platform = %brief.platform,
        has_cta = brief.call_to_action.is_some(),
        "Generating social media post"
    );

    let completion = state.post_service.generate(&brief).await.map_err(|e| {
        let detail = e.detail();
        error!(request_id = %request_id, "Error generating social media post: {}", detail);
        AppError::Generation(detail)
    })?;

    info!(
        request_id = %request_id,
        chars = completion.content.chars().count(),
        finish_reason = completion.finish_reason.as_deref().unwrap_or("unknown"),
        choices = completion.choice_count,
        "Post generated"
    );

    Ok(Json(GeneratePostResponse {
        post: completion.content,
    }))
}

/// 创建生成路由（仅 POST）
pub fn generate_routes() -> Router<Arc<AppState>> {
    Router::new().route(GENERATE_POST_PATH, post(generate_post))
}
