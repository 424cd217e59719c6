//! 集成测试共用工具：桩提供方与服务启动

#![allow(dead_code)]

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use content_genius::api::create_app;
use content_genius::config::AppConfig;
use content_genius::state::create_shared_state;

/// 桩提供方收到的请求
#[derive(Clone, Default)]
pub struct ProviderLog {
    pub requests: Arc<Mutex<Vec<Value>>>,
}

impl ProviderLog {
    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<Value> {
        self.requests.lock().unwrap().last().cloned()
    }
}

/// 桩提供方的应答方式
#[derive(Clone)]
pub enum ProviderReply {
    /// 返回两个 choice，第一个为给定文本
    Choices(&'static str),
    /// 返回指定状态码
    Status(StatusCode),
}

#[derive(Clone)]
struct ProviderState {
    log: ProviderLog,
    reply: ProviderReply,
}

async fn chat_completions(
    State(state): State<ProviderState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.log.requests.lock().unwrap().push(body);
    match state.reply {
        ProviderReply::Choices(text) => (
            StatusCode::OK,
            Json(json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "choices": [
                    { "index": 0, "message": { "role": "assistant", "content": text }, "finish_reason": "stop" },
                    { "index": 1, "message": { "role": "assistant", "content": "second choice" }, "finish_reason": "stop" }
                ]
            })),
        ),
        ProviderReply::Status(status) => (
            status,
            Json(json!({ "error": { "message": "provider exploded", "type": "server_error" } })),
        ),
    }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// 启动 OpenAI 兼容的桩提供方，返回其 base_url
pub async fn spawn_provider(reply: ProviderReply) -> (String, ProviderLog) {
    let log = ProviderLog::default();
    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(ProviderState {
            log: log.clone(),
            reply,
        });
    let addr = serve(app).await;
    (format!("http://{}", addr), log)
}

/// 一个没有服务监听的地址
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// 用给定的提供方地址构建应用配置
pub fn test_config(provider_base_url: &str) -> AppConfig {
    AppConfig {
        api_key: "sk-test-key".to_string(),
        base_url: provider_base_url.to_string(),
        port: 0,
        ..AppConfig::default()
    }
}

/// 启动完整的 ContentGenius 服务，返回其根地址
pub async fn spawn_app(config: AppConfig) -> String {
    let app = create_app(create_shared_state(config));
    let addr = serve(app).await;
    format!("http://{}", addr)
}
