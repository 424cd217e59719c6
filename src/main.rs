//! ContentGenius - Rust Backend
//!
//! 使用 axum 框架构建的后端服务，提供帖子生成接口和表单页面。

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use content_genius::api::create_app;
use content_genius::config::AppConfig;
use content_genius::state::create_shared_state;
use content_genius::utils::mask_api_key;

/// 在 Windows 上设置控制台代码页为 UTF-8
#[cfg(windows)]
fn setup_console_encoding() {
    unsafe {
        extern "system" {
            fn SetConsoleOutputCP(code_page: u32) -> i32;
            fn SetConsoleCP(code_page: u32) -> i32;
        }
        SetConsoleOutputCP(65001);
        SetConsoleCP(65001);
    }
}

#[cfg(not(windows))]
fn setup_console_encoding() {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_console_encoding();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "content_genius=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ContentGenius backend...");

    let config = AppConfig::load().context("failed to load configuration")?;
    if config.api_key_set() {
        info!(
            "Provider: base_url={}, model={}, api_key={}",
            config.base_url,
            config.model,
            mask_api_key(&config.api_key)
        );
    } else {
        warn!("OPENAI_API_KEY is not set; generation requests will fail");
    }

    let addr = config.bind_addr()?;
    let state = create_shared_state(config);
    let app = create_app(state);

    info!("Server listening on: {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
