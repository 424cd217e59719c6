//! 表单状态与提交流程

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::llm::fix_base_url;
use crate::models::{GeneratePostRequest, Platform, Tone};
use crate::web::GENERATE_POST_PATH;

/// 服务端未给出错误信息时的兜底提示
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// 无法连接服务端时的提示
pub const CONNECT_ERROR_MESSAGE: &str = "Failed to connect to the server. Please try again.";

/// 客户端构建错误
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// 表单的可观察状态
///
/// 结果与错误互斥，由枚举结构保证。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    Succeeded(String),
    Failed(String),
}

impl FormState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FormState::Loading)
    }

    /// 生成的帖子
    pub fn result(&self) -> Option<&str> {
        match self {
            FormState::Succeeded(post) => Some(post),
            _ => None,
        }
    }

    /// 错误提示
    pub fn error(&self) -> Option<&str> {
        match self {
            FormState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// 提交按钮文字
    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            "Generating..."
        } else {
            "Generate Post"
        }
    }
}

/// 表单字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub topic: String,
    pub tone: Option<Tone>,
    pub platform: Option<Platform>,
    pub call_to_action: String,
}

impl FormFields {
    /// 转为接口请求；未选择的下拉框按空值提交，由服务端拒绝
    pub fn to_request(&self) -> GeneratePostRequest {
        GeneratePostRequest {
            topic: Some(self.topic.clone()),
            tone: Some(self.tone.map(Tone::as_str).unwrap_or_default().to_string()),
            platform: Some(self.platform.map(Platform::as_str).unwrap_or_default().to_string()),
            call_to_action: Some(self.call_to_action.clone()),
        }
    }
}

/// 接口响应体，成功与失败共用
#[derive(Debug, Default, Deserialize)]
struct ReplyBody {
    post: Option<String>,
    error: Option<String>,
}

/// 表单客户端
pub struct FormClient {
    http: Client,
    endpoint: String,
    state: FormState,
}

impl FormClient {
    /// 创建客户端，`base_url` 为服务根地址
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: format!("{}{}", fix_base_url(base_url), GENERATE_POST_PATH),
            state: FormState::Idle,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// 提交表单
    pub async fn submit(&mut self, fields: &FormFields) -> &FormState {
        self.submit_with(fields, |_| {}).await
    }

    /// 提交表单，每次状态变化都通知 `observer`
    ///
    /// 占用 `&mut self`，同一客户端不会出现重叠提交。
    pub async fn submit_with<F>(&mut self, fields: &FormFields, mut observer: F) -> &FormState
    where
        F: FnMut(&FormState),
    {
        self.state = FormState::Loading;
        observer(&self.state);

        self.state = self.exchange(fields).await;
        observer(&self.state);

        &self.state
    }

    async fn exchange(&self, fields: &FormFields) -> FormState {
        let response = match self
            .http
            .post(&self.endpoint)
            .json(&fields.to_request())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Frontend fetch error: {}", e);
                return FormState::Failed(CONNECT_ERROR_MESSAGE.to_string());
            }
        };

        let status = response.status();
        let body = match response.json::<ReplyBody>().await {
            Ok(body) => body,
            Err(e) => {
                debug!("Unreadable response body: status={}, error={}", status, e);
                ReplyBody::default()
            }
        };

        if !status.is_success() {
            let message = body
                .error
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
            return FormState::Failed(message);
        }

        match body.post {
            Some(post) => FormState::Succeeded(post),
            None => FormState::Failed(FALLBACK_ERROR_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_accessors() {
        assert_eq!(FormState::default(), FormState::Idle);
        assert_eq!(FormState::Idle.submit_label(), "Generate Post");
        assert_eq!(FormState::Loading.submit_label(), "Generating...");

        let ok = FormState::Succeeded("post".to_string());
        assert_eq!(ok.result(), Some("post"));
        assert_eq!(ok.error(), None);

        let failed = FormState::Failed("boom".to_string());
        assert_eq!(failed.result(), None);
        assert_eq!(failed.error(), Some("boom"));
    }

    #[test]
    fn test_fields_to_request() {
        let fields = FormFields {
            topic: "eco product launch".to_string(),
            tone: Some(Tone::Enthusiastic),
            platform: Some(Platform::TwitterTweet),
            call_to_action: String::new(),
        };
        let req = fields.to_request();
        assert_eq!(req.tone.as_deref(), Some("enthusiastic"));
        assert_eq!(req.platform.as_deref(), Some("Twitter Tweet"));
        assert_eq!(req.call_to_action.as_deref(), Some(""));

        let unselected = FormFields::default().to_request();
        assert_eq!(unselected.tone.as_deref(), Some(""));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = FormClient::new("http://127.0.0.1:8765/").unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8765/api/generate-post");
        assert_eq!(client.state(), &FormState::Idle);
    }

    #[tokio::test]
    async fn test_unreachable_server_sets_connect_error() {
        // 绑定后立即释放端口，保证连接被拒绝
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut client = FormClient::new(&format!("http://{}", addr)).unwrap();
        let mut seen = Vec::new();
        let fields = FormFields {
            topic: "launch".to_string(),
            tone: Some(Tone::Friendly),
            platform: Some(Platform::LinkedIn),
            call_to_action: String::new(),
        };
        let state = client.submit_with(&fields, |s| seen.push(s.clone())).await.clone();

        assert_eq!(state, FormState::Failed(CONNECT_ERROR_MESSAGE.to_string()));
        assert_eq!(seen.first(), Some(&FormState::Loading));
        assert!(!client.state().is_loading());
    }
}
