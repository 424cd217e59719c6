//! 表单页面渲染
//!
//! 页面模板编译进二进制，下拉选项由 `Tone` / `Platform` 生成。

use crate::client::{CONNECT_ERROR_MESSAGE, FALLBACK_ERROR_MESSAGE};
use crate::models::{ChoiceOption, Platform, Tone};

const INDEX_TEMPLATE: &str = include_str!("index.html");

/// 生成接口路径
pub const GENERATE_POST_PATH: &str = "/api/generate-post";

/// 渲染首页
pub fn render_index_page() -> String {
    INDEX_TEMPLATE
        .replace("{{TONE_OPTIONS}}", &render_options(&Tone::options()))
        .replace("{{PLATFORM_OPTIONS}}", &render_options(&Platform::options()))
        .replace("{{ENDPOINT}}", GENERATE_POST_PATH)
        .replace("{{FALLBACK_ERROR}}", FALLBACK_ERROR_MESSAGE)
        .replace("{{CONNECT_ERROR}}", CONNECT_ERROR_MESSAGE)
}

fn render_options(options: &[ChoiceOption]) -> String {
    options
        .iter()
        .map(|o| {
            format!(
                "      <option value=\"{}\">{}</option>",
                escape_html(o.value),
                escape_html(o.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// HTML 转义
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Twitter (Tweet)"), "Twitter (Tweet)");
        assert_eq!(escape_html("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_index_page_renders_all_choices() {
        let page = render_index_page();
        assert!(!page.contains("{{"));
        assert!(page.contains("<option value=\"enthusiastic\">Enthusiastic</option>"));
        assert!(page.contains("<option value=\"Twitter Tweet\">Twitter (Tweet)</option>"));
        assert!(page.contains("fetch('/api/generate-post'"));
        assert!(page.contains("Copy to Clipboard"));
        assert!(page.contains(CONNECT_ERROR_MESSAGE));
    }
}
