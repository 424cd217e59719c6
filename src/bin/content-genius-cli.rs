//! ContentGenius 命令行客户端
//!
//! 与网页表单相同的四个字段，提交给运行中的服务并打印生成结果。

use clap::Parser;
use std::process::ExitCode;

use content_genius::client::{FormClient, FormFields, FormState};
use content_genius::models::{Platform, Tone};

#[derive(Parser, Debug)]
#[command(name = "content-genius-cli", version, about = "Generate a social media post")]
struct Cli {
    /// Topic or keywords for the post
    #[arg(long)]
    topic: String,

    /// Desired tone: enthusiastic, informative, humorous, professional, friendly
    #[arg(long)]
    tone: Tone,

    /// Target platform: linkedin, instagram, twitter, facebook, tiktok
    #[arg(long)]
    platform: Platform,

    /// Optional call to action
    #[arg(long = "cta", default_value = "")]
    call_to_action: String,

    /// ContentGenius server address
    #[arg(long, default_value = "http://127.0.0.1:8765")]
    endpoint: String,
}

fn render(state: &FormState) {
    match state {
        FormState::Idle => {}
        FormState::Loading => eprintln!("{}", state.submit_label()),
        FormState::Succeeded(post) => println!("{}", post),
        FormState::Failed(message) => eprintln!("Error: {}", message),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut client = match FormClient::new(&cli.endpoint) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let fields = FormFields {
        topic: cli.topic,
        tone: Some(cli.tone),
        platform: Some(cli.platform),
        call_to_action: cli.call_to_action,
    };

    match client.submit_with(&fields, render).await {
        FormState::Succeeded(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
