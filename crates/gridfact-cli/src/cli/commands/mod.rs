use crate::cli::args::{Cli, Command};
use anyhow::Context;
use gridfact_core::config::GridfactConfig;
use gridfact_core::providers::llm::gemini::GeminiClient;
use gridfact_core::providers::llm::LlmClient;
use std::sync::Arc;

pub mod ask;
pub mod chat;
pub mod ingest;
pub mod init;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Chat(args) => chat::cmd_chat(args).await,
        Command::Ask(args) => ask::cmd_ask(args).await,
        Command::Ingest(args) => ingest::cmd_ingest(args),
        Command::Init(args) => init::cmd_init(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}

/// API key from GEMINI_API_KEY, falling back to GOOGLE_API_KEY.
pub(crate) fn api_key_from_env() -> anyhow::Result<String> {
    std::env::var("GEMINI_API_KEY")
        .or_else(|_| std::env::var("GOOGLE_API_KEY"))
        .context("GEMINI_API_KEY (or GOOGLE_API_KEY) is not set")
}

pub(crate) fn build_client(cfg: &GridfactConfig) -> anyhow::Result<Arc<dyn LlmClient>> {
    let api_key = api_key_from_env()?;
    Ok(Arc::new(GeminiClient::new(
        cfg.model.clone(),
        api_key,
        cfg.settings.temperature,
        cfg.settings.max_output_tokens,
    )))
}
