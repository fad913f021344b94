use async_trait::async_trait;

/// Text-completion interface over an external model endpoint. One fully
/// rendered prompt in, one text completion out; no SLA assumptions.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
    fn provider_name(&self) -> &'static str;
}

pub mod fake;
pub mod gemini;
