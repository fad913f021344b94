use super::LlmClient;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted client for tests: returns canned completions in order, then
/// errors when the script runs out.
pub struct FakeClient {
    responses: Mutex<VecDeque<String>>,
}

impl FakeClient {
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
        }
    }

    /// Client whose every call fails, for exercising synthesis-error paths.
    pub fn failing() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
        }
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, _prompt: &str) -> anyhow::Result<String> {
        let mut guard = self.responses.lock().unwrap();
        guard
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("fake model call failed: no scripted response left"))
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
