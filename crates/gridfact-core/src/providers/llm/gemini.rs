use super::LlmClient;
use async_trait::async_trait;
use serde_json::{json, Value};

pub struct GeminiClient {
    pub model: String,
    pub api_key: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(model: String, api_key: String, temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            model,
            api_key,
            temperature,
            max_output_tokens,
            client: reqwest::Client::new(),
        }
    }

    fn parse_response(json: &Value) -> anyhow::Result<String> {
        json.pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                anyhow::anyhow!("Gemini API response missing candidates[0].content.parts[0].text")
            })
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_output_tokens,
            }
        });

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, error_text);
        }

        let json: Value = resp.json().await?;
        Self::parse_response(&json)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_candidate_text() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": " SELECT 42 \n"}]}
            }]
        });
        assert_eq!(GeminiClient::parse_response(&raw).unwrap(), "SELECT 42");
    }

    #[test]
    fn missing_candidates_is_an_error() {
        let raw = serde_json::json!({"promptFeedback": {"blockReason": "SAFETY"}});
        let err = GeminiClient::parse_response(&raw).unwrap_err();
        assert!(err.to_string().contains("missing candidates"));
    }
}
