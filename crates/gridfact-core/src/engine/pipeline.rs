use crate::model::Conversation;
use crate::prompt;
use crate::providers::llm::LlmClient;
use crate::storage::{QueryOutcome, Store};
use anyhow::Context;
use serde::Serialize;
use std::sync::Arc;

/// One user turn end-to-end: synthesize SQL from the question and history,
/// execute it, synthesize the answer, append the (question, answer) pair.
pub struct Pipeline {
    pub store: Store,
    pub client: Arc<dyn LlmClient>,
}

/// Everything a turn produced, for display or structured output. The
/// answer alone is what gets appended to the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct TurnArtifacts {
    pub question: String,
    pub sql: String,
    pub result: String,
    pub db_error: bool,
    pub answer: String,
}

impl Pipeline {
    pub fn new(store: Store, client: Arc<dyn LlmClient>) -> Self {
        Self { store, client }
    }

    /// Run one turn. Model-call failures propagate as errors and leave the
    /// conversation untouched; database failures are absorbed into the
    /// answer. The turn pair is appended only once the whole run succeeded,
    /// so an answer always belongs to the query/result of its own question.
    pub async fn ask(
        &self,
        conversation: &mut Conversation,
        question: &str,
    ) -> anyhow::Result<TurnArtifacts> {
        let question = question.trim();
        if question.is_empty() {
            anyhow::bail!("question is empty");
        }

        let sql_prompt = prompt::sql_prompt(conversation, question);
        let raw = self
            .client
            .complete(&sql_prompt)
            .await
            .context("SQL synthesis failed")?;
        let sql = prompt::strip_code_fences(&raw);
        tracing::debug!(provider = self.client.provider_name(), sql = %sql, "synthesized query");

        let outcome = self.store.execute_to_text(&sql);
        if let QueryOutcome::Error(msg) = &outcome {
            tracing::debug!(error = %msg, "query execution failed, routing into answer");
        }

        let answer_prompt =
            prompt::answer_prompt(conversation, question, &sql, outcome.as_text());
        let answer = self
            .client
            .complete(&answer_prompt)
            .await
            .context("answer synthesis failed")?;

        conversation.push_user(question);
        conversation.push_assistant(&answer);

        Ok(TurnArtifacts {
            question: question.to_string(),
            sql,
            result: outcome.as_text().to_string(),
            db_error: outcome.is_error(),
            answer,
        })
    }
}
