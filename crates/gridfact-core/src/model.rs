use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One exchange in a conversation: a question from the user or an answer
/// from the system. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered, append-only sequence of turns for one session. Held in memory
/// for the lifetime of the session; there is no cross-session persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session start: seed the history with one assistant greeting.
    pub fn with_greeting(greeting: &str) -> Self {
        Self {
            turns: vec![Turn::assistant(greeting)],
        }
    }

    pub fn push_user(&mut self, content: &str) {
        self.turns.push(Turn::user(content));
    }

    pub fn push_assistant(&mut self, content: &str) {
        self.turns.push(Turn::assistant(content));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// History rendered as prompt text, one `Human:`/`AI:` line per turn.
    /// The full history is replayed every turn; growth is unbounded by
    /// design.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for t in &self.turns {
            let speaker = match t.role {
                Role::User => "Human",
                Role::Assistant => "AI",
            };
            out.push_str(speaker);
            out.push_str(": ");
            out.push_str(&t.content);
            out.push('\n');
        }
        out
    }
}
