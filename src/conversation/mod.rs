//! Conversation types and session state

mod transcript;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::prompts_builtin;

pub use transcript::{Entry, Speaker, Transcript};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Append-only message log sent to the worker on every turn.
///
/// The first message is always the system policy. `reset` is the only way
/// anything is ever removed.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    policy: String,
    messages: Vec<Message>,
}

impl Session {
    /// Create a session seeded with the built-in advisor policy
    pub fn new() -> Self {
        Self::with_policy(prompts_builtin::SYSTEM_PROMPT)
    }

    /// Create a session seeded with a custom policy
    pub fn with_policy(policy: impl Into<String>) -> Self {
        let policy = policy.into();
        Self {
            id: Uuid::new_v4(),
            messages: vec![Message::new(Role::System, policy.clone())],
            policy,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    /// Drop every message and re-seed the original policy
    pub fn reset(&mut self) {
        self.messages.clear();
        self.messages
            .push(Message::new(Role::System, self.policy.clone()));
    }

    /// Full history in order, as sent to the worker. No windowing.
    pub fn serialize(&self) -> &[Message] {
        &self.messages
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
