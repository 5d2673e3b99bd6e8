//! Rendered message list
//!
//! The transcript is what the user sees. It holds UI-only notices (greeting,
//! errors) that never go into the session.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// A single rendered message
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub speaker: Speaker,
    pub text: String,

    /// The user question this reply answers, shown above the bubble
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Speaker::User, text.into(), None);
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.push(Speaker::Assistant, text.into(), None);
    }

    /// Push an assistant reply along with the question that triggered it
    pub fn push_reply(&mut self, text: impl Into<String>, question: impl Into<String>) {
        self.push(Speaker::Assistant, text.into(), Some(question.into()));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, speaker: Speaker, text: String, question: Option<String>) {
        self.entries.push(Entry {
            speaker,
            text,
            question,
            at: Utc::now(),
        });
    }
}
