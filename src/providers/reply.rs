//! Worker reply shapes
//!
//! The worker may proxy different upstream completion APIs, so the body is
//! matched against the shapes we know in a fixed order:
//!
//! 1. chat completion: `choices[0].message.content`
//! 2. text completion: `choices[0].text`
//! 3. a bare JSON string
//! 4. anything else

use serde_json::Value;

use crate::config::prompts_builtin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyShape {
    ChatCompletion(String),
    TextCompletion(String),
    Bare(String),
    Unrecognized,
}

impl ReplyShape {
    pub fn decode(body: &Value) -> Self {
        let first_choice = body.get("choices").and_then(|c| c.get(0));

        if let Some(content) = first_choice
            .and_then(|c| c.pointer("/message/content"))
            .and_then(non_empty_str)
        {
            return ReplyShape::ChatCompletion(content.to_string());
        }

        if let Some(text) = first_choice.and_then(|c| c.get("text")).and_then(non_empty_str) {
            return ReplyShape::TextCompletion(text.to_string());
        }

        match body {
            Value::String(s) => ReplyShape::Bare(s.clone()),
            _ => ReplyShape::Unrecognized,
        }
    }

    /// Assistant text for this reply, falling back to the apology text
    pub fn into_text(self) -> String {
        match self {
            ReplyShape::ChatCompletion(text)
            | ReplyShape::TextCompletion(text)
            | ReplyShape::Bare(text) => text,
            ReplyShape::Unrecognized => prompts_builtin::UNRECOGNIZED_REPLY.to_string(),
        }
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}
