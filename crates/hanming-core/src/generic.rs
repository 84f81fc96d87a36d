//! Generic message and role types used by the *hanming-core* crate.
//!
//! They mirror the concepts exposed by chat-completion APIs (“system”,
//! “user”, “assistant”) while staying provider-agnostic, so prompts can be
//! built and unit-tested without a transport layer. Provider crates convert
//! them into their wire structs via `From`/`Into`.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message independent of any specific LLM provider.
///
/// * `content` – the raw UTF-8 text.
/// * `role` – see [`GenericRole`] for permitted values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: String,
    pub role: GenericRole,
}

impl GenericMessage {
    /// ```rust
    /// use hanming_core::generic::{GenericMessage, GenericRole};
    ///
    /// let msg = GenericMessage::new("Generate a Chinese name".into(), GenericRole::User);
    /// assert_eq!(msg.role.to_string(), "user");
    /// ```
    pub fn new(content: String, role: GenericRole) -> Self {
        Self { content, role }
    }
}

/// High-level chat roles recognised by most LLM providers.
///
/// The `Display` implementation renders the canonical lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    System,
    Assistant,
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// Text of the first completion choice plus optional token accounting.
#[derive(Debug, Clone)]
pub struct GenericChatCompletionResponse {
    pub content: String,
    pub usage: Option<GenericUsageReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
