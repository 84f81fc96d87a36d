//! Abstractions that tie a **prompt** to a concrete **model**, its sampling
//! parameters and a **typed response**.
//!
//! 1. [`IntoPrompt`] – turns a value into a list of chat messages.
//! 2. [`PromptTemplate`] – adds the target model, temperature, output token
//!    budget and the type the embedded JSON answer is decoded into.
//!
//! ```rust
//! use hanming_core::template::{IntoPrompt, PromptTemplate};
//! use hanming_core::generic::{GenericMessage, GenericRole};
//! use hanming_core::model::{Model, OpenRouterModel};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Hello { greeting: String }
//!
//! struct HelloPrompt;
//!
//! impl IntoPrompt for HelloPrompt {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello in JSON!".into(), GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for HelloPrompt {
//!     type Output = Hello;
//!     const MODEL: Model = Model::OpenRouter(OpenRouterModel::DeepSeekChatV3_1);
//!     const TEMPERATURE: Option<f64> = Some(0.2);
//! }
//! ```
use serde::de::DeserializeOwned;

use crate::model::Model;

/// High-level description of a prompt.
///
/// The answer is expected to *contain* one JSON object somewhere in the
/// completion text; it is extracted and decoded into `Output`.
pub trait PromptTemplate: IntoPrompt {
    /// Type the embedded JSON object is decoded into.
    type Output: DeserializeOwned + Send + 'static;

    /// Logical model identifier, mapped by the backend to its own naming.
    const MODEL: Model;

    /// Sampling temperature. `None` leaves the provider default.
    const TEMPERATURE: Option<f64> = None;

    /// Maximum number of output tokens. `None` leaves the provider default.
    const MAX_TOKENS: Option<u32> = None;
}

/// Converts a value into a series of chat messages.
///
/// The `Message` type is an associated type so a backend can require its own
/// richer struct without dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`crate::generic::GenericMessage`] is a prompt on its own.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
