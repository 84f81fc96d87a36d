//! Model identifiers used throughout the **hanming** workspace.
//!
//! Application code picks an enum variant and the provider crate maps it to
//! its own naming scheme, so literal strings such as
//! `"deepseek/deepseek-chat-v3.1"` live in exactly one place
//! (`hanming-openrouter::model_map`).
//!
//! ```rust
//! use hanming_core::model::{Model, OpenRouterModel};
//! assert_eq!(Model::from(OpenRouterModel::DeepSeekChatV3_1),
//!            Model::OpenRouter(OpenRouterModel::DeepSeekChatV3_1));
//! ```

/// Universal identifier for an LLM model.
///
/// * `OpenRouter` – models routed through OpenRouter that the workspace knows by name.
/// * `Custom` – any fully qualified model id not covered by the enum. The
///   provider decides whether it can route it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    OpenRouter(OpenRouterModel),
    Custom(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenRouterModel {
    /// The model the name generator ships with.
    DeepSeekChatV3_1,
}

impl From<OpenRouterModel> for Model {
    fn from(val: OpenRouterModel) -> Self {
        Model::OpenRouter(val)
    }
}
