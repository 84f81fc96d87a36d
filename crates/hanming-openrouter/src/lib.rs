//! OpenRouter backend for the Hanming name generator.
//!
//! [`OpenRouterAdapter`] implements
//! [`ChatCompletionProvider`](hanming_core::provider::ChatCompletionProvider)
//! on top of OpenRouter's OpenAI-compatible `chat/completions` endpoint.
mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{
    ENV_API_KEY, ENV_SITE_NAME, ENV_SITE_URL, OpenRouterAdapter, OpenRouterAdapterBuilder,
};
pub mod api_v1;
mod client;
pub mod error;
