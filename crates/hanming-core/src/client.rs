//! Generic, lightweight client that executes a [`PromptTemplate`] against a
//! single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees the prompt's `Message` type matches what the backend expects,
//! and tests can plug in an in-memory backend without any mocking framework.
//!
//! ```rust
//! use hanming_core::{HanmingClient, generic::{GenericMessage, GenericRole},
//!                    template::*, model::*};
//!
//! struct Hello;
//!
//! impl PromptTemplate for Hello {
//!     type Output        = serde_json::Value;
//!     const MODEL: Model = Model::OpenRouter(OpenRouterModel::DeepSeekChatV3_1);
//! }
//!
//! impl IntoPrompt for Hello {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! # fn main() {}
//! ```
use std::{future::Future, pin::Pin, sync::Arc};

use crate::{
    error::{HanmingError, Result},
    json_extract::extract_object,
    provider::{ChatCompleteParameters, ChatCompletionProvider, PromptExecutionProvider},
    template::{IntoPrompt, PromptTemplate},
};

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct HanmingClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for HanmingClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> HanmingClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChatCompletionProvider> PromptExecutionProvider for HanmingClient<B> {
    type Message = B::Message;

    fn prompt_execute<'a, 'p, P>(
        &'a self,
        prompt: P,
    ) -> Pin<Box<dyn Future<Output = Result<P::Output>> + Send + 'p>>
    where
        'a: 'p,
        P: PromptTemplate + Send + Sync + 'p,
        <P as IntoPrompt>::Message: Into<Self::Message> + Clone,
    {
        Box::pin(async move {
            let mut params = ChatCompleteParameters::new(prompt.into_prompt(), P::MODEL);
            if let Some(temperature) = P::TEMPERATURE {
                params = params.with_temperature(temperature);
            }
            if let Some(max_tokens) = P::MAX_TOKENS {
                params = params.with_max_tokens(max_tokens);
            }

            let response = self.backend.chat_complete(params).await?;
            if let Some(usage) = response.usage {
                tracing::debug!(
                    prompt_tokens = usage.prompt_tokens,
                    completion_tokens = usage.completion_tokens,
                    "completion received"
                );
            }

            let object = extract_object(&response.content)?;
            serde_json::from_str::<P::Output>(object)
                .map_err(|err| HanmingError::MalformedResponse(err.to_string()))
        })
    }
}
