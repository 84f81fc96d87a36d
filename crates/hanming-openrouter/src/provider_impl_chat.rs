use std::{future::Future, pin::Pin, sync::Arc};

use hanming_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    OpenRouterAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest},
    error::OpenRouterError,
};

impl ChatCompletionProvider for OpenRouterAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::try_from(params)?;

            let response = client.chat_completion(request).await.inspect_err(|err| {
                tracing::debug!(error = %err, "chat completion failed");
            })?;

            let usage = response.usage.map(|usage| GenericUsageReport {
                prompt_tokens: usage.prompt_tokens as i64,
                completion_tokens: usage.completion_tokens as i64,
                total_tokens: usage.total_tokens as i64,
            });

            let Some(first_choice) = response.choices.into_iter().next() else {
                return Err(OpenRouterError::Format("response has no choices".into()).into());
            };

            let content = first_choice
                .message
                .content
                .filter(|content| !content.trim().is_empty())
                .ok_or_else(|| OpenRouterError::Format("first choice has no content".into()))?;

            Ok(GenericChatCompletionResponse { content, usage })
        })
    }
}
