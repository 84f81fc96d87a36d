use hanming_core::{
    HanmingClient,
    error::Result,
    generic::GenericMessage,
    provider::{ChatCompletionProvider, PromptExecutionProvider as _},
};
use hanming_types::{fragments::NamePrompt, name::GeneratedName, request::GenerationRequest};

/// Validate → prompt → one completion → extract → normalize.
///
/// Exactly one backend call per successful validation; none otherwise. No
/// caching and no retries.
pub struct NameGenerator<B> {
    client: HanmingClient<B>,
}

impl<B> Clone for NameGenerator<B> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<B> NameGenerator<B>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
{
    pub fn new(backend: B) -> Self {
        Self::from_client(HanmingClient::new(backend))
    }

    pub fn from_client(client: HanmingClient<B>) -> Self {
        Self { client }
    }

    pub fn backend(&self) -> &B {
        self.client.backend()
    }

    /// Generate a name for `request`.
    ///
    /// The returned name's `source_name` is the trimmed input, whatever the
    /// model echoed back.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedName> {
        let request = request.clone().validated()?;

        let name = self
            .client
            .prompt_execute(NamePrompt::new(&request))
            .await
            .and_then(|payload| payload.normalize(request.source_name()))
            .inspect_err(|err| {
                tracing::warn!(error = %err, source_name = request.source_name(), "name generation failed");
            })?;

        tracing::debug!(characters = %name.characters, "name generated");
        Ok(name)
    }
}
