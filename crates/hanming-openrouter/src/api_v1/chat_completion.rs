use hanming_core::error::HanmingError;
use hanming_core::generic::{GenericMessage, GenericRole};
use hanming_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;
use crate::model_map::map_model;

use super::common;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            max_tokens: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    temperature: f64,
    max_tokens: u32
);

impl<M> TryFrom<ChatCompleteParameters<M>> for ChatCompletionRequest
where
    M: Into<ChatCompletionMessage> + Clone,
{
    type Error = HanmingError;

    fn try_from(value: ChatCompleteParameters<M>) -> Result<Self, Self::Error> {
        let model = map_model(&value.model).ok_or_else(|| HanmingError::ModelNotSupported {
            provider: "openrouter",
            model: format!("{:?}", value.model),
        })?;

        Ok(Self {
            model: model.into_owned(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
            max_tokens: value.max_tokens,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    #[serde(default)]
    pub role: Option<MessageRole>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    #[serde(default)]
    pub index: Option<i64>,
    pub message: ChatCompletionMessageForResponse,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Only `choices` is required; OpenRouter fills the rest inconsistently
/// across upstream providers.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Option<common::Usage>,
}

/// Error envelope OpenRouter returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use hanming_core::model::{Model, OpenRouterModel};

    use super::*;

    #[test]
    fn request_serializes_to_the_chat_completion_body() {
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::new("hi".into(), GenericRole::User)],
            Model::OpenRouter(OpenRouterModel::DeepSeekChatV3_1),
        )
        .with_temperature(0.7)
        .with_max_tokens(1200);

        let request = ChatCompletionRequest::try_from(params).unwrap();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "model": "deepseek/deepseek-chat-v3.1",
                "messages": [{"role": "user", "content": "hi"}],
                "temperature": 0.7,
                "max_tokens": 1200
            })
        );
    }

    #[test]
    fn unroutable_model_is_not_supported() {
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::new("hi".into(), GenericRole::User)],
            Model::Custom("gpt-4o"),
        );

        let err = ChatCompletionRequest::try_from(params).unwrap_err();
        match err {
            HanmingError::ModelNotSupported { provider, model } => {
                assert_eq!(provider, "openrouter");
                assert!(model.contains("gpt-4o"), "{model}");
            }
            other => panic!("expected ModelNotSupported, got {other:?}"),
        }
    }

    #[test]
    fn unset_sampling_parameters_are_omitted() {
        let request = ChatCompletionRequest::new("m".into(), vec![]);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("temperature").is_none());
        assert!(body.get("max_tokens").is_none());

        let body = serde_json::to_value(request.max_tokens(10)).unwrap();
        assert_eq!(body["max_tokens"], 10);
    }

    #[test]
    fn response_tolerates_sparse_envelopes() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "{\"characters\": \"雷明\"}"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("{\"characters\": \"雷明\"}")
        );
        assert!(response.usage.is_none());
    }

    #[test]
    fn partial_usage_does_not_fail_the_response() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{
                "choices": [{"message": {"content": "{}"}}],
                "usage": {"prompt_tokens": 1, "completion_tokens": 2}
            }"#,
        )
        .unwrap();
        let usage = response.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 1);
        assert_eq!(usage.completion_tokens, 2);
        assert_eq!(usage.total_tokens, 0);
    }
}
