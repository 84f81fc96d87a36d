//! The prompt that asks the model for a Chinese name.
//!
//! The instruction is a single user message: one line describing the person,
//! then a literal example of the JSON object the answer must contain.
//!
//! ```text
//! Generate a Chinese name for: Raymond (male, modern, with preferences for: Wise, Brave)
//!
//! Return JSON only:
//! {
//!   "characters": "中文名字",
//!   …
//! }
//! ```
//!
//! Model, temperature and output budget are fixed on the [`PromptTemplate`]
//! impl so every backend sends the same sampling parameters.

use hanming_core::{
    generic::{GenericMessage, GenericRole},
    model::{Model, OpenRouterModel},
    template::{IntoPrompt, PromptTemplate},
};
use hanming_prompt::builder::PromptBuilder;

use crate::{name::GeneratedName, request::GenerationRequest};

/// Prompt for one [`GenerationRequest`].
///
/// Build it from a request that already passed
/// [`GenerationRequest::validated`].
#[derive(Debug, Clone)]
pub struct NamePrompt<'a> {
    request: &'a GenerationRequest,
}

impl<'a> NamePrompt<'a> {
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self { request }
    }

    /// Render the full instruction text.
    pub fn text(&self) -> String {
        let request = self.request;

        PromptBuilder::new()
            .add_text(format!(
                "Generate a Chinese name for: {} ({}, {}",
                request.source_name(),
                request.gender().descriptor(),
                request.style(),
            ))
            .add_joined(
                ", with preferences for: ",
                request.preferences().iter(),
                ", ",
            )
            .add_line(")")
            .add_blank_line()
            .add_line("Return JSON only:")
            .add_text(example_shape(request.source_name()))
            .finalize()
    }
}

fn example_shape(source_name: &str) -> String {
    // A JSON string literal, quotes included.
    let source_name = serde_json::Value::from(source_name).to_string();

    format!(
        r#"{{
  "characters": "中文名字",
  "pinyin": "Pinyin",
  "englishName": {source_name},
  "meaning": "Brief meaning",
  "individualMeanings": [
    {{"character": "中", "pinyin": "Zhōng", "meaning": "Meaning"}}
  ],
  "culturalSignificance": "Cultural note",
  "bestUsedFor": ["Use1", "Use2"],
  "alternatives": [
    {{"characters": "备选", "pinyin": "Bèi xuǎn", "meaning": "Meaning"}}
  ]
}}"#
    )
}

impl IntoPrompt for NamePrompt<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(self.text(), GenericRole::User)]
    }
}

impl PromptTemplate for NamePrompt<'_> {
    type Output = GeneratedName;
    const MODEL: Model = Model::OpenRouter(OpenRouterModel::DeepSeekChatV3_1);
    const TEMPERATURE: Option<f64> = Some(0.7);
    const MAX_TOKENS: Option<u32> = Some(1200);
}
