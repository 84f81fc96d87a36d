//! In-memory backend that replays scripted completions.
#![allow(dead_code)]

use std::{
    collections::VecDeque,
    future::Future,
    pin::Pin,
    sync::Mutex,
    time::Duration,
};

use hanming::{
    error::{HanmingError, Result},
    generic::{GenericChatCompletionResponse, GenericMessage},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};
use serde_json::json;

pub enum Script {
    Reply { delay: Duration, content: String },
    Status { delay: Duration, status: u16 },
}

impl Script {
    pub fn reply(content: impl Into<String>) -> Self {
        Script::Reply {
            delay: Duration::ZERO,
            content: content.into(),
        }
    }

    pub fn delayed(self, by: Duration) -> Self {
        match self {
            Script::Reply { content, .. } => Script::Reply { delay: by, content },
            Script::Status { status, .. } => Script::Status { delay: by, status },
        }
    }
}

#[derive(Default)]
pub struct ScriptedBackend {
    scripts: Mutex<VecDeque<Script>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new(scripts: impl IntoIterator<Item = Script>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into_iter().collect()),
            prompts: Mutex::default(),
        }
    }

    /// User prompts received so far, one per call.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ChatCompletionProvider for ScriptedBackend {
    type Message = GenericMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let messages: Vec<GenericMessage> = params.into_messages().into_iter().map(Into::into).collect();
        self.prompts
            .lock()
            .unwrap()
            .extend(messages.into_iter().map(|m| m.content));

        let script = self
            .scripts
            .lock()
            .unwrap()
            .pop_front()
            .expect("backend called more often than scripted");

        Box::pin(async move {
            match script {
                Script::Reply { delay, content } => {
                    tokio::time::sleep(delay).await;
                    Ok(GenericChatCompletionResponse {
                        content,
                        usage: None,
                    })
                }
                Script::Status { delay, status } => {
                    tokio::time::sleep(delay).await;
                    Err(HanmingError::Transport {
                        status: Some(status),
                        message: "Internal Server Error".into(),
                    })
                }
            }
        })
    }
}

/// A complete answer, wrapped in the chatter models like to add.
pub fn completion(characters: &str, pinyin: &str) -> String {
    let object = json!({
        "characters": characters,
        "pinyin": pinyin,
        "englishName": "Echoed By Model",
        "meaning": "Thunder and brightness",
        "individualMeanings": [
            {"character": "雷", "pinyin": "Léi", "meaning": "Thunder"},
            {"character": "明", "pinyin": "Míng", "meaning": "Bright"}
        ],
        "culturalSignificance": "Evokes strength and clarity.",
        "bestUsedFor": ["Business", "Travel"],
        "alternatives": [
            {"characters": "瑞明", "pinyin": "Ruì Míng", "meaning": "Auspicious brightness"}
        ]
    });
    format!("Here is a name that fits:\n```json\n{object:#}\n```")
}

pub fn completion_without(field: &str) -> String {
    let mut object: serde_json::Value =
        serde_json::from_str(completion_object_text().as_str()).unwrap();
    object.as_object_mut().unwrap().remove(field);
    object.to_string()
}

fn completion_object_text() -> String {
    let text = completion("雷明", "Léi Míng");
    let start = text.find('{').unwrap();
    let end = text.rfind('}').unwrap();
    text[start..=end].to_owned()
}
