use std::borrow::Cow;

use hanming_core::model::{Model, OpenRouterModel};

pub const DEEPSEEK_CHAT_V3_1: &str = "deepseek/deepseek-chat-v3.1";

/// OpenRouter id for `model`, or `None` if OpenRouter cannot route it.
///
/// Custom ids must have OpenRouter's `vendor/model` shape.
pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::OpenRouter(OpenRouterModel::DeepSeekChatV3_1) => Some(DEEPSEEK_CHAT_V3_1.into()),
        Model::Custom(custom) if is_routable(custom) => Some(Cow::Borrowed(*custom)),
        Model::Custom(_) => None,
    }
}

fn is_routable(id: &str) -> bool {
    match id.split_once('/') {
        Some((vendor, name)) => {
            !vendor.is_empty()
                && !name.is_empty()
                && !id.contains(char::is_whitespace)
        }
        None => false,
    }
}
