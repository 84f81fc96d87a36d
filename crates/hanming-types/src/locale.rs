//! User-facing strings for the generator in English and Chinese.
use std::str::FromStr;

use hanming_core::error::HanmingError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

/// Message table for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub enter_name: &'static str,
    pub generate_failed: &'static str,
    pub api_not_configured: &'static str,
    pub generating: &'static str,
    pub step_analyzing: &'static str,
    pub step_matching: &'static str,
    pub step_harmonizing: &'static str,
}

const EN: Messages = Messages {
    enter_name: "Please enter your English name",
    generate_failed: "Failed to generate Chinese name. Please try again.",
    api_not_configured: "API key not configured. Please set OPENROUTER_API_KEY in your environment variables.",
    generating: "Generating...",
    step_analyzing: "Analyzing your name...",
    step_matching: "Finding perfect characters...",
    step_harmonizing: "Adding cultural meaning...",
};

const ZH: Messages = Messages {
    enter_name: "请输入您的英文名字",
    generate_failed: "生成中文名字失败。请重试。",
    api_not_configured: "API密钥未配置。请在环境变量中设置OPENROUTER_API_KEY。",
    generating: "生成中...",
    step_analyzing: "正在分析您的名字...",
    step_matching: "正在寻找完美汉字...",
    step_harmonizing: "正在添加文化内涵...",
};

impl Language {
    pub fn messages(self) -> &'static Messages {
        match self {
            Language::En => &EN,
            Language::Zh => &ZH,
        }
    }

    /// The single string shown to the user for `err`.
    ///
    /// Transport, parse and validation-of-result failures share one generic
    /// retry message.
    pub fn error_message(self, err: &HanmingError) -> &'static str {
        let messages = self.messages();
        match err {
            HanmingError::Validation(_) => messages.enter_name,
            HanmingError::Configuration(_) => messages.api_not_configured,
            _ => messages.generate_failed,
        }
    }
}

impl FromStr for Language {
    type Err = HanmingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "zh" | "chinese" | "中文" => Ok(Language::Zh),
            other => Err(HanmingError::Validation(format!(
                "unsupported language `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_localized_messages() {
        let transport = HanmingError::Transport {
            status: Some(502),
            message: "bad gateway".into(),
        };
        assert_eq!(
            Language::En.error_message(&transport),
            "Failed to generate Chinese name. Please try again."
        );
        assert_eq!(
            Language::Zh.error_message(&HanmingError::Validation("empty".into())),
            "请输入您的英文名字"
        );
        assert_eq!(
            Language::En.error_message(&HanmingError::IncompleteResult("pinyin")),
            Language::En.error_message(&HanmingError::MalformedResponse("x".into())),
        );
    }
}
