//! What the user asks for: a source name plus gender, style and preference
//! tags.
//!
//! ```rust
//! use hanming_types::request::{Gender, GenerationRequest, NameStyle};
//!
//! let request = GenerationRequest::new("  Raymond ")
//!     .with_gender(Gender::Male)
//!     .with_style(NameStyle::Heroic)
//!     .with_preference("Brave")
//!     .validated()
//!     .unwrap();
//!
//! assert_eq!(request.source_name(), "Raymond");
//! ```
use std::{fmt, str::FromStr};

use hanming_core::error::{HanmingError, Result};
use serde::{Deserialize, Serialize};

/// Preference tags offered as one-click chips next to the free-text input.
pub const SUGGESTED_PREFERENCES: [&str; 8] = [
    "Wise",
    "Peace",
    "Success",
    "Brave",
    "Kind",
    "Strong",
    "Happy",
    "Beautiful",
];

/// Gender framing passed to the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "N")]
    Neutral,
}

impl Gender {
    /// Descriptor embedded in the prompt text.
    pub fn descriptor(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "gender-neutral",
        }
    }
}

impl FromStr for Gender {
    type Err = HanmingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            "n" | "neutral" | "gender-neutral" => Ok(Gender::Neutral),
            other => Err(HanmingError::Validation(format!("unknown gender `{other}`"))),
        }
    }
}

/// Naming style. Injected into the prompt as its lowercase label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStyle {
    Traditional,
    #[default]
    Modern,
    Cute,
    Heroic,
}

impl NameStyle {
    pub const ALL: [NameStyle; 4] = [
        NameStyle::Traditional,
        NameStyle::Modern,
        NameStyle::Cute,
        NameStyle::Heroic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NameStyle::Traditional => "traditional",
            NameStyle::Modern => "modern",
            NameStyle::Cute => "cute",
            NameStyle::Heroic => "heroic",
        }
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameStyle {
    type Err = HanmingError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        NameStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == wanted)
            .ok_or_else(|| HanmingError::Validation(format!("unknown style `{wanted}`")))
    }
}

/// Ordered set of free-text preference tags. Insertion order is kept and
/// duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceTags(Vec<String>);

impl PreferenceTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag. Surrounding whitespace is trimmed; blank tags and tags
    /// already present are ignored. Returns whether the set changed.
    pub fn insert(&mut self, tag: impl AsRef<str>) -> bool {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_owned());
        true
    }

    /// Returns whether the tag was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    /// Chip behaviour: select the tag if absent, deselect it if present.
    pub fn toggle(&mut self, tag: &str) {
        if !self.remove(tag) {
            self.insert(tag);
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PreferenceTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

/// Input to a single name generation.
///
/// Only `source_name` is mandatory; call [`Self::validated`] before sending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    source_name: String,
    #[serde(default)]
    gender: Gender,
    #[serde(default)]
    style: NameStyle,
    #[serde(default)]
    preferences: PreferenceTags,
}

impl GenerationRequest {
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            ..Default::default()
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_style(mut self, style: NameStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_preference(mut self, tag: impl AsRef<str>) -> Self {
        self.preferences.insert(tag);
        self
    }

    pub fn with_preferences(mut self, preferences: PreferenceTags) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn style(&self) -> NameStyle {
        self.style
    }

    pub fn preferences(&self) -> &PreferenceTags {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut PreferenceTags {
        &mut self.preferences
    }

    /// Trim the source name and reject it when nothing is left.
    ///
    /// # Errors
    ///
    /// [`HanmingError::Validation`] for an empty or whitespace-only name.
    pub fn validated(mut self) -> Result<Self> {
        let trimmed = self.source_name.trim();
        if trimmed.is_empty() {
            return Err(HanmingError::Validation("source name must not be empty".into()));
        }
        if trimmed.len() != self.source_name.len() {
            self.source_name = trimmed.to_owned();
        }
        Ok(self)
    }
}
