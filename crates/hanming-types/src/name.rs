//! The generated name and its normalization.
//!
//! [`GeneratedName`] doubles as the wire shape of the JSON object the model is
//! asked to emit (`characters`, `pinyin`, `meaning`, `individualMeanings`,
//! `culturalSignificance`, `bestUsedFor`, `alternatives`). Every field decodes
//! leniently (a missing key and an explicit `null` both become the empty
//! value) so that an absent name surfaces as
//! [`HanmingError::IncompleteResult`] from [`GeneratedName::normalize`]
//! rather than as an opaque decode failure.
use hanming_core::error::{HanmingError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// `null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One ideograph of the generated name with its reading and meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterMeaning {
    #[serde(deserialize_with = "null_as_default")]
    pub character: String,
    #[serde(rename = "pinyin", deserialize_with = "null_as_default")]
    pub romanization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meaning: String,
}

/// A secondary suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeName {
    #[serde(deserialize_with = "null_as_default")]
    pub characters: String,
    #[serde(rename = "pinyin", deserialize_with = "null_as_default")]
    pub romanization: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meaning: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedName {
    /// The name proper, in CJK ideographs.
    #[serde(deserialize_with = "null_as_default")]
    pub characters: String,
    #[serde(rename = "pinyin", deserialize_with = "null_as_default")]
    pub romanization: String,
    /// Always the caller's input after [`Self::normalize`], never the model's echo.
    #[serde(rename = "englishName", deserialize_with = "null_as_default")]
    pub source_name: String,
    #[serde(rename = "meaning", deserialize_with = "null_as_default")]
    pub overall_meaning: String,
    /// Length is not checked against `characters`.
    #[serde(rename = "individualMeanings", deserialize_with = "null_as_default")]
    pub character_breakdown: Vec<CharacterMeaning>,
    #[serde(rename = "culturalSignificance", deserialize_with = "null_as_default")]
    pub cultural_note: String,
    #[serde(rename = "bestUsedFor", deserialize_with = "null_as_default")]
    pub suggested_uses: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub alternatives: Vec<AlternativeName>,
}

impl GeneratedName {
    /// Check mandatory fields and re-attach the caller's source name.
    ///
    /// # Errors
    ///
    /// [`HanmingError::IncompleteResult`] when `characters` or `pinyin` is
    /// missing or blank.
    pub fn normalize(mut self, source_name: &str) -> Result<Self> {
        if self.characters.trim().is_empty() {
            return Err(HanmingError::IncompleteResult("characters"));
        }
        if self.romanization.trim().is_empty() {
            return Err(HanmingError::IncompleteResult("pinyin"));
        }

        self.source_name = source_name.to_owned();
        Ok(self)
    }

    /// A copy holding nothing but the source name: the first frame of a
    /// staged reveal.
    pub fn skeleton(&self) -> Self {
        Self {
            source_name: self.source_name.clone(),
            ..Default::default()
        }
    }
}
