//! Request and response bodies of `POST /api/translate`

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Translation direction.
///
/// Only the exact string `"toSlang"` selects [`Mode::ToSlang`]; a missing,
/// null, unrecognised or non-string value falls through to
/// [`Mode::ToEnglish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    ToSlang,
    #[default]
    ToEnglish,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::ToSlang => "toSlang",
            Mode::ToEnglish => "toEnglish",
        }
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("toSlang") => Mode::ToSlang,
            _ => Mode::ToEnglish,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub mode: Mode,
}

impl TranslateRequest {
    /// The text to translate, if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TranslateResponse {
    pub translation: String,
}
