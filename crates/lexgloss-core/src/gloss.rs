// Gloss record: what a flagged word is annotated with

use serde::{Deserialize, Serialize};

/// Translation shown for an unknown word that has no dictionary entry.
pub const PLACEHOLDER_TRANSLATION: &str = "（专业术语）";

/// Translation and pronunciation for one word.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlossRecord {
    /// Translation text shown in the tooltip.
    pub translation: String,

    /// Phonetic transcription, possibly empty.
    #[serde(default, alias = "phonetic")]
    pub pronunciation: String,
}

impl GlossRecord {
    pub fn new(translation: impl Into<String>, pronunciation: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            pronunciation: pronunciation.into(),
        }
    }

    /// The generic "technical term" record used when a word is missing
    /// from the gloss table.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_TRANSLATION, "")
    }

    /// Tooltip text: `"pronunciation translation"`, or just the
    /// translation when there is no pronunciation.
    pub fn tooltip(&self) -> String {
        if self.pronunciation.is_empty() {
            self.translation.clone()
        } else {
            format!("{} {}", self.pronunciation, self.translation)
        }
    }
}
