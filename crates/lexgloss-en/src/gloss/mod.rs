// Gloss dictionary: word -> translation + pronunciation

use hashbrown::HashMap;
use lexgloss_core::gloss::GlossRecord;

use crate::DataError;

/// Gloss dictionary shipped with the crate.
#[cfg(feature = "builtin")]
const BUILTIN_GLOSSES: &str = include_str!("../../data/glosses.json");

/// Case-insensitive mapping from a word to its gloss.
///
/// Lookups never fail: a word with no entry gets the placeholder record,
/// so an unglossed technical term is still flagged, just with a generic
/// tooltip.
#[derive(Debug, Clone)]
pub struct GlossLookup {
    entries: HashMap<String, GlossRecord>,
    placeholder: GlossRecord,
}

impl Default for GlossLookup {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            placeholder: GlossRecord::placeholder(),
        }
    }
}

impl GlossLookup {
    /// Build a table from `(word, record)` pairs. Words are lowercased; a
    /// later duplicate replaces an earlier one.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, GlossRecord)>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, record)| (word.as_ref().to_lowercase(), record))
            .collect();
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Parse a JSON object mapping each word to
    /// `{"translation": ..., "pronunciation": ...}`.
    pub fn from_json(text: &str) -> Result<Self, DataError> {
        let raw: HashMap<String, GlossRecord> = serde_json::from_str(text)?;
        Ok(Self::from_entries(raw))
    }

    /// The gloss dictionary embedded in the crate.
    #[cfg(feature = "builtin")]
    pub fn builtin() -> Result<Self, DataError> {
        Self::from_json(BUILTIN_GLOSSES)
    }

    /// Replace the record returned for words without an entry.
    pub fn with_placeholder(mut self, placeholder: GlossRecord) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// The record returned for words without an entry.
    pub fn placeholder(&self) -> &GlossRecord {
        &self.placeholder
    }

    /// Exact entry for `word`, ignoring case.
    pub fn get(&self, word: &str) -> Option<&GlossRecord> {
        self.entries.get(word.to_lowercase().as_str())
    }

    /// Gloss for `word`, or the placeholder if there is none.
    pub fn lookup(&self, word: &str) -> &GlossRecord {
        self.get(word).unwrap_or(&self.placeholder)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
