// Known-vocabulary baseline and morphological equivalence test

pub mod rules;

use hashbrown::HashSet;

use crate::DataError;
use rules::{SUFFIX_RULES, SuffixRule};

/// Baseline vocabulary shipped with the crate.
#[cfg(feature = "builtin")]
const BUILTIN_BASELINE: &str = include_str!("../../data/baseline.txt");

/// Set of base word forms the reader is assumed to know.
///
/// A word is known if its lowercase form is a base form, or if one of the
/// [`SUFFIX_RULES`] maps it onto a base form. The set never changes after
/// construction, so a vocabulary can be shared freely between documents
/// and threads.
#[derive(Debug, Clone, Default)]
pub struct KnownVocabulary {
    base_forms: HashSet<String>,
}

impl KnownVocabulary {
    /// Build a vocabulary from base forms. Entries are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base_forms = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { base_forms }
    }

    /// Parse a baseline resource: one base form per line, blank lines and
    /// lines starting with `#` ignored.
    pub fn parse(text: &str) -> Result<Self, DataError> {
        let mut base_forms = HashSet::new();
        for (idx, line) in text.lines().enumerate() {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if entry.chars().any(char::is_whitespace) {
                return Err(DataError::InvalidBaselineEntry {
                    line: idx + 1,
                    entry: entry.to_string(),
                });
            }
            base_forms.insert(entry.to_lowercase());
        }
        Ok(Self { base_forms })
    }

    /// The baseline vocabulary embedded in the crate.
    #[cfg(feature = "builtin")]
    pub fn builtin() -> Self {
        Self::from_words(
            BUILTIN_BASELINE
                .lines()
                .filter(|line| !line.trim_start().starts_with('#')),
        )
    }

    /// Number of base forms.
    pub fn len(&self) -> usize {
        self.base_forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base_forms.is_empty()
    }

    /// Exact base-form membership, ignoring case. Suffix rules are not
    /// consulted.
    pub fn contains_base(&self, word: &str) -> bool {
        self.base_forms.contains(word.to_lowercase().as_str())
    }

    /// Whether `word` is a base form or an inflection of one.
    pub fn is_known(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.base_forms.contains(lower.as_str()) || self.rule_for_lowercase(&lower).is_some()
    }

    /// The suffix rule that makes `word` known, if the word is not itself a
    /// base form. Returns `None` for base forms and for unknown words.
    pub fn matching_rule(&self, word: &str) -> Option<&'static SuffixRule> {
        let lower = word.to_lowercase();
        if self.base_forms.contains(lower.as_str()) {
            return None;
        }
        self.rule_for_lowercase(&lower)
    }

    fn rule_for_lowercase(&self, lower: &str) -> Option<&'static SuffixRule> {
        SUFFIX_RULES.iter().find(|rule| {
            rule.stem(lower)
                .is_some_and(|base| self.base_forms.contains(base.as_str()))
        })
    }
}
