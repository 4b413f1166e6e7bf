// Text fragment annotator
//
// Rewrites one fragment of document text, wrapping each word outside the
// known vocabulary in a marker span the first time it appears in the
// document. Everything that is not a word is copied through verbatim.

pub mod state;

use lexgloss_core::enums::Classification;
use lexgloss_core::gloss::GlossRecord;
use lexgloss_core::token::WordToken;

use crate::gloss::GlossLookup;
use crate::markup::escape_attribute;
use crate::tokenizer;
use crate::vocabulary::KnownVocabulary;
pub use state::AnnotationState;

/// Words this short are never annotated (initials, "ok", "et").
pub const MAX_SKIPPED_LEN: usize = 2;

/// Default class of the marker span.
pub const DEFAULT_MARKER_CLASS: &str = "vocab";

/// Annotator options.
#[derive(Debug, Clone)]
pub struct AnnotatorOptions {
    /// CSS class carried by every marker span.
    pub marker_class: String,
}

impl Default for AnnotatorOptions {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
        }
    }
}

/// Rewrites text fragments against a vocabulary and a gloss table.
///
/// The annotator itself holds only shared references and is cheap to
/// create; all per-document state lives in the [`AnnotationState`] passed
/// to [`annotate`](Self::annotate).
#[derive(Debug, Clone, Copy)]
pub struct TextAnnotator<'a> {
    vocabulary: &'a KnownVocabulary,
    glosses: &'a GlossLookup,
    marker_class: &'a str,
}

impl<'a> TextAnnotator<'a> {
    pub fn new(vocabulary: &'a KnownVocabulary, glosses: &'a GlossLookup) -> Self {
        Self {
            vocabulary,
            glosses,
            marker_class: DEFAULT_MARKER_CLASS,
        }
    }

    pub fn with_marker_class(mut self, marker_class: &'a str) -> Self {
        self.marker_class = marker_class;
        self
    }

    pub fn marker_class(&self) -> &'a str {
        self.marker_class
    }

    /// Decide what happens to `word` given the words already marked.
    pub fn classify(&self, word: &str, state: &AnnotationState) -> Classification {
        if word.chars().count() <= MAX_SKIPPED_LEN {
            Classification::TooShort
        } else if word.chars().all(|c| c.is_ascii_digit()) {
            Classification::Numeric
        } else if state.contains(word) {
            Classification::AlreadyMarked
        } else if self.vocabulary.is_known(word) {
            Classification::Known
        } else {
            Classification::Unknown
        }
    }

    /// Rewrite `fragment`, marking each new unknown word and recording it
    /// in `state`.
    pub fn annotate(&self, fragment: &str, state: &mut AnnotationState) -> String {
        let mut out = String::with_capacity(fragment.len());
        for segment in tokenizer::segments(fragment) {
            out.push_str(segment.before);
            let Some(word) = segment.word else {
                continue;
            };
            if self.classify(word.text, state).needs_gloss() {
                let record = self.glosses.lookup(word.text);
                out.push_str(&self.marker(&word, record));
                state.insert(word.text);
            } else {
                out.push_str(word.text);
            }
        }
        out
    }

    /// Marker markup for one word, keeping the word's original casing.
    pub fn marker(&self, word: &WordToken<'_>, record: &GlossRecord) -> String {
        format!(
            "<span class=\"{}\" title=\"{}\">{}</span>",
            escape_attribute(self.marker_class),
            escape_attribute(&record.tooltip()),
            word.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexgloss_core::gloss::PLACEHOLDER_TRANSLATION;

    fn vocab() -> KnownVocabulary {
        KnownVocabulary::from_words(["are", "compute", "the", "and", "see", "for", "details"])
    }

    fn glosses() -> GlossLookup {
        GlossLookup::from_entries([
            ("cryptographic", GlossRecord::new("密码学的", "/ˌkrɪptəˈɡræfɪk/")),
            ("pairings", GlossRecord::new("配对（复数）", "/ˈpeərɪŋz/")),
            ("magma", GlossRecord::new("Magma \"软件\"", "")),
        ])
    }

    #[test]
    fn marks_unknown_words_once() {
        let (v, g) = (vocab(), glosses());
        let annotator = TextAnnotator::new(&v, &g);
        let mut state = AnnotationState::new();
        let out = annotator.annotate("Cryptographic pairings are computed.", &mut state);
        assert_eq!(
            out,
            "<span class=\"vocab\" title=\"/ˌkrɪptəˈɡræfɪk/ 密码学的\">Cryptographic</span> \
             <span class=\"vocab\" title=\"/ˈpeərɪŋz/ 配对（复数）\">pairings</span> are computed."
        );
        assert_eq!(state.len(), 2);
        assert!(state.contains("cryptographic"));
        assert!(state.contains("pairings"));
    }

    #[test]
    fn repeated_word_marked_only_first_time() {
        let (v, g) = (vocab(), glosses());
        let annotator = TextAnnotator::new(&v, &g);
        let mut state = AnnotationState::new();
        let out = annotator.annotate("pairings and Pairings", &mut state);
        assert_eq!(out.matches("<span").count(), 1);
        assert!(out.ends_with(" and Pairings"));
    }

    #[test]
    fn state_carries_across_fragments() {
        let (v, g) = (vocab(), glosses());
        let annotator = TextAnnotator::new(&v, &g);
        let mut state = AnnotationState::new();
        let first = annotator.annotate("Pairings.", &mut state);
        let second = annotator.annotate("More pairings.", &mut state);
        assert!(first.contains(">Pairings</span>"));
        assert!(!second.contains(">pairings</span>"));
    }

    #[test]
    fn known_only_text_is_unchanged() {
        let (v, g) = (vocab(), glosses());
        let annotator = TextAnnotator::new(&v, &g);
        let mut state = AnnotationState::new();
        let text = "See the details, and compute!  (Computed.)";
        assert_eq!(annotator.annotate(text, &mut state), text);
        assert!(state.is_empty());
    }

    #[test]
    fn short_words_and_citations_are_skipped() {
        let (v, g) = (vocab(), glosses());
        let annotator = TextAnnotator::new(&v, &g);
        let mut state = AnnotationState::new();
        let text = "ok, see [12] and [Gal05] by J. Doe";
        let out = annotator.annotate(text, &mut state);
        assert!(!out.contains(">ok<"));
        assert!(!out.contains(">J<"));
        assert!(!out.contains(">Gal"));
        assert!(out.contains("[Gal05]"));
        // "Doe" is unknown and long enough.
        assert!(out.contains(">Doe</span>"));
    }

    #[test]
    fn missing_gloss_uses_placeholder() {
        let (v, g) = (vocab(), glosses());
        let annotator = TextAnnotator::new(&v, &g);
        let mut state = AnnotationState::new();
        let out = annotator.annotate("isogeny", &mut state);
        assert_eq!(
            out,
            format!("<span class=\"vocab\" title=\"{PLACEHOLDER_TRANSLATION}\">isogeny</span>")
        );
    }

    #[test]
    fn tooltip_is_attribute_escaped() {
        let (v, g) = (vocab(), glosses());
        let annotator = TextAnnotator::new(&v, &g);
        let mut state = AnnotationState::new();
        let out = annotator.annotate("Magma", &mut state);
        assert!(out.contains("title=\"Magma &quot;软件&quot;\""));
    }

    #[test]
    fn custom_marker_class() {
        let (v, g) = (vocab(), glosses());
        let annotator = TextAnnotator::new(&v, &g).with_marker_class("gloss");
        let mut state = AnnotationState::new();
        let out = annotator.annotate("pairings", &mut state);
        assert!(out.starts_with("<span class=\"gloss\""));
    }

    #[test]
    fn classify_covers_every_outcome() {
        let (v, g) = (vocab(), glosses());
        let annotator = TextAnnotator::new(&v, &g);
        let mut state = AnnotationState::new();
        state.insert("pairings");
        assert_eq!(annotator.classify("ok", &state), Classification::TooShort);
        assert_eq!(annotator.classify("2024", &state), Classification::Numeric);
        assert_eq!(annotator.classify("Pairings", &state), Classification::AlreadyMarked);
        assert_eq!(annotator.classify("computed", &state), Classification::Known);
        assert_eq!(annotator.classify("isogeny", &state), Classification::Unknown);
    }

    #[test]
    fn entities_pass_through_untouched() {
        let (v, g) = (vocab(), glosses());
        let annotator = TextAnnotator::new(&v, &g);
        let mut state = AnnotationState::new();
        let text = "see&nbsp;the &amp; details";
        assert_eq!(annotator.annotate(text, &mut state), text);
    }
}
