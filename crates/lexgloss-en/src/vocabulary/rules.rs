// Suffix-stripping rules for recognising inflected forms of known words

/// One morphological equivalence rule.
///
/// A word ending in `suffix` is a form of a known word if removing the
/// suffix and appending `append` yields a base form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Short name for diagnostics (`plural`, `past-e`, ...).
    pub name: &'static str,
    /// Suffix that must end the word.
    pub suffix: &'static str,
    /// Text appended to the stripped stem, often empty.
    pub append: &'static str,
}

impl SuffixRule {
    pub const fn new(name: &'static str, suffix: &'static str, append: &'static str) -> Self {
        Self {
            name,
            suffix,
            append,
        }
    }

    /// Reconstruct the base form this rule proposes for `word`.
    ///
    /// `word` must already be lowercase. Returns `None` if the word does not
    /// end with the suffix or nothing would remain of the stem.
    pub fn stem(&self, word: &str) -> Option<String> {
        let stripped = word.strip_suffix(self.suffix)?;
        if stripped.is_empty() {
            return None;
        }
        let mut base = String::with_capacity(stripped.len() + self.append.len());
        base.push_str(stripped);
        base.push_str(self.append);
        Some(base)
    }
}

/// The rule table, in evaluation order.
///
/// Rules are independent existence checks: the first rule whose stem is a
/// base form accepts the word, and reordering never changes the verdict.
pub const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule::new("plural", "s", ""),
    SuffixRule::new("past", "ed", ""),
    // "computed" -> "compute"
    SuffixRule::new("past-e", "ed", "e"),
    SuffixRule::new("progressive", "ing", ""),
    SuffixRule::new("progressive-e", "ing", "e"),
    SuffixRule::new("adverb", "ly", ""),
    SuffixRule::new("comparative", "er", ""),
    SuffixRule::new("superlative", "est", ""),
    SuffixRule::new("nominal-tion", "tion", "te"),
    SuffixRule::new("nominal-ment", "ment", ""),
    SuffixRule::new("nominal-ness", "ness", ""),
    SuffixRule::new("adjective-ful", "ful", ""),
    SuffixRule::new("adjective-less", "less", ""),
    SuffixRule::new("adjective-able", "able", ""),
    SuffixRule::new("adjective-ible", "ible", ""),
    SuffixRule::new("adjective-ive", "ive", "e"),
    SuffixRule::new("nominal-ity", "ity", ""),
    SuffixRule::new("possessive", "'s", ""),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static SuffixRule {
        SUFFIX_RULES
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("no rule named {name}"))
    }

    #[test]
    fn plural_strips_s() {
        assert_eq!(rule("plural").stem("books").as_deref(), Some("book"));
        assert_eq!(rule("plural").stem("book"), None);
    }

    #[test]
    fn past_variants() {
        assert_eq!(rule("past").stem("helped").as_deref(), Some("help"));
        assert_eq!(rule("past-e").stem("computed").as_deref(), Some("compute"));
        assert_eq!(rule("past-e").stem("hoped").as_deref(), Some("hope"));
        assert_eq!(rule("past-e").stem("kind"), None);
    }

    #[test]
    fn progressive_variants() {
        assert_eq!(rule("progressive").stem("reading").as_deref(), Some("read"));
        assert_eq!(
            rule("progressive-e").stem("creating").as_deref(),
            Some("create")
        );
    }

    #[test]
    fn reconstruction_rules_append() {
        assert_eq!(
            rule("nominal-tion").stem("creation").as_deref(),
            Some("create")
        );
        assert_eq!(
            rule("adjective-ive").stem("creative").as_deref(),
            Some("create")
        );
    }

    #[test]
    fn adjective_rules_strip() {
        assert_eq!(
            rule("adjective-able").stem("readable").as_deref(),
            Some("read")
        );
        assert_eq!(
            rule("adjective-ible").stem("accessible").as_deref(),
            Some("access")
        );
        assert_eq!(rule("adjective-ible").stem("readable"), None);
    }

    #[test]
    fn possessive() {
        assert_eq!(rule("possessive").stem("friend's").as_deref(), Some("friend"));
    }

    #[test]
    fn bare_suffix_has_no_stem() {
        assert_eq!(rule("plural").stem("s"), None);
        assert_eq!(rule("progressive").stem("ing"), None);
        assert_eq!(rule("nominal-ness").stem("ness"), None);
    }

    #[test]
    fn every_rule_has_a_suffix() {
        for r in SUFFIX_RULES {
            assert!(!r.suffix.is_empty(), "rule {} has empty suffix", r.name);
        }
    }

    #[test]
    fn rule_names_are_unique() {
        for (i, a) in SUFFIX_RULES.iter().enumerate() {
            for b in &SUFFIX_RULES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
