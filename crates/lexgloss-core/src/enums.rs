// Per-word classification outcome

/// Why a word was (or was not) annotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Two characters or fewer: initials, short function words.
    TooShort,
    /// Digits only.
    Numeric,
    /// Already annotated earlier in the same document.
    AlreadyMarked,
    /// In the baseline vocabulary, directly or through a suffix rule.
    Known,
    /// Outside the baseline vocabulary: gets an annotation marker.
    Unknown,
}

impl Classification {
    /// Whether a word with this classification gets wrapped in a marker.
    pub fn needs_gloss(self) -> bool {
        self == Classification::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unknown_needs_gloss() {
        assert!(Classification::Unknown.needs_gloss());
        assert!(!Classification::Known.needs_gloss());
        assert!(!Classification::TooShort.needs_gloss());
        assert!(!Classification::Numeric.needs_gloss());
        assert!(!Classification::AlreadyMarked.needs_gloss());
    }
}
