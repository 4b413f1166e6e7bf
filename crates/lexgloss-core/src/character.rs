// Character classes used by the tokenizer

/// Hyphen joining the parts of a compound word.
pub const COMPOUND_HYPHEN: char = '-';

/// Letters that may appear in a word token. Only ASCII letters are
/// accepted; words with accented letters are not English vocabulary.
pub fn is_word_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Characters that may not border a word token.
///
/// A word must start and end on a boundary between a word character and a
/// non-word character, so letters glued to digits (`Gal05`) or to accented
/// letters (`café`) never form a token.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
