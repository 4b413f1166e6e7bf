// Word tokenizer over raw markup text
//
// Splits a text fragment into segments of verbatim text followed by a word.
// A word is a run of ASCII letters, optionally chained into a compound by
// single hyphens, that starts and ends on a word boundary. Character
// references (`&amp;`, `&#8217;`) are copied through untouched; when they
// stand for a letter they count as word characters at boundaries, so
// `caf&eacute;` does not yield `caf`.

use lexgloss_core::character::{COMPOUND_HYPHEN, is_word_char, is_word_letter};
use lexgloss_core::token::{Segment, WordToken};

/// Longest character reference name we try to recognise.
const MAX_REFERENCE_LEN: usize = 32;

/// Named references that stand for punctuation, spacing, or symbols.
/// Every other named reference is assumed to be a letter.
const NON_LETTER_REFERENCES: &[&str] = &[
    "amp", "lt", "gt", "quot", "apos", "nbsp", "ensp", "emsp", "thinsp", "zwnj", "zwj", "lrm",
    "rlm", "shy", "ndash", "mdash", "hellip", "lsquo", "rsquo", "sbquo", "ldquo", "rdquo", "bdquo",
    "laquo", "raquo", "lsaquo", "rsaquo", "middot", "bull", "copy", "reg", "trade", "times",
    "divide", "minus", "plusmn", "deg", "sect", "para", "dagger", "Dagger", "permil", "prime",
    "Prime", "larr", "rarr", "uarr", "darr", "harr", "lArr", "rArr", "hArr", "le", "ge", "ne",
    "asymp", "equiv", "infin", "sum", "prod", "radic", "int", "part", "nabla", "isin", "notin",
    "sub", "sup", "sube", "supe", "cap", "cup", "and", "or", "not", "forall", "exist", "empty",
    "cent", "pound", "yen", "euro", "curren", "iexcl", "iquest", "brvbar", "uml", "macr", "acute",
    "cedil", "frac14", "frac12", "frac34", "sup1", "sup2", "sup3", "oplus", "otimes", "perp",
    "sdot", "lceil", "rceil", "lfloor", "rfloor", "lang", "rang", "loz", "spades", "clubs",
    "hearts", "diams", "tilde", "circ",
];

/// Split `text` into segments.
///
/// The iterator is lazy, finite, and cheap to clone; calling `segments`
/// again on the same text restarts from the beginning. Concatenating every
/// segment's `before` and word text gives back `text` exactly.
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        pos: 0,
        prev_is_word: false,
        done: false,
    }
}

/// Iterate over the words of `text` only.
pub fn words(text: &str) -> impl Iterator<Item = WordToken<'_>> + Clone {
    segments(text).filter_map(|segment| segment.word)
}

/// Lazy segment iterator returned by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    /// Byte offset where the next segment starts.
    pos: usize,
    /// Whether the character before `pos` is a word character.
    prev_is_word: bool,
    done: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if self.done {
            return None;
        }
        let text = self.text;
        let mut i = self.pos;
        let mut prev_is_word = self.prev_is_word;

        while i < text.len() {
            if let Some((ref_len, ref_is_word)) = char_reference(&text[i..]) {
                i += ref_len;
                prev_is_word = ref_is_word;
                continue;
            }
            let Some(c) = text[i..].chars().next() else {
                break;
            };
            if !prev_is_word && is_word_letter(c) {
                if let Some(end) = match_word(text, i) {
                    let segment = Segment {
                        before: &text[self.pos..i],
                        word: Some(WordToken::new(&text[i..end], i)),
                    };
                    self.pos = end;
                    // Words end on a letter.
                    self.prev_is_word = true;
                    return Some(segment);
                }
            }
            prev_is_word = is_word_char(c);
            i += c.len_utf8();
        }

        self.done = true;
        if self.pos < text.len() {
            let tail = Segment::tail(&text[self.pos..]);
            self.pos = text.len();
            Some(tail)
        } else {
            None
        }
    }
}

/// Match a word starting at byte offset `start`, which holds an ASCII
/// letter preceded by a boundary. Returns the end offset.
///
/// The longest hyphen chain is tried first; if a word character follows it
/// directly, the match falls back to the longest prefix ending just before
/// one of its hyphens. A plain letter run glued to a word character does
/// not match at all.
fn match_word(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut end = skip_letters(bytes, start);
    let mut fallback = None;

    loop {
        let at_hyphen = bytes.get(end) == Some(&(COMPOUND_HYPHEN as u8));
        if at_hyphen && bytes.get(end + 1).is_some_and(|b| b.is_ascii_alphabetic()) {
            fallback = Some(end);
            end = skip_letters(bytes, end + 1);
            continue;
        }
        if !word_char_at(text, end) {
            return Some(end);
        }
        return fallback;
    }
}

fn skip_letters(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
        pos += 1;
    }
    pos
}

/// Whether the text at byte offset `pos` starts with a word character
/// (counting letter-valued character references).
fn word_char_at(text: &str, pos: usize) -> bool {
    let rest = &text[pos..];
    if let Some((_, is_word)) = char_reference(rest) {
        return is_word;
    }
    rest.chars().next().is_some_and(is_word_char)
}

/// Recognise a character reference at the start of `s`.
///
/// Returns its byte length and whether it stands for a word character.
/// Only terminated references (`&...;`) are recognised.
fn char_reference(s: &str) -> Option<(usize, bool)> {
    let body = s.strip_prefix('&')?;
    let semi = body.bytes().take(MAX_REFERENCE_LEN + 2).position(|b| b == b';')?;
    let name = &body[..semi];
    let len = semi + 2;

    if let Some(num) = name.strip_prefix('#') {
        let code = if let Some(hex) = num.strip_prefix(['x', 'X']) {
            if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            u32::from_str_radix(hex, 16).ok()?
        } else {
            if num.is_empty() || !num.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            num.parse::<u32>().ok()?
        };
        let is_word = char::from_u32(code).is_some_and(is_word_char);
        return Some((len, is_word));
    }

    let mut chars = name.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if !first_ok || !chars.all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some((len, !NON_LETTER_REFERENCES.contains(&name)))
}
