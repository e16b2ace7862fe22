//! ASCII folding for diacritic-insensitive matching
//!
//! Sign-off tables are written in plain ASCII, so the reply is
//! transliterated with `deunicode` before it is scanned. The folded copy
//! keeps a byte map back to the original text, which lets callers cut the
//! original (with its accents intact) at offsets found in the folded one.

use deunicode::deunicode_char;

/// Currency symbols that pass through folding untouched
///
/// Transliterating these would turn `€250` into `EUR250` and move every
/// later offset.
pub const SHIELDED_SYMBOLS: &[char] = &['€', '£', '¥', '元', '₹', '₩'];

/// Transliterate `text` to ASCII, leaving shielded currency symbols as-is
#[must_use]
pub fn ascii_fold(text: &str) -> String {
    FoldedText::new(text).folded
}

/// A folded copy of a text with a map back to original byte offsets
#[derive(Debug)]
pub struct FoldedText<'a> {
    original: &'a str,
    folded: String,
    origin: Vec<usize>,
}

impl<'a> FoldedText<'a> {
    #[must_use]
    pub fn new(original: &'a str) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());

        for (offset, ch) in original.char_indices() {
            let before = folded.len();
            match fold_char(ch) {
                Some(ascii) => folded.push_str(ascii),
                None => folded.push(ch),
            }
            origin.resize(origin.len() + (folded.len() - before), offset);
        }

        Self {
            original,
            folded,
            origin,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Map a byte offset in the folded text to one in the original
    ///
    /// Offsets landing inside a multi-byte expansion (the second `s` of
    /// a folded `ß`) map to the start of the source character.
    #[must_use]
    pub fn original_offset(&self, folded_offset: usize) -> usize {
        self.origin
            .get(folded_offset)
            .copied()
            .unwrap_or(self.original.len())
    }
}

fn fold_char(ch: char) -> Option<&'static str> {
    if ch.is_ascii() || SHIELDED_SYMBOLS.contains(&ch) {
        return None;
    }
    deunicode_char(ch)
}
