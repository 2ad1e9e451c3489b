//! Word-boundary scanner producing the candidate spans the classifier labels.
//!
//! Tokens are maximal runs of Unicode word characters (letters, digits,
//! underscore). Offsets are character offsets, not byte offsets, so they
//! line up with the zero-based indexing the evaluation harness uses.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::TextRange;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Lazily scan `text` left to right for word tokens.
///
/// The returned iterator yields strictly increasing, non-overlapping
/// ranges and is finite. An empty document, or one with no word
/// characters at all, yields nothing. Re-scanning the same text always
/// produces the same boundaries.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens {
        text,
        matches: WORD.find_iter(text),
        byte_pos: 0,
        char_pos: 0,
    }
}

/// Iterator over word-token ranges of a single document
pub struct Tokens<'a> {
    text: &'a str,
    matches: regex::Matches<'static, 'a>,
    // scan position in both units, for incremental byte -> char translation
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = TextRange;

    fn next(&mut self) -> Option<TextRange> {
        let m = self.matches.next()?;
        let start = self.char_pos + self.text[self.byte_pos..m.start()].chars().count();
        let end = start + m.as_str().chars().count();
        self.byte_pos = m.end();
        self.char_pos = end;
        Some(TextRange::new(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    fn ranges(text: &str) -> Vec<(usize, usize)> {
        tokens(text)
            .map(|r| (r.start_offset, r.end_offset))
            .collect()
    }

    #[test]
    fn test_scenario_document() {
        assert_eq!(
            ranges("Is sky blue? Yes."),
            vec![(0, 2), (3, 6), (7, 11), (13, 16)]
        );
    }

    #[test]
    fn test_empty_and_wordless_input() {
        assert_eq!(ranges(""), vec![]);
        assert_eq!(ranges("  \t\n"), vec![]);
        assert_eq!(ranges("?! ... --- ??"), vec![]);
    }

    #[test]
    fn test_tokens_reproduce_word_runs() {
        let doc = Document::new("t".into(), "What's an_swer42? café 北京!".into());
        let words: Vec<&str> = tokens(&doc.content)
            .map(|r| doc.slice(&r).unwrap())
            .collect();
        assert_eq!(words, vec!["What", "s", "an_swer42", "café", "北京"]);
    }

    #[test]
    fn test_multibyte_offsets_are_char_based() {
        // "é" is 2 bytes; char offsets must not drift after it
        assert_eq!(ranges("café au"), vec![(0, 4), (5, 7)]);
    }

    #[test]
    fn test_tokens_are_increasing_and_disjoint() {
        let text = "one, two; three\nfour";
        let mut prev_end = 0;
        for range in tokens(text) {
            assert!(range.start_offset >= prev_end);
            assert!(range.start_offset < range.end_offset);
            prev_end = range.end_offset;
        }
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let text = "Ask once, ask twice.";
        assert_eq!(ranges(text), ranges(text));
    }

    #[test]
    fn test_no_token_contains_non_word_characters() {
        let doc = Document::new("t".into(), "a-b c.d (e) f?g".into());
        for range in tokens(&doc.content) {
            let covered = doc.slice(&range).unwrap();
            assert!(
                covered.chars().all(|c| c.is_alphanumeric() || c == '_'),
                "token {covered:?} contains a non-word character"
            );
        }
    }
}
