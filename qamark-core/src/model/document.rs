use serde::{Deserialize, Serialize};

use super::TextRange;

/// The immutable text under annotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
}

impl Document {
    pub fn new(title: String, content: String) -> Self {
        Self {
            title,
            content,
            filename: None,
            filepath: None,
        }
    }

    /// Create a document with filename metadata (used by CLI when loading from file)
    pub fn with_file_info(title: String, content: String, filepath: String, filename: String) -> Self {
        let mut doc = Self::new(title, content);
        doc.filepath = Some(filepath);
        doc.filename = Some(filename);
        doc
    }

    /// Length in characters, the unit all span offsets are expressed in
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// The text covered by a character-offset range, or `None` if the
    /// range reaches past the end of the document
    pub fn slice(&self, range: &TextRange) -> Option<&str> {
        let start = char_to_byte(&self.content, range.start_offset)?;
        let end = char_to_byte(&self.content, range.end_offset)?;
        self.content.get(start..end)
    }
}

fn char_to_byte(s: &str, char_offset: usize) -> Option<usize> {
    let mut remaining = char_offset;
    for (byte, _) in s.char_indices() {
        if remaining == 0 {
            return Some(byte);
        }
        remaining -= 1;
    }
    (remaining == 0).then_some(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let doc = Document::new("t".into(), "Is sky blue? Yes.".into());
        assert_eq!(doc.char_count(), 17);
        assert_eq!(doc.word_count(), 4);
    }

    #[test]
    fn test_slice_ascii() {
        let doc = Document::new("t".into(), "Is sky blue? Yes.".into());
        assert_eq!(doc.slice(&TextRange::new(0, 2)), Some("Is"));
        assert_eq!(doc.slice(&TextRange::new(13, 16)), Some("Yes"));
        assert_eq!(doc.slice(&TextRange::new(13, 18)), None);
    }

    #[test]
    fn test_slice_multibyte() {
        // "café" is 4 chars but 5 bytes; offsets are chars
        let doc = Document::new("t".into(), "café au lait".into());
        assert_eq!(doc.slice(&TextRange::new(0, 4)), Some("café"));
        assert_eq!(doc.slice(&TextRange::new(5, 7)), Some("au"));
        assert_eq!(doc.slice(&TextRange::new(8, 12)), Some("lait"));
    }

    #[test]
    fn test_slice_at_end_of_content() {
        let doc = Document::new("t".into(), "abc".into());
        assert_eq!(doc.slice(&TextRange::new(0, 3)), Some("abc"));
        assert_eq!(doc.slice(&TextRange::new(3, 3)), Some(""));
    }

    #[test]
    fn test_with_file_info() {
        let doc = Document::with_file_info(
            "notes".into(),
            "hello".into(),
            "/tmp/notes.txt".into(),
            "notes.txt".into(),
        );
        assert_eq!(doc.filename.as_deref(), Some("notes.txt"));
        assert_eq!(doc.filepath.as_deref(), Some("/tmp/notes.txt"));
    }
}
