use serde::{Deserialize, Serialize};

use super::TextRange;

/// Label assigned to a tokenized stretch of text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "Q")]
    Question,
    #[serde(rename = "A")]
    Answer,
    #[serde(rename = "O")]
    Other,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Category::Question, Category::Answer, Category::Other]
    }

    /// One-letter wire code ("Q", "A" or "O")
    pub fn code(&self) -> &'static str {
        match self {
            Category::Question => "Q",
            Category::Answer => "A",
            Category::Other => "O",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Question => "Question",
            Category::Answer => "Answer",
            Category::Other => "Other",
        }
    }

    /// Whether spans carrying this label appear in prediction output.
    /// `Other` is the implicit default for unlabeled text and is dropped.
    pub fn is_emitted(&self) -> bool {
        !matches!(self, Category::Other)
    }
}

/// A labeled range of document text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    #[serde(flatten)]
    pub range: TextRange,
    pub category: Category,
}

impl Span {
    pub fn new(range: TextRange, category: Category) -> Self {
        Self { range, category }
    }

    pub fn start(&self) -> usize {
        self.range.start_offset
    }

    pub fn end(&self) -> usize {
        self.range.end_offset
    }
}
