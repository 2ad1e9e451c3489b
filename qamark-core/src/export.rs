use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Category, Span};

/// Wire shape the evaluation harness consumes: a half-open character
/// interval and a one-letter category code, serialized as `[start, end, "Q"]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Prediction(pub usize, pub usize, pub Category);

impl Prediction {
    pub fn start(&self) -> usize {
        self.0
    }

    pub fn end(&self) -> usize {
        self.1
    }

    pub fn category(&self) -> Category {
        self.2
    }
}

impl From<&Span> for Prediction {
    fn from(span: &Span) -> Self {
        Prediction(span.start(), span.end(), span.category)
    }
}

/// Serialize a prediction run as JSON
pub fn to_json(spans: &[Span]) -> Result<String> {
    let predictions: Vec<Prediction> = spans.iter().map(Prediction::from).collect();
    serde_json::to_string_pretty(&predictions).context("Failed to serialize predictions")
}
