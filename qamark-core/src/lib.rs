//! Qamark Core - question/answer span annotation library
//!
//! This crate provides the data model and baseline logic for marking
//! sub-ranges of a plain-text document as questions or answers. The
//! surrounding lifecycle (supplying documents, persisting or scoring
//! predictions) belongs to the caller; the core only tokenizes a
//! borrowed document and labels the tokens.

pub mod classifier;
pub mod export;
pub mod model;
pub mod tokenizer;

pub use classifier::{classify_with, Annotator, RandomAnnotator};
pub use export::{to_json, Prediction};
pub use model::{Category, Document, Span, TextRange};
pub use tokenizer::tokens;
