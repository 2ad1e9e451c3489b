pub mod document;
pub mod span;
pub mod text_range;

pub use document::Document;
pub use span::{Category, Span};
pub use text_range::TextRange;
