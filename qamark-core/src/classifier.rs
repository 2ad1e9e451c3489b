//! Span classification: labels tokenized text as questions or answers.
//!
//! The pipeline is single-pass and stateless per span. Each candidate
//! token gets exactly one category decision; spans labeled `Other` are
//! dropped, everything else is yielded in document order. The baseline
//! policy draws labels uniformly at random and stands in for a real
//! strategy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Category, Document, Span, TextRange};
use crate::tokenizer;

/// The prediction interface the evaluation harness calls once per document.
///
/// Implementations yield spans lazily, in document order, and never
/// invent spans the tokenizer did not propose. Emitted spans carry only
/// `Question` or `Answer`. Implementations borrow the document for the
/// duration of the call and retain nothing afterwards.
pub trait Annotator {
    fn annotate<'a>(&'a mut self, doc: &'a Document) -> Box<dyn Iterator<Item = Span> + 'a>;
}

/// Tokenize `doc` and label each candidate with `decide`, keeping only
/// Question/Answer spans.
///
/// This is the whole classification pass; `Annotator` implementations
/// differ only in the decision callback they plug in.
pub fn classify_with<'a, F>(doc: &'a Document, mut decide: F) -> impl Iterator<Item = Span> + 'a
where
    F: FnMut(&TextRange) -> Category + 'a,
{
    tokenizer::tokens(&doc.content).filter_map(move |range| {
        let category = decide(&range);
        category.is_emitted().then(|| Span::new(range, category))
    })
}

/// Baseline annotator: one uniform draw over {Question, Answer, Other}
/// per token, independent across tokens. Deliberately knows nothing
/// about the text.
pub struct RandomAnnotator<R: Rng = StdRng> {
    rng: R,
}

impl RandomAnnotator<StdRng> {
    /// Seed from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Fixed seed, for reproducible runs and tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomAnnotator<R> {
    /// Use a caller-supplied generator. Each annotator owns its source,
    /// so concurrent passes over different documents stay independent.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomAnnotator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Annotator for RandomAnnotator<R> {
    fn annotate<'a>(&'a mut self, doc: &'a Document) -> Box<dyn Iterator<Item = Span> + 'a> {
        let rng = &mut self.rng;
        Box::new(classify_with(doc, move |_| {
            let all = Category::all();
            all[rng.random_range(0..all.len())]
        }))
    }
}
