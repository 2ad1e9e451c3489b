//! Qamark CLI - runs the baseline annotator over a text file and prints
//! the predicted question/answer spans as JSON

mod io;

use anyhow::{Context, Result};
use tracing::debug;

use qamark_core::{to_json, Annotator, RandomAnnotator, Span};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("Usage: qamark <file> [seed]");
        std::process::exit(2);
    };

    let doc = io::load_file(path)?;
    debug!(
        chars = doc.char_count(),
        words = doc.word_count(),
        "loaded document"
    );

    let mut annotator = match args.get(2) {
        Some(seed) => {
            let seed: u64 = seed
                .parse()
                .with_context(|| format!("Invalid seed: {}", seed))?;
            RandomAnnotator::seeded(seed)
        }
        None => RandomAnnotator::new(),
    };

    let spans: Vec<Span> = annotator.annotate(&doc).collect();
    debug!(spans = spans.len(), "annotated document");

    println!("{}", to_json(&spans)?);
    Ok(())
}
