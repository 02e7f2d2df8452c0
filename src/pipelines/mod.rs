// Pipeline modules organized by functionality
pub mod sentiment_analysis;
pub mod utils;

pub use sentiment_analysis::*;

/// Trait for anything that can classify one utterance into a sentiment label
/// with a confidence score.
///
/// The interactive shell is generic over this trait so that the real
/// candle-backed pipeline can be swapped for a deterministic fake in tests.
pub trait TextClassifier {
    fn predict(&self, text: &str) -> anyhow::Result<SentimentResult>;
}

impl<C: TextClassifier + ?Sized> TextClassifier for &C {
    fn predict(&self, text: &str) -> anyhow::Result<SentimentResult> {
        (**self).predict(text)
    }
}
