use serde::{Deserialize, Serialize};
use tokenizers::Tokenizer;

use crate::models::sentiment_modern_bert::SentimentModernBertModel;
use crate::pipelines::TextClassifier;

/// One classification produced for one utterance: the predicted label from
/// the model's vocabulary and the softmax probability assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: String,
    pub score: f32,
}

/// A ready-to-use pipeline for sentiment analysis using ModernBERT.
///
/// Build one with [`SentimentAnalysisPipelineBuilder`], then call
/// [`predict`](Self::predict) for each utterance. The underlying model handle
/// is loaded once and never mutated afterwards.
pub struct SentimentAnalysisPipeline {
    pub(crate) model: SentimentModernBertModel,
    pub(crate) tokenizer: Tokenizer,
}

impl SentimentAnalysisPipeline {
    /// Predicts the sentiment of the input text.
    ///
    /// Synchronous and blocking: one call maps one utterance to exactly one
    /// [`SentimentResult`] or an error.
    pub fn predict(&self, text: &str) -> anyhow::Result<SentimentResult> {
        self.model.predict(&self.tokenizer, text)
    }

    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}

impl TextClassifier for SentimentAnalysisPipeline {
    fn predict(&self, text: &str) -> anyhow::Result<SentimentResult> {
        SentimentAnalysisPipeline::predict(self, text)
    }
}
