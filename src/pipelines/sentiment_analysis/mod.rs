//! Sentiment analysis pipeline for classifying text emotional tone.
//!
//! Wraps a pretrained ModernBERT sequence-classification checkpoint behind a
//! builder-constructed pipeline: assets are fetched from the Hugging Face Hub
//! (or taken from local files), and `predict` maps one utterance to a label
//! plus a confidence score.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use sentiment_chat::pipelines::sentiment_analysis::*;
//!
//! # fn run() -> anyhow::Result<()> {
//! let pipeline = SentimentAnalysisPipelineBuilder::new(ModernBertSize::Base).build()?;
//!
//! let result = pipeline.predict("I love this product!")?;
//! println!("Sentiment: {} (confidence: {:.2})", result.label, result.score);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod pipeline;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use pipeline::{SentimentAnalysisPipeline, SentimentResult};

pub use crate::models::ModernBertSize;

pub use anyhow::Result;
