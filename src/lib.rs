mod loaders;
pub mod models;
pub mod pipelines;
pub mod shell;

// Re-export the handful of types needed to stand up the interactive shell so
// binaries and tests can import everything from the crate root instead of
// spelling out the full module paths.

pub use models::sentiment_modern_bert::ModernBertSize;
pub use pipelines::sentiment_analysis::{
    SentimentAnalysisPipeline, SentimentAnalysisPipelineBuilder, SentimentResult,
};
pub use pipelines::TextClassifier;
pub use shell::Shell;
