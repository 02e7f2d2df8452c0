pub mod sentiment_modern_bert;

pub use sentiment_modern_bert::{ModernBertSize, SentimentModernBertModel};
