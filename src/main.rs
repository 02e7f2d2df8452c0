use anyhow::Result;
use tracing_subscriber::EnvFilter;

use sentiment_chat::pipelines::sentiment_analysis::{
    ModernBertSize, SentimentAnalysisPipelineBuilder,
};
use sentiment_chat::shell::Shell;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only the conversation.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("Loading sentiment analysis model...");
    let pipeline = SentimentAnalysisPipelineBuilder::new(ModernBertSize::Base).build()?;
    println!("Model loaded successfully!\n");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(pipeline).run(stdin.lock(), stdout.lock())
}
