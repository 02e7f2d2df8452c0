//! The interactive read-analyze-print loop.
//!
//! Reads one utterance per line, forwards it to a [`TextClassifier`], and
//! prints the predicted sentiment with its confidence until an exit token or
//! end of input is reached. Each utterance is processed independently; the
//! shell keeps no history across iterations.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::pipelines::TextClassifier;

/// Tokens that end the interactive loop, matched case-insensitively after
/// trimming surrounding whitespace.
pub const EXIT_TOKENS: [&str; 3] = ["quit", "exit", "q"];

/// Interactive sentiment shell over any [`TextClassifier`].
pub struct Shell<C> {
    classifier: C,
}

impl<C: TextClassifier> Shell<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Runs the loop until an exit token is entered or `input` is exhausted.
    ///
    /// Empty lines reprompt without touching the classifier; every other line
    /// is classified exactly once and its result printed before the next
    /// prompt. Classifier errors propagate out and end the loop.
    pub fn run(&self, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
        print_banner(&mut output)?;

        let mut line = String::new();
        loop {
            write!(output, "You: ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // End of input behaves like an exit request; the prompt line
                // is still open, so close it first.
                writeln!(output)?;
                writeln!(output, "\nGoodbye! 👋")?;
                return Ok(());
            }

            let utterance = line.trim();

            if is_exit_token(utterance) {
                writeln!(output, "\nGoodbye! 👋")?;
                return Ok(());
            }

            if utterance.is_empty() {
                writeln!(output, "Please enter some text.")?;
                writeln!(output)?;
                continue;
            }

            let result = self.classifier.predict(utterance)?;
            debug!(label = %result.label, score = result.score, "utterance classified");

            writeln!(output, "Sentiment: {}", format_sentiment(&result.label))?;
            writeln!(output, "Confidence: {}", format_confidence(result.score))?;
            writeln!(output)?;
        }
    }
}

fn print_banner(output: &mut impl Write) -> Result<()> {
    writeln!(output, "{}", "=".repeat(50))?;
    writeln!(output, "  Sentiment Analysis Chatbot")?;
    writeln!(output, "{}", "=".repeat(50))?;
    writeln!(output, "Type any text to analyze its sentiment")?;
    writeln!(output, "Type 'quit' to exit")?;
    writeln!(output)?;
    Ok(())
}

fn is_exit_token(input: &str) -> bool {
    EXIT_TOKENS
        .iter()
        .any(|token| input.eq_ignore_ascii_case(token))
}

/// Maps a raw classifier label to its display form. Labels outside the known
/// vocabulary pass through unchanged.
fn format_sentiment(label: &str) -> String {
    if label.eq_ignore_ascii_case("positive") {
        "Positive 😊".to_string()
    } else if label.eq_ignore_ascii_case("negative") {
        "Negative 😔".to_string()
    } else {
        label.to_string()
    }
}

/// Renders a confidence score in [0,1] as a percentage with two decimals.
fn format_confidence(score: f32) -> String {
    format!("{:.2}%", score * 100.0)
}
