// Integration tests for the interactive shell
// The shell is driven through the public API with a deterministic fake
// classifier, so none of these touch a real model.

use std::cell::RefCell;
use std::io::Cursor;

use sentiment_chat::pipelines::TextClassifier;
use sentiment_chat::shell::Shell;
use sentiment_chat::SentimentResult;

struct FakeClassifier {
    label: &'static str,
    score: f32,
    calls: RefCell<Vec<String>>,
}

impl FakeClassifier {
    fn new(label: &'static str, score: f32) -> Self {
        Self {
            label,
            score,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl TextClassifier for FakeClassifier {
    fn predict(&self, text: &str) -> anyhow::Result<SentimentResult> {
        self.calls.borrow_mut().push(text.to_string());
        Ok(SentimentResult {
            label: self.label.to_string(),
            score: self.score,
        })
    }
}

struct FailingClassifier;

impl TextClassifier for FailingClassifier {
    fn predict(&self, _text: &str) -> anyhow::Result<SentimentResult> {
        anyhow::bail!("inference backend unavailable")
    }
}

fn run_shell<C: TextClassifier>(classifier: C, input: &str) -> anyhow::Result<String> {
    let mut output = Vec::new();
    let shell = Shell::new(classifier);
    shell.run(Cursor::new(input), &mut output)?;
    Ok(String::from_utf8(output).expect("shell output is valid utf-8"))
}

#[test]
fn classifies_utterance_exactly_once_and_prints_result() -> anyhow::Result<()> {
    let classifier = FakeClassifier::new("POSITIVE", 0.97);
    let out = run_shell(&classifier, "I love this!\nquit\n")?;

    assert_eq!(classifier.calls(), vec!["I love this!".to_string()]);
    assert!(out.contains("Sentiment: Positive 😊"));
    assert!(out.contains("Confidence: 97.00%"));

    // The result is printed before the next prompt.
    let result_at = out.find("Sentiment:").unwrap();
    let last_prompt_at = out.rfind("You: ").unwrap();
    assert!(result_at < last_prompt_at);
    Ok(())
}

#[test]
fn exit_tokens_terminate_without_classifying() -> anyhow::Result<()> {
    for token in ["quit", "exit", "q", "QUIT", "Exit", "  q  "] {
        let classifier = FakeClassifier::new("POSITIVE", 0.9);
        let out = run_shell(&classifier, &format!("{token}\n"))?;

        assert!(out.contains("Goodbye! 👋"), "no farewell for {token:?}");
        assert!(classifier.calls().is_empty(), "classified on {token:?}");
    }
    Ok(())
}

#[test]
fn farewell_is_printed_after_the_loop_ends() -> anyhow::Result<()> {
    let classifier = FakeClassifier::new("POSITIVE", 0.9);
    let out = run_shell(&classifier, "QUIT\n")?;

    // Nothing follows the farewell, in particular no further prompt.
    assert_eq!(out.matches("Goodbye! 👋").count(), 1);
    assert!(out.trim_end().ends_with("Goodbye! 👋"));
    Ok(())
}

#[test]
fn blank_input_reprompts_without_classifying() -> anyhow::Result<()> {
    let classifier = FakeClassifier::new("POSITIVE", 0.9);
    let out = run_shell(&classifier, "   \n\nquit\n")?;

    assert_eq!(out.matches("Please enter some text.").count(), 2);
    assert!(classifier.calls().is_empty());
    Ok(())
}

#[test]
fn negative_label_renders_negative_sentiment() -> anyhow::Result<()> {
    let classifier = FakeClassifier::new("NEGATIVE", 0.9998);
    let out = run_shell(&classifier, "This is terrible.\nquit\n")?;

    assert!(out.contains("Sentiment: Negative 😔"));
    assert!(out.contains("Confidence: 99.98%"));
    Ok(())
}

#[test]
fn full_confidence_renders_with_two_decimals() -> anyhow::Result<()> {
    let classifier = FakeClassifier::new("POSITIVE", 1.0);
    let out = run_shell(&classifier, "Perfect.\nquit\n")?;

    assert!(out.contains("Confidence: 100.00%"));
    Ok(())
}

#[test]
fn unknown_label_passes_through_raw() -> anyhow::Result<()> {
    let classifier = FakeClassifier::new("neutral", 0.62);
    let out = run_shell(&classifier, "It is a product.\nquit\n")?;

    assert!(out.contains("Sentiment: neutral"));
    assert!(out.contains("Confidence: 62.00%"));
    Ok(())
}

#[test]
fn banner_is_printed_once_and_prompts_repeat() -> anyhow::Result<()> {
    let classifier = FakeClassifier::new("POSITIVE", 0.8);
    let out = run_shell(&classifier, "one\ntwo\nquit\n")?;

    assert_eq!(out.matches("Sentiment Analysis Chatbot").count(), 1);
    assert_eq!(out.matches("You: ").count(), 3);
    assert_eq!(classifier.calls(), vec!["one".to_string(), "two".to_string()]);
    Ok(())
}

#[test]
fn utterances_are_trimmed_before_classification() -> anyhow::Result<()> {
    let classifier = FakeClassifier::new("POSITIVE", 0.8);
    run_shell(&classifier, "  spaced out  \nquit\n")?;

    assert_eq!(classifier.calls(), vec!["spaced out".to_string()]);
    Ok(())
}

#[test]
fn end_of_input_terminates_the_loop() -> anyhow::Result<()> {
    let classifier = FakeClassifier::new("POSITIVE", 0.8);
    let out = run_shell(&classifier, "hello\n")?;

    assert_eq!(classifier.calls(), vec!["hello".to_string()]);
    assert!(out.contains("Goodbye! 👋"));
    Ok(())
}

#[test]
fn classifier_errors_propagate_out_of_the_loop() {
    let mut output = Vec::new();
    let shell = Shell::new(FailingClassifier);
    let err = shell
        .run(Cursor::new("hello\n"), &mut output)
        .expect_err("classifier failure should propagate");

    assert!(err.to_string().contains("inference backend unavailable"));
}
