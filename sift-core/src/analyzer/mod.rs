//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Cleans and normalizes raw text
//! - **Tokenizer**: Splits normalized text into scoring tokens

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use tokenizer::{Tokenizer, MIN_TOKEN_LEN};

/// Runs the full pipeline over raw text, collecting owned tokens.
///
/// Convenience for callers that do not manage their own buffers; the
/// engine itself composes [`TextNormalizer`] and [`Tokenizer`] directly
/// to reuse allocations during corpus construction.
pub fn analyze(input: &str) -> Vec<String> {
    let normalized = TextNormalizer::default().normalize(input);
    let mut out = Vec::new();
    Tokenizer::default().tokenize(&normalized, |text, _pos| {
        out.push(text.to_string());
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_lowercases_and_splits() {
        assert_eq!(analyze("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn analyze_drops_short_tokens() {
        // "ai" and "of" are two characters and must be discarded
        assert_eq!(analyze("the AI of tomorrow"), vec!["the", "tomorrow"]);
    }

    #[test]
    fn analyze_empty_input() {
        assert!(analyze("").is_empty());
        assert!(analyze("  \t\n ").is_empty());
    }

    #[test]
    fn analyze_is_deterministic() {
        let a = analyze("Agentic AI: a Tutorial");
        let b = analyze("Agentic AI: a Tutorial");
        assert_eq!(a, b);
    }
}
