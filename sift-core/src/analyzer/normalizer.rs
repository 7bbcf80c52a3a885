//! Query and document text normalization.
//!
//! Produces the canonical form the tokenizer operates on: lowercase word
//! characters separated by single spaces. "Word" here means ASCII
//! alphanumerics plus underscore; everything else (punctuation, non-ASCII,
//! whitespace) is treated as a separator.

/// Text normalizer for the scoring pipeline.
///
/// Performs the following operations:
/// - Lowercases ASCII letters
/// - Replaces every non-word character with a space
/// - Collapses runs of separators into single spaces
/// - Removes leading/trailing spaces
///
/// Deterministic and idempotent: normalizing twice yields the same string.
///
/// # Examples
///
/// ```
/// use sift_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("Hello, World!"), "hello world");
/// assert_eq!(normalizer.normalize("  TF-IDF  scoring  "), "tf idf scoring");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

#[inline(always)]
const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl TextNormalizer {
    /// Normalizes text into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when
    /// necessary. Clears the buffer before writing.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        // Multi-byte UTF-8 sequences consist entirely of bytes >= 0x80,
        // which are never word bytes, so a byte-wise scan stays on char
        // boundaries: every pushed byte is ASCII.
        let mut pending_space = false;
        for &b in input.as_bytes() {
            if is_word_byte(b) {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(b.to_ascii_lowercase() as char);
            } else {
                pending_space = true;
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::default().normalize(input)
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(norm("HELLO"), "hello");
        assert_eq!(norm("HeLlO"), "hello");
        assert_eq!(norm("123 ABC"), "123 abc");
    }

    #[test]
    fn ascii_full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
        let lower: String = (b'a'..=b'z').map(|b| b as char).collect();
        assert_eq!(norm(&upper), lower);
    }

    #[test]
    fn punctuation_becomes_separator() {
        assert_eq!(norm("foo-bar.baz"), "foo bar baz");
        assert_eq!(norm("don't"), "don t");
        assert_eq!(norm("C++"), "c");
    }

    #[test]
    fn underscore_is_a_word_character() {
        assert_eq!(norm("snake_case"), "snake_case");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(norm("hello   world"), "hello world");
        assert_eq!(norm("hello\t\nworld"), "hello world");
        assert_eq!(norm("hello \r\n world"), "hello world");
    }

    #[test]
    fn leading_and_trailing_stripped() {
        assert_eq!(norm("   hello   "), "hello");
        assert_eq!(norm("...hello!!!"), "hello");
    }

    #[test]
    fn only_separators() {
        assert_eq!(norm("   "), "");
        assert_eq!(norm("!!! --- ???"), "");
    }

    #[test]
    fn no_double_spaces() {
        let out = norm("hello,  world -- test");
        assert!(!out.contains("  "));
    }

    #[test]
    fn non_ascii_becomes_separator() {
        assert_eq!(norm("café au lait"), "caf au lait");
        assert_eq!(norm("你好 world"), "world");
        assert_eq!(norm("naïve"), "na ve");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn single_char() {
        assert_eq!(norm("A"), "a");
    }

    #[test]
    fn idempotent() {
        let samples = ["hello world", "Foo -- Bar", "TF-IDF: a primer", "a_b c"];
        let n = TextNormalizer::default();
        for s in samples {
            let once = n.normalize(s);
            let twice = n.normalize(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn output_is_ascii() {
        for input in ["café", "İstanbul", "hello🌍world", "ПРИВЕТ"] {
            assert!(norm(input).is_ascii());
        }
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = TextNormalizer::default();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into("WORLD", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn buffer_grows_when_needed() {
        let normalizer = TextNormalizer::default();
        let mut buf = String::new();
        let long = "A".repeat(1024);
        normalizer.normalize_into(&long, &mut buf);
        assert_eq!(buf.len(), 1024);
    }
}
