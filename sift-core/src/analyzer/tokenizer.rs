//! Streaming tokenizer.
//!
//! Splits normalized text into scoring tokens. Tokens are slices of the
//! input (no allocation) and are emitted via callback together with their
//! position among the emitted tokens.
//!
//! ## The input contract
//!
//! The tokenizer expects **pre-normalized** input from
//! [`TextNormalizer`](crate::analyzer::TextNormalizer):
//! - ASCII-only text, all lowercase
//! - No leading or trailing whitespace
//! - No consecutive spaces between words
//!
//! Violations panic in debug builds.
//!
//! ## Short-token policy
//!
//! Tokens of byte length 2 or less are discarded ([`MIN_TOKEN_LEN`]).
//! There is no stemming and no stopword list; dropping one- and two-byte
//! tokens is the only filtering the pipeline performs.

use core::str;

use memchr::memchr_iter;

/// Minimum byte length for an emitted token.
pub const MIN_TOKEN_LEN: usize = 3;

/// Streaming tokenizer - splits normalized text into tokens.
///
/// Tokens are not copied; they are slices (`&str`) into the original input
/// string, emitted one by one via a callback together with their position.
///
/// # Example
///
/// ```
/// use sift_core::analyzer::Tokenizer;
///
/// let tokenizer = Tokenizer::default();
/// let mut tokens = Vec::new();
///
/// tokenizer.tokenize("getting started with agentic ai", |text, pos| {
///     tokens.push((text, pos));
/// });
///
/// // "ai" is below the minimum token length and is dropped
/// assert_eq!(
///     tokens,
///     vec![("getting", 0), ("started", 1), ("with", 2), ("agentic", 3)]
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes normalized input and emits `(text, position)`.
    ///
    /// Position counts emitted tokens only; discarded short tokens do not
    /// advance it.
    #[inline(always)]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace — normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace — normalizer contract violated"
        );

        debug_assert!(
            !normalized.contains("  "),
            "tokenizer: consecutive spaces — normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if i - start >= MIN_TOKEN_LEN {
                // SAFETY: the normalizer contract guarantees ASCII-only input,
                // so any byte range is a valid UTF-8 subslice.
                let text = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                emit(text, pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if bytes.len() - start >= MIN_TOKEN_LEN {
            // SAFETY: same invariant as above.
            let text = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            emit(text, pos);
        }
    }
}
