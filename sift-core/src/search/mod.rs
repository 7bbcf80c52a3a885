//! Query-to-corpus relevance search.
//!
//! TF-IDF scoring with additive title/tag substring boosts over an
//! immutable in-memory corpus. At the corpus sizes this engine targets
//! (tens of records) there is no inverted index and no per-query caching;
//! every call recomputes from scratch in microseconds.
//!
//! Threading:
//! - [`SearchIndex`] holds no interior mutability. All entry points take
//!   `&self` with stack-local working state, so a shared index serves
//!   concurrent callers without coordination.

mod api;
mod scoring;
mod stats;
mod types;

pub use stats::CorpusStats;
pub use types::SearchIndex;
pub use types::{
    FILTER_CANDIDATE_FACTOR, MAX_QUERY_LENGTH, MAX_SUGGESTIONS, TAG_BOOST, TITLE_BOOST,
};
