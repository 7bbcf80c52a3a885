//! Sift core — in-memory content relevance and recommendation engine.
//!
//! Sift ranks a small, immutable corpus of content records against free-text
//! queries (TF-IDF with title/tag boosts) and scores item-to-item similarity
//! for recommendations (tag Jaccard, category/kind match, recency decay,
//! popularity).
//!
//! The corpus is injected at construction and validated once; every query
//! entry point takes `&self` and computes from scratch over local state, so
//! engines are safe to share across threads without coordination.

pub mod analyzer;
pub mod recommend;
pub mod search;

pub use recommend::Recommender;
pub use search::{CorpusStats, SearchIndex};
