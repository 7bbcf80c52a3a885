//! Item-to-item recommendation scoring.
//!
//! Structurally a sibling of the [`search`](crate::search) module: the same
//! immutable-corpus model, but documents are scored against each other
//! (or against a user profile) instead of against a query.

mod engine;
mod similarity;

pub use engine::{
    Recommender, PERSONAL_POPULARITY_WEIGHT, PERSONAL_RECENCY_WEIGHT, PERSONAL_TAG_WEIGHT,
    TRENDING_POPULARITY_WEIGHT, TRENDING_RECENCY_WEIGHT,
};
pub use similarity::{
    content_similarity, jaccard_similarity, recency_between, recency_from, CATEGORY_WEIGHT,
    KIND_WEIGHT, POPULARITY_WEIGHT, RECENCY_HORIZON_DAYS, RECENCY_WEIGHT, TAG_WEIGHT,
    TRENDING_HORIZON_DAYS,
};
