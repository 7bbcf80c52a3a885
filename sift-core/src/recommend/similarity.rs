//! Item-to-item similarity scoring.
//!
//! The pairwise score is a weighted sum of tag overlap, category and kind
//! equality, recency proximity, and average popularity. Weights sum to 1.0,
//! but note the popularity term: the averaged 0-100 value is divided by 100
//! *inside* its 10% weight, so the term tops out at 0.1. Downstream
//! rankings depend on that scaling; do not "fix" it without rescoring.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use sift_types::ContentItem;

/// Weight of tag Jaccard similarity.
pub const TAG_WEIGHT: f32 = 0.4;
/// Weight of exact category equality.
pub const CATEGORY_WEIGHT: f32 = 0.3;
/// Weight of content kind equality.
pub const KIND_WEIGHT: f32 = 0.1;
/// Weight of publication recency proximity.
pub const RECENCY_WEIGHT: f32 = 0.1;
/// Weight of average popularity.
pub const POPULARITY_WEIGHT: f32 = 0.1;

/// Days after which recency decays to zero for pairwise and
/// personalized scoring.
pub const RECENCY_HORIZON_DAYS: f32 = 365.0;
/// Shorter horizon used by trending scoring.
pub const TRENDING_HORIZON_DAYS: f32 = 90.0;

const SECONDS_PER_DAY: f32 = 86_400.0;

/// Case-insensitive intersection-over-union of two tag lists.
///
/// Returns `0.0` when the union is empty.
///
/// ```
/// use sift_core::recommend::jaccard_similarity;
///
/// let a = vec!["AI".to_string(), "React".to_string()];
/// let b = vec!["ai".to_string(), "react".to_string()];
/// assert_eq!(jaccard_similarity(&a, &b), 1.0);
/// ```
pub fn jaccard_similarity(a: &[String], b: &[String]) -> f32 {
    let a: FxHashSet<String> = a.iter().map(|t| t.to_lowercase()).collect();
    let b: FxHashSet<String> = b.iter().map(|t| t.to_lowercase()).collect();

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();
    intersection as f32 / union as f32
}

/// Proximity of two publication dates: `max(0, 1 - |days| / 365)`.
pub fn recency_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f32 {
    let days = (a - b).num_seconds().abs() as f32 / SECONDS_PER_DAY;
    (1.0 - days / RECENCY_HORIZON_DAYS).max(0.0)
}

/// Freshness of an item at `now`: `max(0, 1 - days_since / horizon)`.
pub fn recency_from(created_at: DateTime<Utc>, now: DateTime<Utc>, horizon_days: f32) -> f32 {
    let days = (now - created_at).num_seconds() as f32 / SECONDS_PER_DAY;
    (1.0 - days / horizon_days).max(0.0)
}

/// Weighted pairwise similarity of two content items.
///
/// `0.4 * jaccard(tags) + 0.3 * [category ==] + 0.1 * [kind ==]
///  + 0.1 * recency + 0.1 * avg_popularity / 100`
pub fn content_similarity(a: &ContentItem, b: &ContentItem) -> f32 {
    let tags = jaccard_similarity(&a.tags, &b.tags);
    let category = if a.category == b.category { 1.0 } else { 0.0 };
    let kind = if a.kind == b.kind { 1.0 } else { 0.0 };
    let recency = recency_between(a.created_at, b.created_at);
    let avg_popularity = (a.popularity as f32 + b.popularity as f32) / 2.0;

    TAG_WEIGHT * tags
        + CATEGORY_WEIGHT * category
        + KIND_WEIGHT * kind
        + RECENCY_WEIGHT * recency
        + POPULARITY_WEIGHT * (avg_popularity / 100.0)
}
