//! Recommendation entry points.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use sift_types::{ContentItem, ContentKind, CorpusError, DocId, Scored};
use smallvec::SmallVec;

use super::similarity::{
    content_similarity, jaccard_similarity, recency_from, RECENCY_HORIZON_DAYS,
    TRENDING_HORIZON_DAYS,
};

/// Weight of user-tag overlap in personalized scoring.
pub const PERSONAL_TAG_WEIGHT: f32 = 0.5;
/// Weight of popularity in personalized scoring.
pub const PERSONAL_POPULARITY_WEIGHT: f32 = 0.3;
/// Weight of freshness in personalized scoring.
pub const PERSONAL_RECENCY_WEIGHT: f32 = 0.2;

/// Weight of popularity in trending scoring.
pub const TRENDING_POPULARITY_WEIGHT: f32 = 0.6;
/// Weight of freshness in trending scoring.
pub const TRENDING_RECENCY_WEIGHT: f32 = 0.4;

#[inline(always)]
fn by_rank(a: &Scored, b: &Scored) -> core::cmp::Ordering {
    // Descending score, ascending corpus position on ties.
    b.score.total_cmp(&a.score).then_with(|| a.doc.cmp(&b.doc))
}

/// Item-to-item recommendation engine over an immutable corpus.
///
/// Like [`SearchIndex`](crate::SearchIndex), the corpus is validated once
/// at construction; every entry point takes `&self` and is pure, so a
/// shared engine serves concurrent callers without coordination. Entry
/// points that depend on the current time have `_at` variants taking an
/// explicit instant (the plain forms use [`Utc::now`]).
pub struct Recommender {
    pub(crate) items: Vec<ContentItem>,
}

impl Recommender {
    /// Builds an engine over the given corpus.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::EmptyId`], [`CorpusError::DuplicateId`], or
    /// [`CorpusError::PopularityOutOfRange`] if the records are not well
    /// formed.
    pub fn new(items: Vec<ContentItem>) -> Result<Self, CorpusError> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (index, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(CorpusError::EmptyId { index });
            }
            if !seen.insert(&item.id) {
                return Err(CorpusError::DuplicateId {
                    id: item.id.clone(),
                });
            }
            if item.popularity > 100 {
                return Err(CorpusError::PopularityOutOfRange {
                    id: item.id.clone(),
                    value: item.popularity,
                });
            }
        }
        drop(seen);

        tracing::debug!(items = items.len(), "recommendation engine built");
        Ok(Self { items })
    }

    /// Returns the number of items in the corpus.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the corpus contains no items.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Retrieves a corpus record by position.
    #[inline(always)]
    pub fn get(&self, doc: DocId) -> Option<&ContentItem> {
        self.items.get(doc as usize)
    }

    /// Items most similar to the given one, best first.
    ///
    /// The item itself is never part of the result; an unknown id yields
    /// an empty list.
    pub fn related(&self, item_id: &str, limit: usize) -> Vec<ContentItem> {
        let Some(anchor_idx) = self.items.iter().position(|i| i.id == item_id) else {
            return Vec::new();
        };
        let anchor = &self.items[anchor_idx];

        let scored = self
            .items
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != anchor_idx)
            .map(|(idx, item)| Scored::new(idx as DocId, content_similarity(anchor, item)));

        self.take_top(scored, limit)
    }

    /// Items matching a user's tag profile, most recent views excluded.
    pub fn personalized(
        &self,
        user_tags: &[String],
        viewed_ids: &[String],
        limit: usize,
    ) -> Vec<ContentItem> {
        self.personalized_at(user_tags, viewed_ids, limit, Utc::now())
    }

    /// [`Recommender::personalized`] at an explicit instant.
    pub fn personalized_at(
        &self,
        user_tags: &[String],
        viewed_ids: &[String],
        limit: usize,
        now: DateTime<Utc>,
    ) -> Vec<ContentItem> {
        let viewed: FxHashSet<&str> = viewed_ids.iter().map(String::as_str).collect();

        let scored = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| !viewed.contains(item.id.as_str()))
            .map(|(idx, item)| {
                let score = PERSONAL_TAG_WEIGHT * jaccard_similarity(&item.tags, user_tags)
                    + PERSONAL_POPULARITY_WEIGHT * (item.popularity as f32 / 100.0)
                    + PERSONAL_RECENCY_WEIGHT
                        * recency_from(item.created_at, now, RECENCY_HORIZON_DAYS);
                Scored::new(idx as DocId, score)
            });

        self.take_top(scored, limit)
    }

    /// Popular, recently published items.
    pub fn trending(&self, limit: usize) -> Vec<ContentItem> {
        self.trending_at(limit, Utc::now())
    }

    /// [`Recommender::trending`] at an explicit instant.
    pub fn trending_at(&self, limit: usize, now: DateTime<Utc>) -> Vec<ContentItem> {
        let scored = self.items.iter().enumerate().map(|(idx, item)| {
            let score = TRENDING_POPULARITY_WEIGHT * (item.popularity as f32 / 100.0)
                + TRENDING_RECENCY_WEIGHT
                    * recency_from(item.created_at, now, TRENDING_HORIZON_DAYS);
            Scored::new(idx as DocId, score)
        });

        self.take_top(scored, limit)
    }

    /// Popularity-ordered items biased toward category/kind variety.
    ///
    /// A first greedy pass over the popularity-sorted corpus admits only
    /// items whose `(category, kind)` combination has not been selected
    /// yet; a second pass fills the remaining slots in pure popularity
    /// order, skipping items already chosen.
    pub fn diverse(&self, exclude_ids: &[String], limit: usize) -> Vec<ContentItem> {
        if limit == 0 {
            return Vec::new();
        }

        let excluded: FxHashSet<&str> = exclude_ids.iter().map(String::as_str).collect();

        let mut order: Vec<usize> = (0..self.items.len())
            .filter(|&idx| !excluded.contains(self.items[idx].id.as_str()))
            .collect();
        order.sort_unstable_by(|&a, &b| {
            self.items[b]
                .popularity
                .cmp(&self.items[a].popularity)
                .then_with(|| a.cmp(&b))
        });

        let mut selected: Vec<usize> = Vec::with_capacity(limit.min(order.len()));
        let mut picked = vec![false; self.items.len()];
        let mut seen_combos: FxHashSet<(&str, ContentKind)> = FxHashSet::default();

        for &idx in &order {
            if selected.len() == limit {
                break;
            }
            let item = &self.items[idx];
            if seen_combos.insert((item.category.as_str(), item.kind)) {
                selected.push(idx);
                picked[idx] = true;
            }
        }

        for &idx in &order {
            if selected.len() == limit {
                break;
            }
            if !picked[idx] {
                selected.push(idx);
                picked[idx] = true;
            }
        }

        selected
            .into_iter()
            .map(|idx| self.items[idx].clone())
            .collect()
    }

    /// Ranks scored candidates and clones out the top `limit` records.
    fn take_top(
        &self,
        scored: impl Iterator<Item = Scored>,
        limit: usize,
    ) -> Vec<ContentItem> {
        let mut results: SmallVec<[Scored; 64]> = scored.collect();
        if results.len() > limit {
            results.select_nth_unstable_by(limit, by_rank);
            results.truncate(limit);
        }
        results.sort_unstable_by(by_rank);
        results
            .iter()
            .filter_map(|s| self.get(s.doc).cloned())
            .collect()
    }
}
