//! Query entry points: ranked search, filtered search, suggestions.

use rustc_hash::FxHashSet;
use sift_types::{Scored, SearchFilters, SearchableItem};

use super::types::{
    SearchIndex, FILTER_CANDIDATE_FACTOR, MAX_QUERY_LENGTH, MAX_SUGGESTIONS,
};

#[inline(always)]
fn by_rank(a: &Scored, b: &Scored) -> core::cmp::Ordering {
    // Descending score, ascending corpus position on ties. Deterministic
    // total order, so an unstable sort gives stable output.
    b.score.total_cmp(&a.score).then_with(|| a.doc.cmp(&b.doc))
}

impl SearchIndex {
    /// Scores and ranks the corpus against a query.
    ///
    /// Returns the full ranked list; documents that match no term are
    /// omitted entirely. Empty and whitespace-only queries return an
    /// empty list without scoring, as do queries longer than
    /// [`MAX_QUERY_LENGTH`] bytes (scoring cost grows with query length
    /// times corpus size, so oversized input is rejected up front).
    pub fn scored(&self, query: &str) -> Vec<Scored> {
        if self.is_empty() || query.trim().is_empty() || query.len() > MAX_QUERY_LENGTH {
            return Vec::new();
        }

        let terms = self.query_terms(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut results = self.score_terms(&terms);
        results.sort_unstable_by(by_rank);

        tracing::debug!(
            terms = terms.len(),
            candidates = results.len(),
            "query scored"
        );

        results.into_vec()
    }

    /// Searches for the `limit` most relevant records.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchableItem> {
        if limit == 0 {
            return Vec::new();
        }

        let mut results = self.scored(query);
        results.truncate(limit);
        results
            .iter()
            .filter_map(|s| self.get(s.doc).cloned())
            .collect()
    }

    /// Searches, then applies kind and tag filters.
    ///
    /// Ranks `2 * limit` candidates first and filters afterwards, so the
    /// result can hold fewer than `limit` records even when more of the
    /// corpus would satisfy the filters. Callers that need exhaustive
    /// filtering should filter over [`SearchIndex::scored`] themselves.
    pub fn search_filtered(
        &self,
        query: &str,
        filters: &SearchFilters,
        limit: usize,
    ) -> Vec<SearchableItem> {
        let mut candidates =
            self.search(query, limit.saturating_mul(FILTER_CANDIDATE_FACTOR));

        if let Some(kind) = filters.kind {
            candidates.retain(|item| item.kind == kind);
        }

        if let Some(tags) = &filters.tags {
            let wanted: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
            candidates.retain(|item| {
                item.tags.iter().any(|tag| {
                    let tag = tag.to_lowercase();
                    wanted.iter().any(|w| tag.contains(w.as_str()))
                })
            });
        }

        candidates.truncate(limit);
        candidates
    }

    /// Returns up to five title/tag suggestions containing the query.
    ///
    /// Candidates are visited in corpus order, titles before tags, with
    /// exact-string deduplication; entries case-insensitively equal to the
    /// query are skipped. Not relevance-ranked.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut out = Vec::new();

        let candidates = self
            .items
            .iter()
            .map(|item| &item.title)
            .chain(self.items.iter().flat_map(|item| item.tags.iter()));

        for candidate in candidates {
            if out.len() == MAX_SUGGESTIONS {
                break;
            }
            if !seen.insert(candidate.as_str()) {
                continue;
            }
            let lower = candidate.to_lowercase();
            if lower.contains(&needle) && lower != needle {
                out.push(candidate.clone());
            }
        }

        out
    }
}
