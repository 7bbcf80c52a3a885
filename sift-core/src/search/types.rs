//! Search index types and constants.

use rustc_hash::{FxHashMap, FxHashSet};
use sift_types::{CorpusError, DocId, SearchableItem};

use crate::analyzer::{TextNormalizer, Tokenizer};

/// Queries longer than this many bytes return no results. Document
/// frequency is recomputed per query, so scoring cost scales with query
/// length times corpus size; this bounds it.
pub const MAX_QUERY_LENGTH: usize = 1_000;

/// Additive score bonus when a query term is a substring of the title.
pub const TITLE_BOOST: f32 = 0.5;

/// Additive score bonus when a query term is a substring of any tag.
pub const TAG_BOOST: f32 = 0.3;

/// Filtered search ranks this many times `limit` candidates before
/// applying filters.
pub const FILTER_CANDIDATE_FACTOR: usize = 2;

/// Maximum number of entries returned by suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// Per-document scoring state, derived once at construction.
pub(crate) struct DocEntry {
    /// Term -> occurrence count over title + content + tags.
    pub counts: FxHashMap<String, u32>,
    /// Total token count (including repeats).
    pub token_total: u32,
    /// Lowercased title for substring boosts.
    pub title_lower: String,
    /// Lowercased tags for substring boosts and filters.
    pub tags_lower: Vec<String>,
}

/// TF-IDF relevance engine over an immutable corpus.
///
/// The corpus is validated and analyzed once in [`SearchIndex::new`];
/// every query entry point takes `&self` and keeps its working state on
/// the stack, so a shared index can serve concurrent callers without
/// coordination.
pub struct SearchIndex {
    pub(crate) items: Vec<SearchableItem>,
    pub(crate) docs: Vec<DocEntry>,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) tokenizer: Tokenizer,
}

impl SearchIndex {
    /// Builds an index over the given corpus.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::EmptyId`] or [`CorpusError::DuplicateId`]
    /// if the corpus records are not well formed.
    pub fn new(items: Vec<SearchableItem>) -> Result<Self, CorpusError> {
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
        }
        drop(seen);

        let normalizer = TextNormalizer::default();
        let tokenizer = Tokenizer::default();

        let mut norm_buf = String::with_capacity(256);
        let mut text_buf = String::with_capacity(256);
        let mut docs = Vec::with_capacity(items.len());

        for item in &items {
            text_buf.clear();
            text_buf.push_str(&item.title);
            text_buf.push(' ');
            text_buf.push_str(&item.content);
            for tag in &item.tags {
                text_buf.push(' ');
                text_buf.push_str(tag);
            }

            normalizer.normalize_into(&text_buf, &mut norm_buf);

            let mut counts: FxHashMap<String, u32> = FxHashMap::default();
            let mut token_total = 0u32;
            tokenizer.tokenize(&norm_buf, |text, _pos| {
                *counts.entry(text.to_string()).or_insert(0) += 1;
                token_total += 1;
            });

            docs.push(DocEntry {
                counts,
                token_total,
                title_lower: item.title.to_lowercase(),
                tags_lower: item.tags.iter().map(|t| t.to_lowercase()).collect(),
            });
        }

        tracing::debug!(documents = items.len(), "search index built");

        Ok(Self {
            items,
            docs,
            normalizer,
            tokenizer,
        })
    }

    /// Returns the number of documents in the corpus.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the corpus contains no documents.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Retrieves a corpus record by position.
    #[inline(always)]
    pub fn get(&self, doc: DocId) -> Option<&SearchableItem> {
        self.items.get(doc as usize)
    }
}
