//! TF-IDF scoring.
//!
//! Term frequency is occurrence count over total token count per document;
//! inverse document frequency is `ln(N / df)` computed over the whole
//! corpus per query. Query terms are deliberately not deduplicated: a
//! repeated word contributes once per occurrence, weighting it
//! proportionally.

use rustc_hash::FxHashMap;
use sift_types::{DocId, Scored};
use smallvec::SmallVec;

use super::types::{SearchIndex, TAG_BOOST, TITLE_BOOST};

impl SearchIndex {
    /// Tokenizes a raw query into scoring terms, duplicates preserved.
    pub(crate) fn query_terms(&self, query: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(query);
        let mut terms = Vec::new();
        self.tokenizer.tokenize(&normalized, |text, _pos| {
            terms.push(text.to_string());
        });
        terms
    }

    /// Number of documents whose token set contains each distinct term.
    pub(crate) fn document_frequency<'t>(
        &self,
        terms: &'t [String],
    ) -> FxHashMap<&'t str, u32> {
        let mut df: FxHashMap<&str, u32> = FxHashMap::default();
        for term in terms {
            df.entry(term.as_str()).or_insert_with(|| {
                self.docs
                    .iter()
                    .filter(|doc| doc.counts.contains_key(term.as_str()))
                    .count() as u32
            });
        }
        df
    }

    /// Scores every document against the query terms.
    ///
    /// Documents with a zero total score are omitted rather than reported
    /// as zero; documents with an empty token list are excluded up front
    /// (their term frequency would be undefined).
    ///
    /// `idf` is zero when a term occurs in every document; such terms
    /// contribute nothing, which is accepted as-is rather than clamped.
    pub(crate) fn score_terms(&self, terms: &[String]) -> SmallVec<[Scored; 64]> {
        let n = self.docs.len() as f32;
        let df = self.document_frequency(terms);

        let mut out: SmallVec<[Scored; 64]> = SmallVec::new();
        for (idx, doc) in self.docs.iter().enumerate() {
            if doc.token_total == 0 {
                continue;
            }

            let mut score = 0.0f32;
            for term in terms {
                if let Some(&count) = doc.counts.get(term.as_str()) {
                    let tf = count as f32 / doc.token_total as f32;
                    let idf = (n / df[term.as_str()] as f32).ln();
                    score += tf * idf;
                }
                if doc.title_lower.contains(term.as_str()) {
                    score += TITLE_BOOST;
                }
                if doc.tags_lower.iter().any(|tag| tag.contains(term.as_str())) {
                    score += TAG_BOOST;
                }
            }

            if score > 0.0 {
                out.push(Scored::new(idx as DocId, score));
            }
        }
        out
    }
}
