//! Corpus statistics.

use rustc_hash::FxHashSet;

use super::types::SearchIndex;

/// A snapshot of corpus statistics.
#[derive(Debug, Clone, Copy)]
pub struct CorpusStats {
    /// Number of documents in the corpus.
    pub documents: usize,
    /// Number of distinct terms across all documents.
    pub distinct_terms: usize,
    /// Total token count, repeats included.
    pub total_tokens: usize,
}

impl SearchIndex {
    /// Computes corpus statistics.
    pub fn stats(&self) -> CorpusStats {
        let mut vocabulary: FxHashSet<&str> = FxHashSet::default();
        let mut total_tokens = 0usize;

        for doc in &self.docs {
            for term in doc.counts.keys() {
                vocabulary.insert(term.as_str());
            }
            total_tokens += doc.token_total as usize;
        }

        CorpusStats {
            documents: self.docs.len(),
            distinct_terms: vocabulary.len(),
            total_tokens,
        }
    }
}

impl core::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} docs, {} terms, {} tokens",
            self.documents, self.distinct_terms, self.total_tokens
        )
    }
}
