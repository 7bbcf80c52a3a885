//! Core types for the Sift content relevance engine.
//!
//! This crate provides the data model shared across the Sift ecosystem.
//! Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: Core and demo share the same records
//! - **Clean boundaries**: No circular dependencies between crates
//! - **Stable serialization**: serde derives live with the types they cover

#![warn(missing_docs)]

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Positional document identifier inside one immutable corpus.
///
/// Corpora in Sift hold at most a few thousand records, so a 32-bit
/// index is plenty while keeping result types compact.
pub type DocId = u32;

/// Closed set of content kinds handled by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Portfolio project entry.
    Project,
    /// Blog post.
    Blog,
    /// Certification record.
    Certification,
    /// Skill entry.
    Skill,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentKind::Project => "project",
            ContentKind::Blog => "blog",
            ContentKind::Certification => "certification",
            ContentKind::Skill => "skill",
        };
        f.write_str(name)
    }
}

/// A single record in the search corpus.
///
/// The corpus is defined once at engine construction and never mutated;
/// there is no insert/update/delete path by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchableItem {
    /// Unique identifier across the corpus.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free text body used for scoring.
    pub content: String,
    /// Content kind.
    pub kind: ContentKind,
    /// Destination link.
    pub url: String,
    /// Unordered category tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A record in the recommendation corpus.
///
/// Extends [`SearchableItem`] with the fields the recommendation scorers
/// need: a single category, a 0-100 popularity value, and a creation date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique identifier across the corpus.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free text body.
    pub content: String,
    /// Content kind.
    pub kind: ContentKind,
    /// Destination link.
    pub url: String,
    /// Unordered category tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Single category label.
    pub category: String,
    /// Popularity in the range 0-100.
    pub popularity: u8,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<ContentItem> for SearchableItem {
    fn from(item: ContentItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            content: item.content,
            kind: item.kind,
            url: item.url,
            tags: item.tags,
        }
    }
}

/// Optional constraints applied on top of a ranked search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Keep only items of this kind.
    #[serde(default)]
    pub kind: Option<ContentKind>,
    /// Keep only items whose tags contain one of these as a
    /// case-insensitive substring.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// A scored document reference.
///
/// Ordered by score (via `total_cmp`), then by doc id (ascending) so that
/// equal scores resolve to the original corpus order deterministically.
#[derive(Debug, Clone, Copy)]
pub struct Scored {
    /// Document identifier.
    pub doc: DocId,
    /// Relevance score (higher is better).
    pub score: f32,
}

impl Scored {
    /// Creates a new scored reference.
    #[inline(always)]
    pub const fn new(doc: DocId, score: f32) -> Self {
        Self { doc, score }
    }
}

impl PartialEq for Scored {
    fn eq(&self, other: &Self) -> bool {
        self.doc == other.doc && self.score == other.score
    }
}

impl Eq for Scored {}

impl PartialOrd for Scored {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scored {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        match self.score.total_cmp(&other.score) {
            core::cmp::Ordering::Equal => self.doc.cmp(&other.doc),
            ord => ord,
        }
    }
}

impl fmt::Display for Scored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc={} score={:.3}", self.doc, self.score)
    }
}

/// Errors raised while validating a corpus at engine construction.
///
/// A rejected corpus never produces a partially constructed engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    /// Two records share the same id.
    #[error("duplicate document id: {id}")]
    DuplicateId {
        /// The offending id.
        id: String,
    },
    /// A record carries a popularity value above 100.
    #[error("popularity out of range for {id}: {value} (max 100)")]
    PopularityOutOfRange {
        /// Id of the offending record.
        id: String,
        /// The rejected value.
        value: u8,
    },
    /// A record has an empty id string.
    #[error("record at position {index} has an empty id")]
    EmptyId {
        /// Corpus position of the offending record.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(id: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: "Getting Started with Agentic AI".to_string(),
            content: "A tutorial on building agents".to_string(),
            kind: ContentKind::Blog,
            url: format!("/blog/{id}"),
            tags: vec!["AI".to_string(), "LangChain".to_string()],
            category: "AI".to_string(),
            popularity: 90,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn scored_ordering() {
        let r1 = Scored::new(1, 0.9);
        let r2 = Scored::new(2, 0.5);
        let r3 = Scored::new(3, 0.9); // Same score as r1

        assert!(r1 > r2); // Higher score is "greater"
        assert_ne!(r1, r3); // Different doc = not equal

        // When scores are equal, doc id breaks the tie
        assert_eq!(r1.cmp(&r3), core::cmp::Ordering::Less);
    }

    #[test]
    fn scored_display() {
        let s = Scored::new(7, 0.25);
        assert_eq!(format!("{s}"), "doc=7 score=0.250");
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ContentKind::Blog).unwrap(),
            "\"blog\""
        );
        assert_eq!(
            serde_json::to_string(&ContentKind::Certification).unwrap(),
            "\"certification\""
        );
    }

    #[test]
    fn kind_display_matches_serde() {
        for kind in [
            ContentKind::Project,
            ContentKind::Blog,
            ContentKind::Certification,
            ContentKind::Skill,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json.trim_matches('"'), format!("{kind}"));
        }
    }

    #[test]
    fn content_item_roundtrips_through_json() {
        let original = item("agentic-ai");
        let json = serde_json::to_string(&original).unwrap();
        let back: ContentItem = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }

    #[test]
    fn searchable_item_tags_default_to_empty() {
        let json = r#"{
            "id": "rust",
            "title": "Rust",
            "content": "systems language",
            "kind": "skill",
            "url": "/skills/rust"
        }"#;
        let parsed: SearchableItem = serde_json::from_str(json).unwrap();
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn content_item_converts_to_searchable() {
        let content = item("agentic-ai");
        let searchable: SearchableItem = content.clone().into();
        assert_eq!(searchable.id, content.id);
        assert_eq!(searchable.title, content.title);
        assert_eq!(searchable.tags, content.tags);
    }

    #[test]
    fn corpus_error_messages() {
        let err = CorpusError::DuplicateId {
            id: "agentic-ai".to_string(),
        };
        assert_eq!(format!("{err}"), "duplicate document id: agentic-ai");

        let err = CorpusError::PopularityOutOfRange {
            id: "x".to_string(),
            value: 130,
        };
        assert!(format!("{err}").contains("130"));
    }
}
