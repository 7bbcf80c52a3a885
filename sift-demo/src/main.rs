//! Demo: build both engines over a small portfolio corpus and print
//! ranked output for a handful of representative calls.

use anyhow::Context;
use sift_core::{Recommender, SearchIndex};
use sift_types::{ContentItem, SearchFilters, SearchableItem};

const CORPUS: &str = include_str!("corpus.json");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let items: Vec<ContentItem> =
        serde_json::from_str(CORPUS).context("parse embedded corpus")?;

    let recommender = Recommender::new(items.clone()).context("build recommender")?;
    let index = SearchIndex::new(items.into_iter().map(SearchableItem::from).collect())
        .context("build search index")?;

    println!("corpus: {}", index.stats());

    for query in ["agentic ai tutorial", "rust performance", "cloud"] {
        println!("\nsearch: {query:?}");
        for (rank, item) in index.search(query, 3).iter().enumerate() {
            println!("  {}. [{}] {}", rank + 1, item.kind, item.title);
        }
    }

    let filters = SearchFilters {
        kind: None,
        tags: Some(vec!["AI".to_string()]),
    };
    println!("\nsearch \"tutorial\" filtered to AI tags:");
    for item in index.search_filtered("tutorial", &filters, 3) {
        println!("  [{}] {}", item.kind, item.title);
    }

    println!("\nsuggestions for \"ru\": {:?}", index.suggestions("ru"));

    println!("\nrelated to agentic-ai:");
    for item in recommender.related("agentic-ai", 3) {
        println!("  [{}] {}", item.category, item.title);
    }

    let profile = vec!["AI".to_string(), "Rust".to_string()];
    let viewed = vec!["agentic-ai".to_string()];
    println!("\npersonalized for tags {profile:?} (viewed agentic-ai):");
    for item in recommender.personalized(&profile, &viewed, 3) {
        println!("  [{}] {}", item.category, item.title);
    }

    println!("\ntrending:");
    for item in recommender.trending(3) {
        println!("  ({:>3}) {}", item.popularity, item.title);
    }

    println!("\ndiverse picks:");
    for item in recommender.diverse(&[], 6) {
        println!("  [{} / {}] {}", item.category, item.kind, item.title);
    }

    Ok(())
}
