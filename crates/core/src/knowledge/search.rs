use crate::knowledge::{KnowledgeBase, StoreKind};
use anyhow::Context;
use serde::Serialize;
use std::collections::BTreeSet;

/// Retrieves a small ranked list of context documents for a free-text query.
///
/// [`KnowledgeBase`] answers from its in-memory keyword index; a remote vector
/// store can stand in behind the same trait.
#[async_trait::async_trait]
pub trait ContextRetriever: Send + Sync {
    async fn search(
        &self,
        query: &str,
        k: usize,
        store: StoreKind,
    ) -> anyhow::Result<Vec<serde_json::Value>>;
}

#[derive(Debug, Clone)]
struct IndexedDocument {
    store: StoreKind,
    document: serde_json::Value,
    terms: BTreeSet<String>,
}

/// Token-overlap index over serialized documents.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    documents: Vec<IndexedDocument>,
}

fn terms(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '+')
        .map(|t| t.trim_matches('+').to_lowercase())
        .filter(|t| t.len() > 1)
        .collect()
}

fn text_of(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::String(s) => {
            out.push_str(s);
            out.push(' ');
        }
        serde_json::Value::Array(items) => items.iter().for_each(|v| text_of(v, out)),
        serde_json::Value::Object(map) => {
            for (key, v) in map {
                out.push_str(key);
                out.push(' ');
                text_of(v, out);
            }
        }
        other => {
            out.push_str(&other.to_string());
            out.push(' ');
        }
    }
}

impl KeywordIndex {
    pub fn add<T: Serialize>(&mut self, store: StoreKind, document: &T) -> anyhow::Result<()> {
        let document =
            serde_json::to_value(document).context("failed to serialize document for indexing")?;
        let mut text = String::new();
        text_of(&document, &mut text);
        self.documents.push(IndexedDocument {
            store,
            terms: terms(&text),
            document,
        });
        Ok(())
    }

    pub fn add_all<T: Serialize>(
        &mut self,
        store: StoreKind,
        documents: &[T],
    ) -> anyhow::Result<()> {
        for d in documents {
            self.add(store, d)?;
        }
        Ok(())
    }

    /// Up to `k` documents from `store`, most shared query terms first.
    /// Documents with equal overlap keep insertion order.
    pub fn search(&self, query: &str, k: usize, store: StoreKind) -> Vec<serde_json::Value> {
        let query_terms = terms(query);

        let mut scored: Vec<(usize, &IndexedDocument)> = self
            .documents
            .iter()
            .filter(|d| d.store == store)
            .map(|d| (d.terms.intersection(&query_terms).count(), d))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(k)
            .map(|(_, d)| d.document.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl ContextRetriever for KnowledgeBase {
    async fn search(
        &self,
        query: &str,
        k: usize,
        store: StoreKind,
    ) -> anyhow::Result<Vec<serde_json::Value>> {
        tracing::debug!(?store, k, query, "searching knowledge base");
        Ok(self.index().search(query, k, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tokenizer_keeps_age_brackets() {
        let t = terms("Strategy for a 56+ year-old, moderate_risk");
        assert!(t.contains("56"));
        assert!(t.contains("strategy"));
        assert!(t.contains("moderate"));
        assert!(t.contains("risk"));
        assert!(!t.contains("a"));
    }

    #[test]
    fn ranks_by_overlap_and_respects_store() {
        let mut index = KeywordIndex::default();
        let tax = json!({"principle": "Tax Optimization"});
        let risk = json!({"principle": "Risk Management", "description": "retirement risk"});
        let holdings = json!({"name": "Risk Management Holdings"});
        index.add(StoreKind::Principle, &tax).unwrap();
        index.add(StoreKind::Principle, &risk).unwrap();
        index.add(StoreKind::Stocks, &holdings).unwrap();

        let query = "risk management for retirement";
        let hits = index.search(query, 3, StoreKind::Principle);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0]["principle"], json!("Risk Management"));

        let hits = index.search(query, 3, StoreKind::Stocks);
        assert_eq!(hits, vec![holdings]);
    }

    #[tokio::test]
    async fn knowledge_base_answers_semantic_queries() {
        let kb = KnowledgeBase::builtin().unwrap();
        let query = "Investment strategy for 60 year old with 59 risk tolerance";
        let hits = kb.search(query, 3, StoreKind::Principle).await.unwrap();
        assert_eq!(hits.len(), 3);

        let hits = kb.search("IT sector software", 2, StoreKind::Stocks).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0]["sector"], json!("IT"));
    }
}
