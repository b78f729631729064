//! Typed search response.
//!
//! Only the parts of the engine's `_search` response that are read back are
//! modelled here. Unknown fields are ignored, but a missing `hits.hits` array
//! or `_source` object fails deserialization.

use serde::{Deserialize, Serialize};

/// Top level of a `_search` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHits<T> {
    pub hits: HitsEnvelope<T>,
}

/// The `hits` object of a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct HitsEnvelope<T> {
    /// Present when the engine tracked totals for this request.
    #[serde(default)]
    pub total: Option<TotalHits>,
    pub hits: Vec<Hit<T>>,
}

/// Total hit count as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TotalHits {
    pub value: u64,
    /// `eq` for an exact count, `gte` for a lower bound.
    pub relation: String,
}

impl TotalHits {
    pub fn is_exact(&self) -> bool {
        self.relation == "eq"
    }
}

/// A single hit. `_source` holds the stored document.
#[derive(Debug, Clone, Deserialize)]
pub struct Hit<T> {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "_source")]
    pub source: T,
}

/// The fields of a stored log document that are reported back.
///
/// The timestamp is kept as the engine returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogHit {
    pub service: String,
    pub message: String,
    pub timestamp: String,
}

impl<T> SearchHits<T> {
    /// Consume the response and return the stored documents in hit order.
    pub fn into_sources(self) -> Vec<T> {
        self.hits.hits.into_iter().map(|hit| hit.source).collect()
    }
}
