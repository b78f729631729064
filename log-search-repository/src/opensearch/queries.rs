//! OpenSearch query builders.

use serde_json::{json, Value};

/// Build a query selecting documents whose `level` matches the given tag.
///
/// A `match` query is used, so the engine applies the field's analyzer the
/// same way it did at index time.
pub fn build_level_query(level: &str) -> Value {
    build_match_query("level", level)
}

/// Build a single-field `match` query.
pub fn build_match_query(field: &str, value: &str) -> Value {
    json!({
        "query": {
            "match": {
                field: value
            }
        }
    })
}
