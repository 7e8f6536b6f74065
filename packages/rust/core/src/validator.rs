//! Structural document validator.
//!
//! Checks completeness of an assembled document, not schema.org
//! conformance. Advisory only: returns warning strings, never fails, and
//! callers decide whether to act on them.

use serde_json::Value;

/// Node types every document is expected to carry. FAQPage is not checked.
const REQUIRED_TYPES: [&str; 4] = [
    "WebSite",
    "EducationalOrganization",
    "CollectionPage",
    "OfferCatalog",
];

/// Validate the structure of an assembled document. Empty result = pass.
pub fn validate(document: &Value) -> Vec<String> {
    let mut warnings = Vec::new();

    if document.get("@context").is_none() {
        warnings.push("Missing @context".to_string());
    }

    if document.get("@graph").is_none() {
        warnings.push("Missing @graph".to_string());
    }

    let graph_types: Vec<&str> = document
        .get("@graph")
        .and_then(Value::as_array)
        .map(|nodes| {
            nodes
                .iter()
                .filter_map(|n| n.get("@type").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    for required in REQUIRED_TYPES {
        if !graph_types.contains(&required) {
            warnings.push(format!("Missing required schema type: {required}"));
        }
    }

    warnings
}
