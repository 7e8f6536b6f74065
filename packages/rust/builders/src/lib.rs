//! Fragment builders: one module per schema.org node type.
//!
//! Each builder is a pure function from resolved table rows (plus the
//! organization resolver and markup conventions) to one JSON-LD node as a
//! `serde_json::Value`. Cross-node references use `@id` strings only; no
//! in-memory linking. `serde_json` runs with `preserve_order` so node keys
//! keep construction order and serialized output is byte-stable.

pub mod catalog;
pub mod collection;
pub mod course;
pub mod faq;
pub mod organization;
pub mod website;

use coursemark_tables::TableStore;

/// `@id` of the site-wide WebSite node.
pub(crate) fn website_id(store: &TableStore) -> String {
    format!("{}/#website", store.org_value("base_url"))
}

/// `@id` of the site-wide EducationalOrganization node.
pub(crate) fn organization_id(store: &TableStore) -> String {
    format!("{}/#organization", store.org_value("base_url"))
}
