//! Graph assembler.
//!
//! Joins the five fragment builders into one `@graph` document per
//! category. Node identity across the graph is established purely by
//! matching `@id` strings; the assembler performs no in-memory linking.

use serde_json::{Value, json};
use tracing::instrument;

use coursemark_builders::{catalog, collection, faq, organization, website};
use coursemark_shared::{Conventions, CoursemarkError, Result, SCHEMA_CONTEXT};
use coursemark_tables::TableStore;

/// Build the complete JSON-LD document for one category.
///
/// The `@graph` is always the fixed five-element sequence WebSite,
/// EducationalOrganization, CollectionPage, OfferCatalog, FAQPage.
/// Fails with `NotFound` when `category_id` has no category-page row.
#[instrument(skip(store, conventions))]
pub fn build_document(
    store: &TableStore,
    conventions: &Conventions,
    category_id: &str,
) -> Result<Value> {
    let page = store
        .category_page(category_id)
        .ok_or_else(|| CoursemarkError::not_found(category_id))?;

    Ok(json!({
        "@context": SCHEMA_CONTEXT,
        "@graph": [
            website::build(store),
            organization::build(store),
            collection::build(store, page),
            catalog::build(store, conventions, page),
            faq::build(store, page)
        ]
    }))
}
