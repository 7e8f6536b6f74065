//! OfferCatalog node builder.

use serde_json::{Value, json};

use coursemark_shared::{CategoryPage, Conventions};
use coursemark_tables::TableStore;

use crate::{course, organization_id};

/// Build the `OfferCatalog` node for one category: all of its courses
/// ordered by ascending `course_position`, the served areas, and the flat
/// tag list.
///
/// `numberOfItems` is the category's declared `total_courses` attribute,
/// not a recount of the joined course list. When the two disagree, both
/// values are logged so the drift is visible without changing the output.
pub fn build(store: &TableStore, conventions: &Conventions, page: &CategoryPage) -> Value {
    let mut courses = store.courses(&page.category_id);
    courses.sort_by_key(|c| c.course_position);

    if page.total_courses != courses.len() as i64 {
        tracing::warn!(
            category_id = %page.category_id,
            declared = page.total_courses,
            actual = courses.len(),
            "declared total_courses differs from joined course count; emitting declared value"
        );
    }

    let course_nodes: Vec<Value> = courses
        .iter()
        .map(|c| course::build(store, conventions, page, c))
        .collect();

    json!({
        "@type": "OfferCatalog",
        "@id": format!("#{}", page.catalog_id),
        "name": &page.catalog_name,
        "description": &page.catalog_description,
        "numberOfItems": page.total_courses,
        "provider": {
            "@id": organization_id(store)
        },
        "itemListElement": course_nodes,
        "areaServed": area_served(store, conventions, &page.category_id),
        "category": tags(store, &page.category_id)
    })
}

/// One `State` node per area-served row, in source order.
fn area_served(store: &TableStore, conventions: &Conventions, category_id: &str) -> Vec<Value> {
    store
        .areas_served(category_id)
        .iter()
        .map(|area| {
            json!({
                "@type": "State",
                "name": &area.area_served_name,
                "alternateName": &area.area_served_code,
                "address": {
                    "@type": "PostalAddress",
                    "addressRegion": &area.area_served_code,
                    "addressCountry": &conventions.address_country
                },
                "description": &area.area_served_description
            })
        })
        .collect()
}

/// Flat list of up to six present tag strings.
fn tags(store: &TableStore, category_id: &str) -> Vec<String> {
    store
        .category_tags(category_id)
        .map(|row| row.tags().map(String::from).collect())
        .unwrap_or_default()
}
