//! CollectionPage node builder, including the embedded BreadcrumbList and
//! about-topics list.

use serde_json::{Value, json};

use coursemark_shared::CategoryPage;
use coursemark_tables::TableStore;

use crate::website_id;

/// Build the `CollectionPage` node for one category landing page.
pub fn build(store: &TableStore, page: &CategoryPage) -> Value {
    json!({
        "@type": "CollectionPage",
        "@id": format!("{}#catalog", page.category_page_url),
        "url": &page.category_page_url,
        "name": &page.category_page_name,
        "headline": &page.category_page_headline,
        "description": &page.category_page_description,
        "alternativeHeadline": &page.category_page_alternative_headline,
        "about": about_topics(store, &page.category_id),
        "keywords": &page.category_keywords,
        "isPartOf": {
            "@id": website_id(store)
        },
        "breadcrumb": breadcrumb(page),
        "mainEntity": {
            "@id": format!("#{}", page.catalog_id)
        }
    })
}

/// Build the `BreadcrumbList` for a category page.
///
/// Item 1 carries its url; item 2 is the current page and carries no `item`.
/// Either is included only when its name is present.
pub fn breadcrumb(page: &CategoryPage) -> Value {
    let mut items = Vec::new();

    if let Some(name) = &page.breadcrumb_1_name {
        items.push(json!({
            "@type": "ListItem",
            "position": 1,
            "name": name,
            "item": &page.breadcrumb_1_url
        }));
    }

    if let Some(name) = &page.breadcrumb_2_name {
        items.push(json!({
            "@type": "ListItem",
            "position": 2,
            "name": name
        }));
    }

    json!({
        "@type": "BreadcrumbList",
        "itemListElement": items
    })
}

/// Up to three `Thing` nodes for the category's about-topics row. A topic
/// without a name is skipped; a present topic carries its description even
/// when that is null.
fn about_topics(store: &TableStore, category_id: &str) -> Vec<Value> {
    let Some(row) = store.about_topics(category_id) else {
        return Vec::new();
    };

    row.present()
        .map(|(name, description)| {
            json!({
                "@type": "Thing",
                "name": name,
                "description": description
            })
        })
        .collect()
}
