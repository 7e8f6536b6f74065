//! WebSite node builder.

use serde_json::{Value, json};

use coursemark_tables::TableStore;

use crate::{organization_id, website_id};

/// Build the site-wide `WebSite` node from organization variables.
pub fn build(store: &TableStore) -> Value {
    json!({
        "@type": "WebSite",
        "name": store.org_value("organization_name"),
        "@id": website_id(store),
        "url": store.org_value("base_url"),
        "description": store.org_value("organization_description"),
        "publisher": {
            "@id": organization_id(store)
        }
    })
}
