//! EducationalOrganization node builder.

use serde_json::{Value, json};

use coursemark_tables::TableStore;

use crate::organization_id;

/// Social-profile variables, in the fixed `sameAs` output order.
const SOCIAL_VARIABLES: [&str; 6] = [
    "social_facebook",
    "social_instagram",
    "social_twitter",
    "social_linkedin",
    "social_youtube",
    "social_tiktok",
];

/// Build the site-wide `EducationalOrganization` node.
///
/// `sameAs` always carries all six social slots; a blank variable yields an
/// empty-string entry rather than being filtered out (kept for
/// compatibility with existing published markup).
pub fn build(store: &TableStore) -> Value {
    let same_as: Vec<&str> = SOCIAL_VARIABLES
        .iter()
        .map(|name| store.org_value(name))
        .collect();

    json!({
        "@type": "EducationalOrganization",
        "@id": organization_id(store),
        "name": store.org_value("organization_name"),
        "description": store.org_value("organization_long_description"),
        "url": store.org_value("base_url"),
        "logo": store.org_value("organization_logo_url"),
        "sameAs": same_as,
        "award": store.org_value("organization_award")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn organization_node_shape() {
        let store = TableStore::load(Path::new("../../../fixtures/csv")).unwrap();
        let node = build(&store);

        assert_eq!(node["@type"], "EducationalOrganization");
        assert_eq!(
            node["@id"],
            "https://lakeviewcareers.example.com/#organization"
        );
        assert_eq!(node["award"], "Best Trade School 2025");
    }

    #[test]
    fn same_as_keeps_blank_entries() {
        let store = TableStore::load(Path::new("../../../fixtures/csv")).unwrap();
        let node = build(&store);

        let same_as = node["sameAs"].as_array().unwrap();
        // All six slots present, in fixed order; the blank tiktok variable
        // stays as an empty string.
        assert_eq!(same_as.len(), 6);
        assert_eq!(same_as[0], "https://facebook.com/lakeviewcareers");
        assert_eq!(same_as[5], "");
    }
}
