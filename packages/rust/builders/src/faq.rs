//! FAQPage node builder.

use serde_json::{Value, json};

use coursemark_shared::CategoryPage;
use coursemark_tables::TableStore;

/// Build the `FAQPage` node: Question/Answer pairs ordered by ascending
/// `faq_position`. Rows without a question are excluded; exclusion does not
/// reorder or renumber the surviving entries.
pub fn build(store: &TableStore, page: &CategoryPage) -> Value {
    let mut rows = store.faqs(&page.category_id);
    rows.sort_by_key(|r| r.faq_position);

    let items: Vec<Value> = rows
        .iter()
        .filter_map(|row| {
            row.faq_question.as_deref().map(|question| {
                json!({
                    "@type": "Question",
                    "name": question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": &row.faq_answer
                    }
                })
            })
        })
        .collect();

    json!({
        "@type": "FAQPage",
        "@id": format!("{}#faq", page.category_page_url),
        "mainEntity": items
    })
}
