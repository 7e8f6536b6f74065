//! CSV table loading.
//!
//! Each input table is a delimited record set with a header row; rows
//! deserialize into the typed structs from `coursemark-shared`. A missing
//! file or a row that fails deserialization is a fatal load error naming
//! the table — nothing downstream can run without a complete table set.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use coursemark_shared::{CoursemarkError, Result};

/// Input table file names, in load order.
pub const ORG_VARIABLES_FILE: &str = "01_organization_variables.csv";
pub const CATEGORY_PAGES_FILE: &str = "02_category_pages.csv";
pub const ABOUT_TOPICS_FILE: &str = "03_category_about_topics.csv";
pub const COURSES_FILE: &str = "04_courses_master_list.csv";
pub const COURSE_TOPICS_FILE: &str = "05_course_topics.csv";
pub const AREA_SERVED_FILE: &str = "06_area_served.csv";
pub const CATEGORY_TAGS_FILE: &str = "07_categories_tags.csv";
pub const FAQS_FILE: &str = "08_faqs.csv";

/// Read one CSV table into typed rows, preserving source order.
pub(crate) fn read_table<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<Vec<T>> {
    let path = dir.join(file_name);

    let mut reader = csv::Reader::from_path(&path)
        .map_err(|e| CoursemarkError::load(file_name, format!("{}: {e}", path.display())))?;

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        // Header is line 1, so data row i is source line i + 2.
        let row: T = record
            .map_err(|e| CoursemarkError::load(file_name, format!("line {}: {e}", i + 2)))?;
        rows.push(row);
    }

    debug!(table = file_name, rows = rows.len(), "loaded table");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursemark_shared::OrgVariable;

    #[test]
    fn missing_file_is_load_error() {
        let err = read_table::<OrgVariable>(Path::new("/nonexistent"), ORG_VARIABLES_FILE)
            .unwrap_err();
        assert!(matches!(err, CoursemarkError::Load { .. }));
        assert!(err.to_string().contains(ORG_VARIABLES_FILE));
    }

    #[test]
    fn reads_fixture_org_variables() {
        let rows: Vec<OrgVariable> =
            read_table(Path::new("../../../fixtures/csv"), ORG_VARIABLES_FILE)
                .expect("load fixture");
        assert!(!rows.is_empty());
        assert!(rows.iter().any(|r| r.variable_name == "organization_name"));
    }

    #[test]
    fn malformed_row_names_table_and_line() {
        use coursemark_shared::FaqRow;
        let dir = std::env::temp_dir().join("coursemark-loader-test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(FAQS_FILE),
            "Category ID,faq_position,faq_question,faq_answer\nCAT1,not-a-number,Q,A\n",
        )
        .unwrap();

        let err = read_table::<FaqRow>(&dir, FAQS_FILE).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(FAQS_FILE));
        assert!(msg.contains("line 2"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
