//! Immutable table store with load-time key indexes.
//!
//! All eight tables are loaded once at process start; every lookup after
//! that goes through indexes built here. Tables where at most one row per
//! key is expected (category pages, about topics, category tags, course
//! topics) resolve duplicates first-seen by source order and record a
//! data-quality warning instead of silently picking one.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{info, instrument, warn};

use coursemark_shared::{
    AboutTopicsRow, AreaServedRow, CategoryPage, CategoryTagsRow, CourseRow, CourseTopicsRow,
    FaqRow, OrgVariable, Result,
};

use crate::loader::{
    self, ABOUT_TOPICS_FILE, AREA_SERVED_FILE, CATEGORY_PAGES_FILE, CATEGORY_TAGS_FILE,
    COURSES_FILE, COURSE_TOPICS_FILE, FAQS_FILE, ORG_VARIABLES_FILE,
};

/// Already-parsed row collections for the eight input tables.
///
/// [`TableStore::load`] fills this from CSV files; tests and embedding
/// callers can construct it directly and hand it to [`TableStore::new`].
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    pub org_variables: Vec<OrgVariable>,
    pub category_pages: Vec<CategoryPage>,
    pub about_topics: Vec<AboutTopicsRow>,
    pub courses: Vec<CourseRow>,
    pub course_topics: Vec<CourseTopicsRow>,
    pub areas_served: Vec<AreaServedRow>,
    pub category_tags: Vec<CategoryTagsRow>,
    pub faqs: Vec<FaqRow>,
}

/// The loaded, indexed, read-only table set.
pub struct TableStore {
    tables: RawTables,

    // First-seen-wins indexes (at most one row per key expected).
    org_index: HashMap<String, usize>,
    page_index: HashMap<String, usize>,
    about_index: HashMap<String, usize>,
    tags_index: HashMap<String, usize>,
    topics_index: HashMap<(String, i64), usize>,

    // Multi-row indexes, preserving source order.
    course_index: HashMap<String, Vec<usize>>,
    area_index: HashMap<String, Vec<usize>>,
    faq_index: HashMap<String, Vec<usize>>,

    warnings: Vec<String>,
}

impl TableStore {
    /// Load all eight tables from `data_dir` and build the indexes.
    #[instrument(skip_all, fields(dir = %data_dir.display()))]
    pub fn load(data_dir: &Path) -> Result<Self> {
        let tables = RawTables {
            org_variables: loader::read_table(data_dir, ORG_VARIABLES_FILE)?,
            category_pages: loader::read_table(data_dir, CATEGORY_PAGES_FILE)?,
            about_topics: loader::read_table(data_dir, ABOUT_TOPICS_FILE)?,
            courses: loader::read_table(data_dir, COURSES_FILE)?,
            course_topics: loader::read_table(data_dir, COURSE_TOPICS_FILE)?,
            areas_served: loader::read_table(data_dir, AREA_SERVED_FILE)?,
            category_tags: loader::read_table(data_dir, CATEGORY_TAGS_FILE)?,
            faqs: loader::read_table(data_dir, FAQS_FILE)?,
        };

        let store = Self::new(tables);
        info!(
            categories = store.tables.category_pages.len(),
            courses = store.tables.courses.len(),
            warnings = store.warnings.len(),
            "table store loaded"
        );
        Ok(store)
    }

    /// Build the indexed store from already-parsed rows.
    pub fn new(tables: RawTables) -> Self {
        let mut warnings = Vec::new();

        let mut org_index = HashMap::new();
        for (i, row) in tables.org_variables.iter().enumerate() {
            if org_index.contains_key(&row.variable_name) {
                push_warning(
                    &mut warnings,
                    format!(
                        "{ORG_VARIABLES_FILE}: duplicate variable '{}' (first value kept)",
                        row.variable_name
                    ),
                );
            } else {
                org_index.insert(row.variable_name.clone(), i);
            }
        }

        let mut page_index = HashMap::new();
        for (i, row) in tables.category_pages.iter().enumerate() {
            if page_index.contains_key(&row.category_id) {
                push_warning(
                    &mut warnings,
                    format!(
                        "{CATEGORY_PAGES_FILE}: duplicate Category ID '{}' (first row kept)",
                        row.category_id
                    ),
                );
            } else {
                page_index.insert(row.category_id.clone(), i);
            }
        }

        let about_index = first_seen_index(
            &mut warnings,
            ABOUT_TOPICS_FILE,
            tables.about_topics.iter().map(|r| r.category_id.as_str()),
        );
        let tags_index = first_seen_index(
            &mut warnings,
            CATEGORY_TAGS_FILE,
            tables.category_tags.iter().map(|r| r.category_id.as_str()),
        );

        let mut topics_index = HashMap::new();
        for (i, row) in tables.course_topics.iter().enumerate() {
            let key = (row.category_id.clone(), row.course_position);
            if topics_index.contains_key(&key) {
                push_warning(
                    &mut warnings,
                    format!(
                        "{COURSE_TOPICS_FILE}: duplicate key ('{}', {}) (first row kept)",
                        row.category_id, row.course_position
                    ),
                );
            } else {
                topics_index.insert(key, i);
            }
        }

        let mut course_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut seen_positions: HashSet<(String, i64)> = HashSet::new();
        for (i, row) in tables.courses.iter().enumerate() {
            let pos_key = (row.category_id.clone(), row.course_position);
            if !seen_positions.insert(pos_key) {
                push_warning(
                    &mut warnings,
                    format!(
                        "{COURSES_FILE}: duplicate course_position {} in category '{}'",
                        row.course_position, row.category_id
                    ),
                );
            }
            course_index
                .entry(row.category_id.clone())
                .or_default()
                .push(i);
        }

        let mut area_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, row) in tables.areas_served.iter().enumerate() {
            area_index
                .entry(row.category_id.clone())
                .or_default()
                .push(i);
        }

        let mut faq_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, row) in tables.faqs.iter().enumerate() {
            faq_index
                .entry(row.category_id.clone())
                .or_default()
                .push(i);
        }

        Self {
            tables,
            org_index,
            page_index,
            about_index,
            tags_index,
            topics_index,
            course_index,
            area_index,
            faq_index,
            warnings,
        }
    }

    // -----------------------------------------------------------------------
    // Field resolver
    // -----------------------------------------------------------------------

    /// Value of the named organization variable, or `""` when absent.
    /// Never errors.
    pub fn org_value(&self, name: &str) -> &str {
        self.org_index
            .get(name)
            .map(|&i| self.tables.org_variables[i].value.as_str())
            .unwrap_or("")
    }

    /// The category page for `category_id`, if one exists.
    pub fn category_page(&self, category_id: &str) -> Option<&CategoryPage> {
        self.page_index
            .get(category_id)
            .map(|&i| &self.tables.category_pages[i])
    }

    /// All category pages in source order (batch iteration).
    pub fn category_pages(&self) -> &[CategoryPage] {
        &self.tables.category_pages
    }

    /// The about-topics row for a category (at most one expected).
    pub fn about_topics(&self, category_id: &str) -> Option<&AboutTopicsRow> {
        self.about_index
            .get(category_id)
            .map(|&i| &self.tables.about_topics[i])
    }

    /// The category-tags row for a category (at most one expected).
    pub fn category_tags(&self, category_id: &str) -> Option<&CategoryTagsRow> {
        self.tags_index
            .get(category_id)
            .map(|&i| &self.tables.category_tags[i])
    }

    /// All courses for a category, in source order. Callers apply their own
    /// secondary sort by `course_position`.
    pub fn courses(&self, category_id: &str) -> Vec<&CourseRow> {
        rows_for(&self.course_index, &self.tables.courses, category_id)
    }

    /// Course topics joined by the composite (category, position) key.
    pub fn topics_for_course(
        &self,
        category_id: &str,
        course_position: i64,
    ) -> Option<&CourseTopicsRow> {
        self.topics_index
            .get(&(category_id.to_string(), course_position))
            .map(|&i| &self.tables.course_topics[i])
    }

    /// All served areas for a category, in source order.
    pub fn areas_served(&self, category_id: &str) -> Vec<&AreaServedRow> {
        rows_for(&self.area_index, &self.tables.areas_served, category_id)
    }

    /// All FAQ rows for a category, in source order. Callers sort by
    /// `faq_position`.
    pub fn faqs(&self, category_id: &str) -> Vec<&FaqRow> {
        rows_for(&self.faq_index, &self.tables.faqs, category_id)
    }

    /// Data-quality warnings collected while building the indexes.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Look up all rows of a scoped table matching the key, preserving source
/// order. An unknown key yields an empty list, never an error.
fn rows_for<'a, T>(
    index: &HashMap<String, Vec<usize>>,
    rows: &'a [T],
    category_id: &str,
) -> Vec<&'a T> {
    index
        .get(category_id)
        .map(|ids| ids.iter().map(|&i| &rows[i]).collect())
        .unwrap_or_default()
}

/// Build a first-seen-wins index over category ids, warning on duplicates.
fn first_seen_index<'a>(
    warnings: &mut Vec<String>,
    table: &str,
    keys: impl Iterator<Item = &'a str>,
) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (i, key) in keys.enumerate() {
        if index.contains_key(key) {
            push_warning(
                warnings,
                format!("{table}: duplicate Category ID '{key}' (first row kept)"),
            );
        } else {
            index.insert(key.to_string(), i);
        }
    }
    index
}

fn push_warning(warnings: &mut Vec<String>, message: String) {
    warn!("{message}");
    warnings.push(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn fixture_store() -> TableStore {
        TableStore::load(Path::new("../../../fixtures/csv")).expect("load fixtures")
    }

    #[test]
    fn org_value_resolves_or_empty() {
        let store = fixture_store();
        assert_eq!(store.org_value("organization_name"), "Lakeview Career Institute");
        assert_eq!(store.org_value("no_such_variable"), "");
    }

    #[test]
    fn category_page_lookup() {
        let store = fixture_store();
        assert!(store.category_page("CAT1").is_some());
        assert!(store.category_page("NOPE").is_none());
    }

    #[test]
    fn courses_preserve_source_order() {
        let store = fixture_store();
        let courses = store.courses("CAT1");
        assert_eq!(courses.len(), 2);
        // Fixture lists position 2 before position 1; source order is kept,
        // sorting is the caller's job.
        assert_eq!(courses[0].course_position, 2);
        assert_eq!(courses[1].course_position, 1);
    }

    #[test]
    fn unmatched_category_rows_are_silently_excluded() {
        let store = fixture_store();
        // The fixture has an orphan course under CAT_ORPHAN with no page row.
        assert!(store.category_page("CAT_ORPHAN").is_none());
        assert_eq!(store.courses("CAT_ORPHAN").len(), 1);
        // It never surfaces for a real category.
        assert!(
            store
                .courses("CAT1")
                .iter()
                .all(|c| c.category_id == "CAT1")
        );
    }

    #[test]
    fn composite_topics_join() {
        let store = fixture_store();
        let topics = store.topics_for_course("CAT1", 1).expect("topics row");
        assert_eq!(topics.topics().count(), 3);
        assert!(store.topics_for_course("CAT1", 99).is_none());
    }

    #[test]
    fn duplicate_keys_warn_and_keep_first() {
        let tables = RawTables {
            org_variables: vec![],
            category_pages: vec![],
            about_topics: vec![],
            courses: vec![],
            course_topics: vec![
                topics_row("CAT1", 1, "first"),
                topics_row("CAT1", 1, "second"),
            ],
            areas_served: vec![],
            category_tags: vec![],
            faqs: vec![],
        };
        let store = TableStore::new(tables);

        assert_eq!(store.warnings().len(), 1);
        assert!(store.warnings()[0].contains("duplicate key"));

        let joined = store.topics_for_course("CAT1", 1).unwrap();
        assert_eq!(joined.course_topic_1.as_deref(), Some("first"));
    }

    fn topics_row(category_id: &str, position: i64, first_topic: &str) -> CourseTopicsRow {
        CourseTopicsRow {
            category_id: category_id.into(),
            course_position: position,
            course_topic_1: Some(first_topic.into()),
            course_topic_2: None,
            course_topic_3: None,
            course_topic_4: None,
            course_topic_5: None,
            course_topic_6: None,
            course_topic_7: None,
            course_topic_8: None,
        }
    }
}
