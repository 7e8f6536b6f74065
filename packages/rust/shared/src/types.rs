//! Domain row types for the eight course-catalog input tables.
//!
//! Each struct maps one CSV row via serde; blank fields deserialize to
//! `None` so "absent" is a first-class value. Rows are never mutated after
//! load. Numbered wide columns (about topics 1–3, course topics 1–8, tags
//! 1–6) are exposed as bounded ordered slots with presence-filtering
//! accessors, so builders iterate instead of interpolating column names.

use serde::Deserialize;

/// Sentinel value for a course code that should be treated as absent.
pub const COURSE_CODE_SENTINEL: &str = "N/A";

/// JSON-LD context URL for every emitted document.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

// ---------------------------------------------------------------------------
// Organization variables (01)
// ---------------------------------------------------------------------------

/// A single organization-level variable, keyed by name.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgVariable {
    #[serde(rename = "Variable Name")]
    pub variable_name: String,
    #[serde(rename = "Value")]
    pub value: String,
}

// ---------------------------------------------------------------------------
// Category pages (02)
// ---------------------------------------------------------------------------

/// One row per catalog/category landing page, primary key `Category ID`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPage {
    #[serde(rename = "Category ID")]
    pub category_id: String,
    /// Page URL; also the base for the `#catalog` and `#faq` node ids.
    pub category_page_url: String,
    pub category_page_name: Option<String>,
    pub category_page_headline: Option<String>,
    pub category_page_description: Option<String>,
    pub category_page_alternative_headline: Option<String>,
    pub breadcrumb_1_name: Option<String>,
    pub breadcrumb_1_url: Option<String>,
    pub breadcrumb_2_name: Option<String>,
    pub category_keywords: Option<String>,
    /// Catalog node id fragment (`#{catalog_id}`).
    pub catalog_id: String,
    pub catalog_name: Option<String>,
    pub catalog_description: Option<String>,
    /// Declared course count. Emitted as `numberOfItems` as-is, never
    /// recomputed from the joined course list.
    pub total_courses: i64,
}

// ---------------------------------------------------------------------------
// About topics (03) — wide row, 3 numbered slots
// ---------------------------------------------------------------------------

/// Up to three about-topic name/description pairs for one category.
#[derive(Debug, Clone, Deserialize)]
pub struct AboutTopicsRow {
    #[serde(rename = "Category ID")]
    pub category_id: String,
    pub about_topic_1_name: Option<String>,
    pub about_topic_1_description: Option<String>,
    pub about_topic_2_name: Option<String>,
    pub about_topic_2_description: Option<String>,
    pub about_topic_3_name: Option<String>,
    pub about_topic_3_description: Option<String>,
}

impl AboutTopicsRow {
    /// The three topic slots in column order. A slot without a name is a
    /// gap: it is skipped entirely, it does not shift or null-pad the list.
    pub fn slots(&self) -> [(Option<&str>, Option<&str>); 3] {
        [
            (
                self.about_topic_1_name.as_deref(),
                self.about_topic_1_description.as_deref(),
            ),
            (
                self.about_topic_2_name.as_deref(),
                self.about_topic_2_description.as_deref(),
            ),
            (
                self.about_topic_3_name.as_deref(),
                self.about_topic_3_description.as_deref(),
            ),
        ]
    }

    /// Topics whose name is present, preserving column order. The
    /// description is carried through unconditionally (may be absent).
    pub fn present(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.slots()
            .into_iter()
            .filter_map(|(name, desc)| name.map(|n| (n, desc)))
    }
}

// ---------------------------------------------------------------------------
// Courses (04)
// ---------------------------------------------------------------------------

/// One course row. `course_position` is 1-based, orders the catalog list,
/// and joins to [`CourseTopicsRow`] by (category, position).
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRow {
    #[serde(rename = "Category ID")]
    pub category_id: String,
    pub course_position: i64,
    pub course_name: Option<String>,
    pub course_alternate_name: Option<String>,
    pub course_description: Option<String>,
    pub course_url: Option<String>,
    pub course_credential: Option<String>,
    pub course_level: Option<String>,
    pub course_duration_iso8601: Option<String>,
    pub course_abstract: Option<String>,
    pub course_prerequisites: Option<String>,
    pub course_benefits: Option<String>,
    pub course_audience_type: Option<String>,
    pub course_language: Option<String>,
    pub course_mode_1: Option<String>,
    pub course_mode_2: Option<String>,
    pub course_workload_iso8601: Option<String>,
    pub course_timezone: Option<String>,
    pub course_instructor_org: Option<String>,
    pub offer_category: Option<String>,
    pub offer_availability_starts: Option<String>,
    pub offer_valid_from: Option<String>,
    pub eligible_region_type: Option<String>,
    pub eligible_region_name: Option<String>,
    pub eligible_region_code: Option<String>,
    pub course_in_language: Option<String>,
    pub location_created_type: Option<String>,
    pub location_created_name: Option<String>,
    pub location_created_region: Option<String>,
    pub course_educational_use: Option<String>,
    pub course_learning_resource_type: Option<String>,
    pub course_age_range: Option<String>,
    pub course_code: Option<String>,
    pub geographic_type: Option<String>,
    pub geographic_name: Option<String>,
}

impl CourseRow {
    /// Course code, unless absent or the `"N/A"` sentinel.
    pub fn effective_course_code(&self) -> Option<&str> {
        self.course_code
            .as_deref()
            .filter(|code| *code != COURSE_CODE_SENTINEL)
    }
}

// ---------------------------------------------------------------------------
// Course topics (05) — wide row, 8 numbered slots
// ---------------------------------------------------------------------------

/// Up to eight topic strings for one (category, course position) pair.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseTopicsRow {
    #[serde(rename = "Category ID")]
    pub category_id: String,
    pub course_position: i64,
    pub course_topic_1: Option<String>,
    pub course_topic_2: Option<String>,
    pub course_topic_3: Option<String>,
    pub course_topic_4: Option<String>,
    pub course_topic_5: Option<String>,
    pub course_topic_6: Option<String>,
    pub course_topic_7: Option<String>,
    pub course_topic_8: Option<String>,
}

impl CourseTopicsRow {
    /// Present topics in column order 1..8.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        [
            &self.course_topic_1,
            &self.course_topic_2,
            &self.course_topic_3,
            &self.course_topic_4,
            &self.course_topic_5,
            &self.course_topic_6,
            &self.course_topic_7,
            &self.course_topic_8,
        ]
        .into_iter()
        .filter_map(|t| t.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Area served (06)
// ---------------------------------------------------------------------------

/// A US state/region served by a category's catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaServedRow {
    #[serde(rename = "Category ID")]
    pub category_id: String,
    pub area_served_name: Option<String>,
    pub area_served_code: Option<String>,
    pub area_served_description: Option<String>,
}

// ---------------------------------------------------------------------------
// Category tags (07) — wide row, 6 numbered slots
// ---------------------------------------------------------------------------

/// Up to six flat tag strings for one category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTagsRow {
    #[serde(rename = "Category ID")]
    pub category_id: String,
    pub category_1: Option<String>,
    pub category_2: Option<String>,
    pub category_3: Option<String>,
    pub category_4: Option<String>,
    pub category_5: Option<String>,
    pub category_6: Option<String>,
}

impl CategoryTagsRow {
    /// Present tags in column order 1..6.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        [
            &self.category_1,
            &self.category_2,
            &self.category_3,
            &self.category_4,
            &self.category_5,
            &self.category_6,
        ]
        .into_iter()
        .filter_map(|t| t.as_deref())
    }
}

// ---------------------------------------------------------------------------
// FAQs (08)
// ---------------------------------------------------------------------------

/// One FAQ entry, ordered by `faq_position`. Rows without a question are
/// excluded from output.
#[derive(Debug, Clone, Deserialize)]
pub struct FaqRow {
    #[serde(rename = "Category ID")]
    pub category_id: String,
    pub faq_position: i64,
    pub faq_question: Option<String>,
    pub faq_answer: Option<String>,
}
