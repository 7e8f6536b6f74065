//! Table loading and field resolution for coursemark.
//!
//! Reads the eight course-catalog CSV tables into an immutable
//! [`TableStore`] with key indexes built once at load time, and exposes the
//! field-resolver lookups the fragment builders consume (`org_value`,
//! per-category row access, the composite course-topics join).

mod loader;
mod store;

pub use loader::{
    ABOUT_TOPICS_FILE, AREA_SERVED_FILE, CATEGORY_PAGES_FILE, CATEGORY_TAGS_FILE, COURSES_FILE,
    COURSE_TOPICS_FILE, FAQS_FILE, ORG_VARIABLES_FILE,
};
pub use store::{RawTables, TableStore};
