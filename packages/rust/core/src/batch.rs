//! Batch driver.
//!
//! Iterates every category page, builds and writes one document per
//! category, and keeps going past per-category failures. Load-time errors
//! never reach this module; anything that fails here is scoped to the one
//! category that raised it.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{error, info, instrument, warn};

use coursemark_shared::{Conventions, CoursemarkError, Result};
use coursemark_tables::TableStore;

use crate::{assembler, validator};

/// Outcome of a full batch run.
#[derive(Debug)]
pub struct BatchResult {
    /// Paths of successfully written documents, in category source order.
    pub written: Vec<PathBuf>,
    /// Categories that failed, with the error each raised.
    pub failures: Vec<(String, CoursemarkError)>,
    /// When the batch finished.
    pub completed_at: DateTime<Utc>,
}

impl BatchResult {
    pub fn succeeded(&self) -> usize {
        self.written.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Progress callback for reporting batch status.
pub trait ProgressReporter: Send + Sync {
    /// Called before a category's document is built.
    fn category_started(&self, category_id: &str, current: usize, total: usize);
    /// Called after a category finishes (successfully or not).
    fn category_finished(&self, category_id: &str, ok: bool);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn category_started(&self, _category_id: &str, _current: usize, _total: usize) {}
    fn category_finished(&self, _category_id: &str, _ok: bool) {}
}

/// Output file name for one category's document.
pub fn document_file_name(category_id: &str) -> String {
    format!("{category_id}_schema.json")
}

/// Build and write one category's document. Validator warnings are logged,
/// never fatal.
pub fn generate_one(
    store: &TableStore,
    conventions: &Conventions,
    category_id: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let document = assembler::build_document(store, conventions, category_id)?;

    for warning in validator::validate(&document) {
        warn!(category_id, warning = %warning, "document validation warning");
    }

    let json = serde_json::to_string_pretty(&document)
        .map_err(|e| CoursemarkError::validation(format!("JSON serialization failed: {e}")))?;

    let path = output_dir.join(document_file_name(category_id));
    std::fs::write(&path, json).map_err(|e| CoursemarkError::io(&path, e))?;

    Ok(path)
}

/// Run the whole batch: one document per category page, continuing past
/// per-category failures. Returns the written paths and the failures with
/// their category ids.
#[instrument(skip_all, fields(out = %output_dir.display()))]
pub fn run_batch(
    store: &TableStore,
    conventions: &Conventions,
    output_dir: &Path,
    progress: &dyn ProgressReporter,
) -> Result<BatchResult> {
    std::fs::create_dir_all(output_dir).map_err(|e| CoursemarkError::io(output_dir, e))?;

    let total = store.category_pages().len();
    let mut written = Vec::new();
    let mut failures = Vec::new();

    for (i, page) in store.category_pages().iter().enumerate() {
        let category_id = page.category_id.as_str();
        progress.category_started(category_id, i + 1, total);

        match generate_one(store, conventions, category_id, output_dir) {
            Ok(path) => {
                info!(category_id, path = %path.display(), "generated document");
                progress.category_finished(category_id, true);
                written.push(path);
            }
            Err(e) => {
                error!(category_id, error = %e, "category generation failed, continuing");
                progress.category_finished(category_id, false);
                failures.push((category_id.to_string(), e));
            }
        }
    }

    info!(
        succeeded = written.len(),
        failed = failures.len(),
        "batch complete"
    );

    Ok(BatchResult {
        written,
        failures,
        completed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::path::Path;

    fn fixture() -> (TableStore, Conventions) {
        let store = TableStore::load(Path::new("../../../fixtures/csv")).unwrap();
        (store, Conventions::default())
    }

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "coursemark-batch-test-{}",
            uuid::Uuid::now_v7()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn batch_writes_one_document_per_category() {
        let (store, conv) = fixture();
        let tmp = temp_dir();

        let result = run_batch(&store, &conv, &tmp, &SilentProgress).unwrap();

        assert_eq!(result.succeeded(), 2);
        assert_eq!(result.failed(), 0);
        assert!(tmp.join("CAT1_schema.json").exists());
        assert!(tmp.join("CAT2_schema.json").exists());

        // Written documents re-parse and pass the validator.
        let content = std::fs::read_to_string(tmp.join("CAT1_schema.json")).unwrap();
        let doc: Value = serde_json::from_str(&content).unwrap();
        assert!(validator::validate(&doc).is_empty());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn batch_continues_past_per_category_failure() {
        let (store, conv) = fixture();
        let tmp = temp_dir();

        // Occupy CAT1's output path with a directory so its write fails.
        std::fs::create_dir_all(tmp.join("CAT1_schema.json")).unwrap();

        let result = run_batch(&store, &conv, &tmp, &SilentProgress).unwrap();

        assert_eq!(result.failed(), 1);
        assert_eq!(result.failures[0].0, "CAT1");
        // CAT2 still produced.
        assert_eq!(result.succeeded(), 1);
        assert!(tmp.join("CAT2_schema.json").exists());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn unknown_category_produces_no_file() {
        let (store, conv) = fixture();
        let tmp = temp_dir();

        let err = generate_one(&store, &conv, "NOPE", &tmp).unwrap_err();
        assert!(matches!(err, CoursemarkError::NotFound { .. }));
        assert!(!tmp.join("NOPE_schema.json").exists());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn output_is_two_space_indented_utf8() {
        let (store, conv) = fixture();
        let tmp = temp_dir();

        let path = generate_one(&store, &conv, "CAT1", &tmp).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n  \"@context\""));

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
