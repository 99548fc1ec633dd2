//! Batch runner applying the subtitle patch to every note file in place
//!
//! Files are processed one at a time in sorted-name order. A failing file is
//! recorded in the report and never aborts the rest of the batch. Writes are
//! full overwrites of the original file, not atomic renames.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::{process_document, StructureError};
use crate::notes::NotesDir;

/// Why a single note file could not be processed
#[derive(Debug, Error)]
pub enum FileError {
    #[error("JSON decode error: {0}")]
    Parse(serde_json::Error),
    #[error("{0}")]
    Structure(#[from] StructureError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of processing one note file
#[derive(Debug, Serialize)]
pub struct FileOutcome {
    /// File name within the notes directory
    pub file_name: String,
    /// Blocks that received a new or changed subtitle
    pub blocks_updated: usize,
    /// Failure message, when the file could not be processed
    pub error: Option<String>,
}

impl FileOutcome {
    /// Whether the file was processed and rewritten
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate result of a batch run
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    /// Per-file outcomes, in processing order
    pub files: Vec<FileOutcome>,
    /// Total files seen
    pub total_files: usize,
    /// Files processed and rewritten
    pub successful_files: usize,
    /// Files recorded as failures
    pub failed_files: usize,
    /// Blocks updated across all successful files
    pub total_blocks_updated: usize,
}

impl BatchReport {
    /// Whether every file in the batch was processed successfully
    pub fn all_succeeded(&self) -> bool {
        self.failed_files == 0
    }

    fn record_success(&mut self, file_name: String, blocks_updated: usize) {
        self.total_files += 1;
        self.successful_files += 1;
        self.total_blocks_updated += blocks_updated;
        self.files.push(FileOutcome {
            file_name,
            blocks_updated,
            error: None,
        });
    }

    fn record_failure(&mut self, file_name: String, error: &FileError) {
        self.total_files += 1;
        self.failed_files += 1;
        self.files.push(FileOutcome {
            file_name,
            blocks_updated: 0,
            error: Some(error.to_string()),
        });
    }
}

/// Run the subtitle patch over every matching file in the notes directory.
///
/// Enumeration failures abort the run; per-file parse, structure, and I/O
/// failures are recorded in the report and processing continues.
pub fn run_batch(notes: &NotesDir) -> Result<BatchReport> {
    let files = notes.note_files()?;
    let mut report = BatchReport::default();

    for path in &files {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match process_file(path) {
            Ok(blocks_updated) => {
                debug!(file = %file_name, blocks_updated, "processed note file");
                report.record_success(file_name, blocks_updated);
            }
            Err(error) => {
                debug!(file = %file_name, %error, "failed to process note file");
                report.record_failure(file_name, &error);
            }
        }
    }

    Ok(report)
}

/// Read, patch, and rewrite a single note file in place.
fn process_file(path: &Path) -> Result<usize, FileError> {
    let text = fs::read_to_string(path)?;
    let mut document: Value = serde_json::from_str(&text).map_err(FileError::Parse)?;

    let blocks_updated = process_document(&mut document)?;

    // 2-space indentation, non-ASCII characters written literally.
    let output = serde_json::to_string_pretty(&document).map_err(FileError::Parse)?;
    fs::write(path, output)?;

    Ok(blocks_updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn notes_app(files: &[(&str, &str)]) -> (TempDir, NotesDir) {
        let tmp = TempDir::new().unwrap();
        let notes_dir = tmp.path().join("notes");
        fs::create_dir(&notes_dir).unwrap();
        for (name, contents) in files {
            fs::write(notes_dir.join(name), contents).unwrap();
        }
        let notes = NotesDir::open(tmp.path()).unwrap();
        (tmp, notes)
    }

    #[test]
    fn test_batch_rewrites_files_and_counts_blocks() {
        let (tmp, notes) = notes_app(&[(
            "web.json",
            r#"{"title": "Web", "content": [{"path": "Foundations > Scripting > Use Cases"}, {"path": "Solo"}]}"#,
        )]);

        let report = run_batch(&notes).unwrap();
        assert_eq!(report.total_files, 1);
        assert_eq!(report.successful_files, 1);
        assert_eq!(report.failed_files, 0);
        assert_eq!(report.total_blocks_updated, 2);

        let rewritten = fs::read_to_string(tmp.path().join("notes/web.json")).unwrap();
        let document: Value = serde_json::from_str(&rewritten).unwrap();
        assert_eq!(document["content"][0]["subtitle"], "Use Cases");
        assert_eq!(document["content"][1]["subtitle"], "Solo");

        // Rewritten with 2-space indentation.
        assert!(rewritten.contains("  \"content\""));
    }

    #[test]
    fn test_malformed_file_fails_without_stopping_the_batch() {
        let (tmp, notes) = notes_app(&[
            ("a-bad.json", "{ this is not json"),
            (
                "b-good.json",
                r#"{"content": [{"path": "A > B > C"}]}"#,
            ),
        ]);

        let report = run_batch(&notes).unwrap();
        assert_eq!(report.total_files, 2);
        assert_eq!(report.successful_files, 1);
        assert_eq!(report.failed_files, 1);
        assert!(!report.all_succeeded());

        // Sorted by name, so the bad file comes first.
        assert_eq!(report.files[0].file_name, "a-bad.json");
        assert!(report.files[0].error.as_deref().unwrap().contains("JSON decode error"));
        assert!(report.files[1].succeeded());

        // The good file is still rewritten.
        let rewritten = fs::read_to_string(tmp.path().join("notes/b-good.json")).unwrap();
        let document: Value = serde_json::from_str(&rewritten).unwrap();
        assert_eq!(document["content"][0]["subtitle"], "C");
    }

    #[test]
    fn test_rejected_document_is_not_written_back() {
        let original = r#"["an", "array", "root"]"#;
        let (tmp, notes) = notes_app(&[("array.json", original)]);

        let report = run_batch(&notes).unwrap();
        assert_eq!(report.failed_files, 1);
        assert!(report.files[0]
            .error
            .as_deref()
            .unwrap()
            .contains("root is not an object"));

        // Untouched on disk.
        let on_disk = fs::read_to_string(tmp.path().join("notes/array.json")).unwrap();
        assert_eq!(on_disk, original);
    }

    #[test]
    fn test_non_matching_files_are_ignored() {
        let (_tmp, notes) = notes_app(&[
            ("note.json", r#"{"content": []}"#),
            ("index.html", "<html></html>"),
            ("README.md", "# readme"),
        ]);

        let report = run_batch(&notes).unwrap();
        assert_eq!(report.total_files, 1);
        assert_eq!(report.files[0].file_name, "note.json");
    }

    #[test]
    fn test_non_ascii_is_written_literally() {
        let (tmp, notes) = notes_app(&[(
            "unicode.json",
            r#"{"content": [{"path": "Begriffe > Übersicht", "note": "naïve ★ 日本語"}]}"#,
        )]);

        run_batch(&notes).unwrap();

        let rewritten = fs::read_to_string(tmp.path().join("notes/unicode.json")).unwrap();
        assert!(rewritten.contains("Übersicht"));
        assert!(rewritten.contains("naïve ★ 日本語"));
        assert!(!rewritten.contains("\\u"));
    }

    #[test]
    fn test_field_order_is_preserved() {
        let (tmp, notes) = notes_app(&[(
            "ordered.json",
            r#"{"zeta": 1, "content": [{"path": "A > B", "alpha": 2}], "beta": 3}"#,
        )]);

        run_batch(&notes).unwrap();

        let rewritten = fs::read_to_string(tmp.path().join("notes/ordered.json")).unwrap();
        let zeta = rewritten.find("\"zeta\"").unwrap();
        let content = rewritten.find("\"content\"").unwrap();
        let beta = rewritten.find("\"beta\"").unwrap();
        assert!(zeta < content && content < beta);

        // New subtitle keys land after the block's existing fields.
        let path = rewritten.find("\"path\"").unwrap();
        let subtitle = rewritten.find("\"subtitle\"").unwrap();
        assert!(path < subtitle);
    }

    #[test]
    fn test_second_run_counts_no_updates() {
        let (_tmp, notes) = notes_app(&[(
            "web.json",
            r#"{"content": [{"path": "A > B"}, {"path": "C > D", "title": "D"}]}"#,
        )]);

        let first = run_batch(&notes).unwrap();
        assert_eq!(first.total_blocks_updated, 2);

        let second = run_batch(&notes).unwrap();
        assert_eq!(second.total_blocks_updated, 0);
        assert!(second.all_succeeded());
    }
}
