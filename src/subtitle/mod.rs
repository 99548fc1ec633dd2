//! Subtitle normalization engine
//!
//! Derives each content block's `subtitle` from its hierarchical `path`
//! breadcrumb and rewrites note files in place:
//! - pure extraction of the last path segment
//! - an idempotent patch over parsed documents
//! - a batch runner with per-file failure isolation

mod batch;
mod extract;
mod patch;

pub use batch::{run_batch, BatchReport, FileError, FileOutcome};
pub use extract::{extract_subtitle, PATH_DELIMITER};
pub use patch::{process_document, StructureError};
