//! Notesmith - maintenance toolkit for a static, file-based notes app
//!
//! This library provides the utilities behind the `notesmith` binary:
//! - deriving each content block's subtitle from its hierarchical path
//!   breadcrumb and rewriting note files in place
//! - generating a static HTML index page listing all note files
//! - serving the app over local HTTP with CORS and no-cache headers

pub mod cli;
pub mod index;
pub mod notes;
pub mod serve;
pub mod subtitle;

/// Re-export commonly used types
pub use notes::{AppConfig, NotesDir};
pub use subtitle::{extract_subtitle, process_document, BatchReport, StructureError};

/// Application-wide error type
pub use anyhow::Result;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "notesmith";
