//! Notes directory access
//!
//! This module handles filesystem access to a notes app:
//! - locating the notes directory under the app root
//! - enumerating note files in deterministic sorted order
//! - per-app configuration

mod config;

pub use config::{AppConfig, ServerConfig, CONFIG_FILE};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A notes application rooted at a directory on disk
pub struct NotesDir {
    /// Path to the app root
    root: PathBuf,
    /// Directory holding the JSON note documents
    notes_dir: PathBuf,
    /// App configuration
    config: AppConfig,
}

impl NotesDir {
    /// Open the notes app rooted at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        let config = AppConfig::load_or_default(&root)?;
        let notes_dir = root.join(&config.notes_dir);

        Ok(Self {
            root,
            notes_dir,
            config,
        })
    }

    /// Get the app root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path to the notes directory
    pub fn notes_path(&self) -> &Path {
        &self.notes_dir
    }

    /// Get the app configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Check whether the notes directory exists on disk
    pub fn exists(&self) -> bool {
        self.notes_dir.is_dir()
    }

    /// List note files matching the configured pattern, sorted by file name.
    ///
    /// Only the notes directory itself is searched; subdirectories are not
    /// descended into.
    pub fn note_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.notes_dir).min_depth(1).max_depth(1) {
            let entry = entry
                .with_context(|| format!("Failed to read notes directory: {:?}", self.notes_dir))?;

            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if self.config.matches_note(&file_name) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}
