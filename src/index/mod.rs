//! Index page generation
//!
//! Writes a static HTML listing of every note file into the notes directory
//! so the app can discover notes without a server-side directory listing.
//! Each note is rendered as one anchor whose text is the note's display
//! title.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::notes::{AppConfig, NotesDir};

/// One entry in the generated index
#[derive(Debug)]
pub struct IndexEntry {
    /// Note file name, used as the link target
    pub file_name: String,
    /// Display title, used as the link text
    pub title: String,
}

/// Result of generating the index page
#[derive(Debug)]
pub struct IndexSummary {
    /// Where the index page was written
    pub output_path: PathBuf,
    /// Entries listed on the page, in file-name order
    pub entries: Vec<IndexEntry>,
}

/// Generate the index page for the notes directory.
///
/// Fails when the notes directory holds no matching note files; the caller
/// is expected to have checked that the directory itself exists.
pub fn generate(notes: &NotesDir) -> Result<IndexSummary> {
    let files = notes.note_files()?;

    if files.is_empty() {
        anyhow::bail!(
            "No note files matching '{}' in {:?}",
            notes.config().note_pattern,
            notes.notes_path()
        );
    }

    let entries: Vec<IndexEntry> = files
        .iter()
        .map(|path| {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let title = note_title(path, notes.config());
            debug!(file = %file_name, %title, "indexed note");
            IndexEntry { file_name, title }
        })
        .collect();

    let html = render_index(&entries);
    let output_path = notes.notes_path().join(&notes.config().index_file);

    fs::write(&output_path, html)
        .with_context(|| format!("Failed to write index page: {:?}", output_path))?;

    Ok(IndexSummary {
        output_path,
        entries,
    })
}

/// Display title for a note file.
///
/// Tries the configured title fields in order; when the file cannot be read
/// or parsed, or none of the fields holds a non-empty string, falls back to
/// a title derived from the file name.
pub fn note_title(path: &Path, config: &AppConfig) -> String {
    title_from_document(path, config).unwrap_or_else(|| title_from_file_name(path))
}

fn title_from_document(path: &Path, config: &AppConfig) -> Option<String> {
    let text = fs::read_to_string(path).ok()?;
    let document: Value = serde_json::from_str(&text).ok()?;

    for field in &config.title_fields {
        if let Some(title) = document.get(field).and_then(Value::as_str) {
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }

    None
}

/// Title-case the file stem, treating `-` and `_` as word separators
fn title_from_file_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    title_case(&stem.replace(['-', '_'], " "))
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

fn render_index(entries: &[IndexEntry]) -> String {
    let mut html = String::from(concat!(
        "<!DOCTYPE html>\n",
        "<html>\n",
        "<head>\n",
        "    <title>Notes Directory</title>\n",
        "</head>\n",
        "<body>\n",
        "    <h1>Available Notes</h1>\n",
        "    <ul>\n",
    ));

    for entry in entries {
        html.push_str(&format!(
            "        <li><a href=\"{}\">{}</a></li>\n",
            escape_html(&entry.file_name),
            escape_html(&entry.title)
        ));
    }

    html.push_str("    </ul>\n</body>\n</html>\n");
    html
}

/// Minimal HTML escaping for text and attribute values
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
