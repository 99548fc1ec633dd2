//! Idempotent subtitle patch over parsed note documents
//!
//! The patch is a pure transform from a document to (mutated document,
//! change count): a block whose `subtitle` is already correct is a no-op,
//! so applying the patch twice never counts further updates.

use serde_json::Value;
use thiserror::Error;

use super::extract_subtitle;

/// A document that parsed as JSON but has the wrong shape
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("invalid JSON structure: root is not an object")]
    RootNotObject,
    #[error("invalid JSON structure: missing or invalid 'content' array")]
    InvalidContent,
}

/// Apply the subtitle patch to a parsed document in place.
///
/// For every object element of the document's `content` array that carries a
/// non-empty string `path`, sets `subtitle` to the last path segment. When
/// the derived subtitle equals the block's `title`, a preexisting `subtitle`
/// is left untouched; a preexisting `subtitle` that diverges from the derived
/// value is silently overwritten.
///
/// Returns the number of blocks whose `subtitle` was added or changed.
pub fn process_document(document: &mut Value) -> Result<usize, StructureError> {
    let root = document
        .as_object_mut()
        .ok_or(StructureError::RootNotObject)?;

    let content = root
        .get_mut("content")
        .and_then(Value::as_array_mut)
        .ok_or(StructureError::InvalidContent)?;

    let mut blocks_updated = 0;

    for element in content.iter_mut() {
        let block = match element.as_object_mut() {
            Some(block) => block,
            None => continue,
        };

        let subtitle = match extract_subtitle(block.get("path").and_then(Value::as_str)) {
            Some(subtitle) => subtitle,
            None => continue,
        };

        let title = block.get("title").and_then(Value::as_str).unwrap_or("");

        if subtitle != title {
            let existing = block.get("subtitle").and_then(Value::as_str);
            if existing != Some(subtitle.as_str()) {
                block.insert("subtitle".to_string(), Value::String(subtitle));
                blocks_updated += 1;
            }
        } else if !block.contains_key("subtitle") {
            // Subtitle matches the title; still added for consistency.
            block.insert("subtitle".to_string(), Value::String(subtitle));
            blocks_updated += 1;
        }
    }

    Ok(blocks_updated)
}
