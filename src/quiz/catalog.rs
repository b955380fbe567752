//! Set catalog - scanning the data directory for question-set files.

use std::fs;
use std::path::Path;

use super::Subject;

/// A discovered question set: storage identifier plus human-facing name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetEntry {
    /// Basename without extension, used to address the set (e.g. "maths_set_1")
    pub file_id: String,
    /// Display name numbered by sorted position (e.g. "Maths Set 1")
    pub display_name: String,
}

/// List all question sets available for a subject.
///
/// Scans the data directory for files named `<prefix>*.json` and sorts
/// them lexicographically by file name. Display numbering follows the
/// sorted position, not any number embedded in the filename, so gaps or
/// multi-digit suffixes in filenames do not show through.
///
/// A missing or unreadable data directory yields an empty list.
pub fn list_sets(data_dir: &Path, subject: Subject) -> Vec<SetEntry> {
    let entries = match fs::read_dir(data_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot read data directory {}: {}", data_dir.display(), e);
            return Vec::new();
        }
    };

    let prefix = subject.file_prefix();
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| name.starts_with(prefix) && name.ends_with(".json"))
        .collect();
    names.sort();

    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let file_id = name.strip_suffix(".json").unwrap_or(&name).to_string();
            SetEntry {
                file_id,
                display_name: format!("{} Set {}", subject.label(), i + 1),
            }
        })
        .collect()
}
