//! Application state passed to request handlers.

use std::path::PathBuf;

/// Application state passed to all handlers.
///
/// Holds the resolved location of the question-set directory; requests
/// share no other state and the directory contents are never mutated.
#[derive(Clone)]
pub struct AppState {
    /// Directory containing question-set JSON resources
    pub data_dir: PathBuf,
}

impl AppState {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }
}
