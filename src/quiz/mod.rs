//! Quiz engine: set discovery, question loading, and scoring.
//!
//! Question sets are plain JSON files in the data directory, one array of
//! question records per file. Filenames carry the subject:
//!
//! - `english_synonyms_set*.json` for english
//! - `maths_set*.json` for maths
//!
//! Sets are read fresh from disk on every request; nothing is cached and
//! the source files are never written to.

pub mod catalog;
pub mod questions;
pub mod scoring;

pub use catalog::{list_sets, SetEntry};
pub use questions::{load_questions, Question, QuizError};
pub use scoring::{score_quiz, QuizResult, ScoredQuestion};

use serde::{Deserialize, Serialize};

/// Quiz subject. Each subject maps to a fixed filename prefix used for
/// set discovery and to a label used in human-facing set names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    English,
    Maths,
}

impl Subject {
    pub const ALL: [Subject; 2] = [Subject::English, Subject::Maths];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::English => "english",
            Subject::Maths => "maths",
        }
    }

    /// Capitalized name for page headings
    pub fn title(&self) -> &'static str {
        match self {
            Subject::English => "English",
            Subject::Maths => "Maths",
        }
    }

    /// Filename prefix matched against entries in the data directory
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Subject::English => "english_synonyms_set",
            Subject::Maths => "maths_set",
        }
    }

    /// Label used in display names ("Synonyms Set 1", "Maths Set 2")
    pub fn label(&self) -> &'static str {
        match self {
            Subject::English => "Synonyms",
            Subject::Maths => "Maths",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" => Ok(Subject::English),
            "maths" => Ok(Subject::Maths),
            _ => Err(UnknownSubject(s.to_string())),
        }
    }
}

/// Requested subject key is not in the fixed subject set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSubject(pub String);

impl std::fmt::Display for UnknownSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown subject: {}", self.0)
    }
}

impl std::error::Error for UnknownSubject {}
