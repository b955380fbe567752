//! Question loading and normalization.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A normalized question.
///
/// Ids are always reassigned to the 1-based position in the file during
/// loading, so within one set they are unique and contiguous from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Raw on-disk record. Every field is optional and defaults when missing.
/// A source `id` field is accepted but ignored; normalization assigns ids
/// from position.
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    #[serde(default)]
    question: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    answer: String,
}

/// Error loading a question set.
#[derive(Debug)]
pub enum QuizError {
    /// No resource with this set id exists under the data directory
    NotFound,
    /// The resource exists but is not an array of question records
    Malformed(String),
    /// The resource could not be read
    Io(String),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::NotFound => write!(f, "Question set not found"),
            QuizError::Malformed(e) => write!(f, "Malformed question set: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {}

/// Load and normalize the question set addressed by `set_id`.
///
/// `set_id` must be a bare basename as produced by the catalog; anything
/// resembling a path is rejected as not found before touching storage.
pub fn load_questions(data_dir: &Path, set_id: &str) -> Result<Vec<Question>, QuizError> {
    if !is_valid_set_id(set_id) {
        return Err(QuizError::NotFound);
    }

    let path = data_dir.join(format!("{}.json", set_id));
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(QuizError::NotFound),
        Err(e) => return Err(QuizError::Io(e.to_string())),
    };

    let records: Vec<QuestionRecord> = serde_json::from_str(&content)
        .map_err(|e| QuizError::Malformed(format!("{}: {}", path.display(), e)))?;

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(i, record)| Question {
            id: (i + 1) as u32,
            question: record.question,
            options: record.options,
            answer: record.answer,
        })
        .collect())
}

/// Reject set ids that could escape the data directory.
fn is_valid_set_id(set_id: &str) -> bool {
    !set_id.is_empty()
        && !set_id.contains('/')
        && !set_id.contains('\\')
        && !set_id.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_set(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_missing_set_is_not_found() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            load_questions(temp.path(), "maths_set_1"),
            Err(QuizError::NotFound)
        ));
    }

    #[test]
    fn test_load_full_records() {
        let temp = TempDir::new().unwrap();
        write_set(
            temp.path(),
            "maths_set_1.json",
            r#"[
                {"question": "2+2?", "options": ["3", "4", "5"], "answer": "4"},
                {"question": "3+3?", "options": ["5", "6", "7"], "answer": "6"}
            ]"#,
        );

        let questions = load_questions(temp.path(), "maths_set_1").unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[0].question, "2+2?");
        assert_eq!(questions[0].options, ["3", "4", "5"]);
        assert_eq!(questions[0].answer, "4");
        assert_eq!(questions[1].id, 2);
    }

    #[test]
    fn test_ids_are_contiguous_regardless_of_source_ids() {
        let temp = TempDir::new().unwrap();
        write_set(
            temp.path(),
            "maths_set_1.json",
            r#"[
                {"id": 7, "question": "a", "answer": "x"},
                {"id": 7, "question": "b", "answer": "y"},
                {"question": "c", "answer": "z"}
            ]"#,
        );

        let questions = load_questions(temp.path(), "maths_set_1").unwrap();
        let ids: Vec<_> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_missing_fields_default() {
        let temp = TempDir::new().unwrap();
        write_set(temp.path(), "maths_set_1.json", r#"[{}]"#);

        let questions = load_questions(temp.path(), "maths_set_1").unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[0].question, "");
        assert!(questions[0].options.is_empty());
        assert_eq!(questions[0].answer, "");
    }

    #[test]
    fn test_empty_array_is_ok() {
        let temp = TempDir::new().unwrap();
        write_set(temp.path(), "maths_set_1.json", "[]");

        let questions = load_questions(temp.path(), "maths_set_1").unwrap();
        assert!(questions.is_empty());
    }

    #[test]
    fn test_malformed_resource_fails_loudly() {
        let temp = TempDir::new().unwrap();
        write_set(temp.path(), "maths_set_1.json", r#"{"not": "an array"}"#);
        assert!(matches!(
            load_questions(temp.path(), "maths_set_1"),
            Err(QuizError::Malformed(_))
        ));

        write_set(temp.path(), "maths_set_2.json", "not json at all");
        assert!(matches!(
            load_questions(temp.path(), "maths_set_2"),
            Err(QuizError::Malformed(_))
        ));
    }

    #[test]
    fn test_path_like_set_ids_are_rejected() {
        let temp = TempDir::new().unwrap();
        write_set(temp.path(), "maths_set_1.json", "[]");

        for probe in ["../maths_set_1", "a/b", "a\\b", "..", ""] {
            assert!(
                matches!(load_questions(temp.path(), probe), Err(QuizError::NotFound)),
                "probe {:?} should be rejected",
                probe
            );
        }
    }
}
