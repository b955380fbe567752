//! Scoring of submitted answers against a loaded question set.

use std::collections::HashMap;

use super::Question;

/// One question's outcome, carrying both answers for the review display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    /// The user's submitted value; `None` when unanswered
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Aggregate result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub details: Vec<ScoredQuestion>,
    /// Count of correct answers
    pub score: usize,
    /// Question count
    pub total: usize,
}

/// Score submitted answers against the normalized question sequence.
///
/// Comparison is exact string equality, case- and whitespace-sensitive;
/// unanswered questions count as incorrect. The detailed output preserves
/// the input question order. Pure function: inputs are not mutated.
pub fn score_quiz(questions: &[Question], answers: &HashMap<u32, String>) -> QuizResult {
    let mut details = Vec::with_capacity(questions.len());
    let mut score = 0;

    for q in questions {
        let user_answer = answers.get(&q.id).cloned();
        let is_correct = user_answer.as_deref() == Some(q.answer.as_str());
        if is_correct {
            score += 1;
        }

        details.push(ScoredQuestion {
            id: q.id,
            question: q.question.clone(),
            options: q.options.clone(),
            user_answer,
            correct_answer: q.answer.clone(),
            is_correct,
        });
    }

    QuizResult {
        total: questions.len(),
        details,
        score,
    }
}
