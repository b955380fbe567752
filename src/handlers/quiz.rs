use std::collections::HashMap;

use askama::Template;
use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::{Html, IntoResponse, Response},
  Form,
};

use crate::quiz::{self, Question, QuizError, QuizResult};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "quiz.html")]
pub struct QuizTemplate {
  pub set_id: String,
  pub questions: Vec<Question>,
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate {
  pub set_id: String,
  pub result: QuizResult,
}

fn load_questions(state: &AppState, set_id: &str) -> Result<Vec<Question>, Response> {
  match quiz::load_questions(&state.data_dir, set_id) {
    Ok(questions) => Ok(questions),
    Err(QuizError::NotFound) => {
      Err((StatusCode::NOT_FOUND, "No such question set").into_response())
    }
    Err(e) => {
      tracing::warn!("Failed to load question set {}: {}", set_id, e);
      Err(
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "Question set could not be loaded",
        )
          .into_response(),
      )
    }
  }
}

/// Render the quiz form for a set.
pub async fn quiz_form(
  State(state): State<AppState>,
  Path(set_id): Path<String>,
) -> impl IntoResponse {
  let questions = match load_questions(&state, &set_id) {
    Ok(questions) => questions,
    Err(resp) => return resp,
  };

  let template = QuizTemplate { set_id, questions };
  Html(template.render().unwrap_or_default()).into_response()
}

/// Score a submitted quiz and render the answer review.
pub async fn quiz_submit(
  State(state): State<AppState>,
  Path(set_id): Path<String>,
  Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
  let questions = match load_questions(&state, &set_id) {
    Ok(questions) => questions,
    Err(resp) => return resp,
  };

  let answers = collect_answers(&form);
  let result = quiz::score_quiz(&questions, &answers);

  let template = ResultTemplate { set_id, result };
  Html(template.render().unwrap_or_default()).into_response()
}

/// Extract `q_<id>` form fields into an id -> answer map. Fields that do
/// not follow the naming scheme are ignored.
fn collect_answers(form: &HashMap<String, String>) -> HashMap<u32, String> {
  form
    .iter()
    .filter_map(|(name, value)| {
      let id = name.strip_prefix("q_")?.parse().ok()?;
      Some((id, value.clone()))
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_collect_answers() {
    let mut form = HashMap::new();
    form.insert("q_1".to_string(), "4".to_string());
    form.insert("q_2".to_string(), "6".to_string());
    form.insert("csrf_token".to_string(), "abc".to_string());
    form.insert("q_x".to_string(), "ignored".to_string());

    let answers = collect_answers(&form);
    assert_eq!(answers.len(), 2);
    assert_eq!(answers.get(&1).map(String::as_str), Some("4"));
    assert_eq!(answers.get(&2).map(String::as_str), Some("6"));
  }
}
