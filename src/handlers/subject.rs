use askama::Template;
use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::{Html, IntoResponse},
};

use crate::quiz::{self, SetEntry, Subject};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "sets.html")]
pub struct SetsTemplate {
  pub subject: String,
  pub sets: Vec<SetEntry>,
}

/// List the question sets available for a subject.
pub async fn show_sets(
  State(state): State<AppState>,
  Path(subject): Path<String>,
) -> impl IntoResponse {
  let subject: Subject = match subject.parse() {
    Ok(subject) => subject,
    Err(e) => {
      tracing::debug!("{}", e);
      return (StatusCode::NOT_FOUND, "No such subject").into_response();
    }
  };

  let sets = quiz::list_sets(&state.data_dir, subject);

  let template = SetsTemplate {
    subject: subject.title().to_string(),
    sets,
  };
  Html(template.render().unwrap_or_default()).into_response()
}
