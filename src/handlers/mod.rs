pub mod quiz;
pub mod subject;

use askama::Template;
use axum::response::Html;

use crate::quiz::Subject;

/// A subject entry on the landing page
pub struct SubjectLink {
  pub key: &'static str,
  pub name: &'static str,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
  pub subjects: Vec<SubjectLink>,
}

pub async fn index() -> Html<String> {
  let subjects = Subject::ALL
    .iter()
    .map(|s| SubjectLink {
      key: s.as_str(),
      name: s.title(),
    })
    .collect();

  let template = IndexTemplate { subjects };
  Html(template.render().unwrap_or_default())
}

pub use quiz::{quiz_form, quiz_submit};
pub use subject::show_sets;
