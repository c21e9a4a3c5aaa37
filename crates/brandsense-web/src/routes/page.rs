//! HTMX-driven analyzer page.
//!
//! Full page for plain requests, HTML fragments when HTMX sends `HX-Request`.

use askama::Template;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use brandsense_core::{run_analysis, view::PageView, Session};
use serde::Deserialize;

use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    view: PageView,
}

#[derive(Template)]
#[template(path = "partials/form.html")]
struct FormTemplate {
    view: PageView,
}

#[derive(Template)]
#[template(path = "partials/results.html")]
struct ResultsTemplate {
    view: PageView,
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub brands: String,
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Render the empty form.
pub async fn index() -> Response {
    render(IndexTemplate {
        view: PageView::from_session(&Session::new()),
    })
}

/// POST /analyze - Run one analysis and render the outcome.
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AnalyzeForm>,
) -> Response {
    let mut session = Session::with_input(&form.comments, &form.brands);
    run_analysis(&mut session, &state.analyzer).await;

    let view = PageView::from_session(&session);
    if is_htmx(&headers) {
        render(ResultsTemplate { view })
    } else {
        render(IndexTemplate { view })
    }
}

/// POST /example - Fill the form with the sample comments.
///
/// The HTMX fragment only replaces the form, leaving the results area as it was.
/// Without JavaScript the request carries no results to keep, so the full page
/// comes back with the example form and an empty results area.
pub async fn example(headers: HeaderMap) -> Response {
    let mut session = Session::new();
    session.load_example();

    let view = PageView::from_session(&session);
    if is_htmx(&headers) {
        render(FormTemplate { view })
    } else {
        render(IndexTemplate { view })
    }
}

// ============================================================
// HELPERS
// ============================================================

fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request")
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("Template error: {}", e))).into_response(),
    }
}
