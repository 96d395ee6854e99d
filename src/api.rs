//! HTTP API handlers for the confidence index.
//!
//! # Endpoints
//!
//! - **POST /confidence-index**: Scores the posted quiz answers and returns
//!   the full result as JSON.
//!
//! - **POST /confidence-index/report**: Scores the answers and returns the
//!   plain-text report used by the mailing pipeline.
//!
//! - **GET /quiz/fields**: Lists every scored field with its known options.
//!
//! - **GET /health**: Health check.
//!
//! # Logging
//!
//! Handlers log only derived values (answer count, score, level, issue
//! count). The respondent's name and email are never logged, and the handler
//! arguments are skipped by `#[instrument]` for the same reason.

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::model::{ConfidenceIndexResult, QuizAnswers};
use crate::report::render_report;
use crate::rules::{FieldOptions, quiz_fields};
use crate::scoring::calculate;

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route("/confidence-index", post(post_confidence_index))
        .route("/confidence-index/report", post(post_confidence_report))
        .route("/quiz/fields", get(get_quiz_fields))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
}

/// POST /confidence-index - Score a set of quiz answers.
///
/// # Request Body
///
/// ```json
/// {
///     "age": "25-35",
///     "work-stress": "calm",
///     "sleep": "7-8",
///     "firstName": "Иван"
/// }
/// ```
///
/// Every field is optional. Unknown values are scored as neutral.
///
/// # Response
///
/// ```json
/// {
///     "score": 75,
///     "categoryScores": { "lifestyle": 60, "physical": 55, "sexual": 50, "mental": 70 },
///     "level": "добро",
///     "testosteroneEstimate": "добър",
///     "urgencyLevel": "ниска",
///     "percentile": 90,
///     "timeline": { "day14": 85, "day30": 93, "day60": 100, "day90": 100 },
///     "topIssues": [],
///     "recommendations": ["..."]
/// }
/// ```
#[instrument(skip_all, fields(answered))]
pub async fn post_confidence_index(
    Json(answers): Json<QuizAnswers>,
) -> Json<ConfidenceIndexResult> {
    tracing::Span::current().record("answered", answers.answered_count());

    let result = calculate(&answers);

    info!(
        score = result.score,
        level = %result.level,
        urgency = %result.urgency_level,
        issue_count = result.top_issues.len(),
        "Confidence index calculated"
    );

    Json(result)
}

/// POST /confidence-index/report - Score answers and render a text report.
///
/// Takes the same body as `POST /confidence-index` and returns
/// `text/plain; charset=utf-8`.
#[instrument(skip_all, fields(answered))]
pub async fn post_confidence_report(Json(answers): Json<QuizAnswers>) -> String {
    tracing::Span::current().record("answered", answers.answered_count());

    let result = calculate(&answers);
    let report = render_report(&answers, &result);

    info!(
        score = result.score,
        level = %result.level,
        report_len = report.len(),
        "Confidence report rendered"
    );

    report
}

/// GET /quiz/fields - List the scored fields and their accepted options.
///
/// # Response
///
/// ```json
/// [
///     { "field": "age", "options": ["18-24", "25-35", "36-45", "46-55", "56+"] },
///     { "field": "height", "options": [] }
/// ]
/// ```
pub async fn get_quiz_fields() -> Json<Vec<FieldOptions>> {
    Json(quiz_fields())
}

/// GET /health - Simple health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
