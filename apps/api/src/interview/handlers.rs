//! Axum route handlers for the Interview API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::catalog::{role_display_name, DEFAULT_ROLE, JOB_ROLES};
use crate::interview::report::Report;
use crate::interview::service::{NextQuestion, StartedSession};
use crate::interview::session::SubmitOutcome;
use crate::models::question::QuestionCategory;
use crate::models::resume::ResumeSignal;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct StartInterviewRequest {
    pub job_role: Option<String>,
    pub resume: Option<ResumeSignal>,
    pub question_count: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmitAnswerRequest {
    /// Missing answers are scored as empty.
    #[serde(default)]
    pub answer: Option<String>,
    pub question_index: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RoleInfo {
    pub key: String,
    pub name: String,
    pub has_questions: bool,
}

#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub key: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleInfo>,
    pub categories: Vec<CategoryInfo>,
    pub default_role: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
///
/// Advertised roles plus any extra roles the loaded catalog defines.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    let bank = state.service.bank();

    let mut roles: Vec<RoleInfo> = JOB_ROLES
        .iter()
        .map(|(key, name)| RoleInfo {
            key: key.to_string(),
            name: name.to_string(),
            has_questions: bank.has_role(key),
        })
        .collect();
    for key in bank.roles() {
        if role_display_name(key).is_none() {
            roles.push(RoleInfo {
                key: key.to_string(),
                name: key.replace('_', " "),
                has_questions: true,
            });
        }
    }

    let categories = QuestionCategory::ALL
        .iter()
        .map(|c| CategoryInfo {
            key: c.as_str(),
            name: c.display_name(),
        })
        .collect();

    Json(RolesResponse {
        roles,
        categories,
        default_role: DEFAULT_ROLE,
    })
}

/// POST /api/v1/interviews
///
/// Opens a session. The question sequence is fixed here for the session's lifetime.
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Json(request): Json<StartInterviewRequest>,
) -> Result<(StatusCode, Json<StartedSession>), AppError> {
    let job_role = request
        .job_role
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_ROLE);

    let started = state
        .service
        .start_session(job_role, request.resume, request.question_count);

    Ok((StatusCode::CREATED, Json(started)))
}

/// GET /api/v1/interviews/:id/question
pub async fn handle_current_question(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<NextQuestion>, AppError> {
    Ok(Json(state.service.current_question(session_id)?))
}

/// POST /api/v1/interviews/:id/answers
///
/// Scores the answer against the current question. Past the last question this is a
/// no-op that reports `already_completed`.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitOutcome>, AppError> {
    let answer = request.answer.unwrap_or_default();
    let outcome = state
        .service
        .submit_answer(session_id, &answer, request.question_index)?;
    Ok(Json(outcome))
}

/// GET /api/v1/interviews/:id/report
pub async fn handle_report(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Report>, AppError> {
    Ok(Json(state.service.report(session_id)?))
}

/// DELETE /api/v1/interviews/:id
pub async fn handle_end_interview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.service.end_session(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}
