pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::interview::handlers;
use crate::resume::handlers::handle_analyze_resume;
use crate::speech::handlers::handle_voice_answer;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        // Resume API
        .route("/api/v1/resume/analyze", post(handle_analyze_resume))
        // Interview API
        .route("/api/v1/interviews", post(handlers::handle_start_interview))
        .route(
            "/api/v1/interviews/:id",
            delete(handlers::handle_end_interview),
        )
        .route(
            "/api/v1/interviews/:id/question",
            get(handlers::handle_current_question),
        )
        .route(
            "/api/v1/interviews/:id/answers",
            post(handlers::handle_submit_answer),
        )
        .route("/api/v1/interviews/:id/voice", post(handle_voice_answer))
        .route("/api/v1/interviews/:id/report", get(handlers::handle_report))
        .layer(upload_limit)
        .with_state(state)
}
