use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::interview::catalog::CatalogSource;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and catalog source.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = match state.service.bank().source() {
        CatalogSource::File => "file",
        CatalogSource::BuiltIn => "built_in",
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "interview-api",
        "catalog": catalog,
        "active_sessions": state.service.active_sessions(),
    }))
}
