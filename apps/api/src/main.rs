mod config;
mod errors;
mod interview;
mod models;
mod resume;
mod routes;
mod speech;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::interview::catalog::QuestionBank;
use crate::interview::selector::QuestionSelector;
use crate::interview::service::InterviewService;
use crate::routes::build_router;
use crate::speech::transcriber::{HttpTranscriber, Transcriber, UnavailableTranscriber};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    // Question catalog: override file, else built-in defaults
    let bank = QuestionBank::load_or_default(&config.questions_file);
    info!("Question catalog ready ({:?}, roles: {:?})", bank.source(), bank.roles());

    let selector = QuestionSelector::new(
        config.selection_strategy,
        config.default_question_count,
        config.max_questions,
    );
    let service = Arc::new(InterviewService::new(
        bank,
        selector,
        config.question_time_limit_secs,
    ));

    let transcriber = build_transcriber(&config);

    // Build app state
    let state = AppState {
        service,
        transcriber,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// HTTP transcription when an endpoint is configured; otherwise every recording is
/// treated as "no answer".
fn build_transcriber(config: &Config) -> Arc<dyn Transcriber> {
    match &config.transcription_url {
        Some(url) => match HttpTranscriber::new(url.clone(), config.transcription_api_key.clone()) {
            Ok(transcriber) => {
                info!("Speech transcription enabled ({url})");
                Arc::new(transcriber)
            }
            Err(e) => {
                warn!("Speech transcription disabled: {e}");
                Arc::new(UnavailableTranscriber)
            }
        },
        None => {
            info!("Speech transcription not configured");
            Arc::new(UnavailableTranscriber)
        }
    }
}
