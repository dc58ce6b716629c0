use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
};

use crate::{
    error::{Error, Result},
    AppState,
};

/// Serves the front-end shell that renders the charts.
#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let path = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Ok(Html(body)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::NotFound(format!(
            "Front-end entry {} is missing",
            path.display()
        ))),
        Err(e) => Err(e.into()),
    }
}

/// Skill, experience and schedule counts, recomputed from the snapshot on every call.
#[axum::debug_handler]
pub async fn data(State(state): State<AppState>) -> impl IntoResponse {
    let counts = state.aggregate_service.summarize(state.snapshot.records());
    tracing::debug!(
        skills = counts.skills.len(),
        experience = counts.experience.len(),
        schedule = counts.schedule.len(),
        "Aggregates computed"
    );
    Json(counts)
}
