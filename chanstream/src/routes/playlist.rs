use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::{AppStateRef, internal_error_with_log, service::LoadStatus};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummary {
    pub status: String,
    pub channels: usize,
    pub categories: usize,
}

pub async fn get_status(State(state): State<AppStateRef>) -> String {
    state.channel_service.status().await.to_string()
}

pub async fn load_playlist(
    State(state): State<AppStateRef>,
) -> Result<Json<LoadSummary>, StatusCode> {
    let status = state
        .channel_service
        .update()
        .await
        .map_err(internal_error_with_log!("Load playlist"))?;

    let (channels, categories) = match status {
        LoadStatus::Loaded {
            channels,
            categories,
        } => (channels, categories),
        _ => (0, 0),
    };

    Ok(Json(LoadSummary {
        status: status.to_string(),
        channels,
        categories,
    }))
}
