use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use m3ulite_rs::category::{Category, DisplayChannel};

use crate::{AppStateRef, not_found_with_log};

pub async fn get_channels(State(state): State<AppStateRef>) -> Json<Vec<DisplayChannel>> {
    Json(state.channel_service.channels().await)
}

pub async fn get_categories(State(state): State<AppStateRef>) -> Json<Vec<Category>> {
    Json(state.channel_service.categories().await)
}

pub async fn get_category(
    State(state): State<AppStateRef>,
    Path(name): Path<String>,
) -> Result<Json<Vec<DisplayChannel>>, StatusCode> {
    let channels = state
        .channel_service
        .channels_in(&name)
        .await
        .ok_or_else(|| not_found_with_log!(format!("Category {}", name)))?;

    Ok(Json(channels))
}

pub async fn toggle_favorite(
    State(state): State<AppStateRef>,
    Path(index): Path<usize>,
) -> Result<Json<DisplayChannel>, StatusCode> {
    let channel = state
        .channel_service
        .toggle_favorite(index)
        .await
        .ok_or_else(|| not_found_with_log!(format!("Channel {}", index)))?;

    Ok(Json(channel))
}
