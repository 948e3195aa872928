use axum::{
    Router,
    routing::{get, post},
};

use crate::AppStateRef;

mod channels;
mod playlist;

pub fn get_routes(app_state: &AppStateRef) -> Router {
    Router::new()
        .route("/status", get(playlist::get_status))
        .route("/playlist/load", post(playlist::load_playlist))
        .route("/channels", get(channels::get_channels))
        .route("/channels/{index}/favorite", post(channels::toggle_favorite))
        .route("/categories", get(channels::get_categories))
        .route("/categories/{name}", get(channels::get_category))
        .with_state(app_state.clone())
}
