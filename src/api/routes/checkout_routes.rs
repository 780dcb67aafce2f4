use crate::api::controllers::checkout_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(checkout_controller::place_order))
}
