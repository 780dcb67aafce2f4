use crate::api::controllers::cart_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{delete, get, post, put};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_controller::view_cart))
        .route("/items", post(cart_controller::add_item))
        .route("/items/{product_id}", put(cart_controller::update_item))
        .route("/items/{product_id}", delete(cart_controller::remove_item))
}
