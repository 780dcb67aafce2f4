use crate::api::controllers::account_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::{get, post};

/// Everything under `/me` needs the bearer token issued by `/login`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(account_controller::register))
        .route("/login", post(account_controller::login))
        .route("/me", get(account_controller::me).put(account_controller::update_me))
        .route("/me/orders", get(account_controller::my_orders))
        .route("/me/orders/{id}", get(account_controller::my_order))
        .route("/me/password", post(account_controller::change_password))
}
