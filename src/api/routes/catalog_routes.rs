use crate::api::controllers::catalog_controller;
use crate::api::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(catalog_controller::home))
        .route("/categories", get(catalog_controller::list_categories))
        .route("/categories/{slug}", get(catalog_controller::get_category))
        .route("/products/search", get(catalog_controller::search_products))
        .route("/products/{slug}", get(catalog_controller::get_product))
}
