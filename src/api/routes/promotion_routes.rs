use crate::api::controllers::{catalog_controller, promotion_controller};
use crate::api::state::AppState;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(promotion_controller::list_current))
        .route("/{slug}", get(promotion_controller::get_promotion))
        .route(
            "/for-product/{id}",
            get(catalog_controller::get_product_promotion),
        )
}
