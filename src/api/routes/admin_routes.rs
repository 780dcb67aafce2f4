use crate::api::controllers::{
    catalog_admin_controller, checkout_controller, image_controller, promotion_controller,
};
use crate::api::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, post, put};

/// Largest accepted image upload.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Every route here requires the admin bearer token.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/promotions", post(promotion_controller::create_promotion))
        .route(
            "/promotions/{id}/products",
            post(promotion_controller::link_product),
        )
        .route(
            "/promotions/{id}/products/{product_id}",
            delete(promotion_controller::unlink_product),
        )
        .route(
            "/promotions/{id}/deactivate",
            post(promotion_controller::deactivate_promotion),
        )
        .route(
            "/categories/{id}/image",
            post(image_controller::upload_category_image),
        )
        .route("/categories", post(catalog_admin_controller::create_category))
        .route(
            "/categories/{id}",
            put(catalog_admin_controller::update_category)
                .delete(image_controller::delete_category),
        )
        .route(
            "/products/{id}/image",
            post(image_controller::upload_product_image),
        )
        .route(
            "/products/{id}/gallery",
            post(image_controller::add_gallery_image),
        )
        .route("/products", post(catalog_admin_controller::create_product))
        .route(
            "/products/{id}",
            put(catalog_admin_controller::update_product)
                .delete(image_controller::delete_product),
        )
        .route("/gallery/{id}", delete(image_controller::delete_gallery_image))
        .route(
            "/orders/{id}/status",
            put(checkout_controller::update_order_status),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
