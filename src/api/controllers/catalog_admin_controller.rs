use crate::api::controllers::dto::catalog_dto::{CategoryResponse, ProductRecordResponse};
use crate::api::errors::APIErrors;
use crate::api::extractors::AdminGuard;
use crate::api::request::{CategoryRequest, ProductRequest};
use crate::api::state::AppState;
use crate::data::models::category::Category;
use crate::data::models::product::Product;
use crate::services::catalog_admin_service::{CatalogAdminService, CategoryDraft, ProductDraft};
use crate::services::catalog_service::CategoryView;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

fn category_response(state: &AppState, category: Category) -> CategoryResponse {
    CategoryResponse::from(CategoryView {
        image_url: state.resolver.resolve(&category),
        category,
    })
}

fn product_response(state: &AppState, product: Product) -> ProductRecordResponse {
    let image_url = state.resolver.resolve(&product);
    ProductRecordResponse::from((product, image_url))
}

pub async fn create_category(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> impl IntoResponse {
    let draft = CategoryDraft::from(payload);
    let service = CatalogAdminService::new(&state.db);

    match service.create_category(&draft).await {
        Ok(category) => {
            (StatusCode::CREATED, Json(category_response(&state, category))).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn update_category(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Json(payload): Json<CategoryRequest>,
) -> impl IntoResponse {
    let draft = CategoryDraft::from(payload);
    let service = CatalogAdminService::new(&state.db);

    match service.update_category(category_id, &draft).await {
        Ok(category) => (StatusCode::OK, Json(category_response(&state, category))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn create_product(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> impl IntoResponse {
    let draft = ProductDraft::from(payload);
    let service = CatalogAdminService::new(&state.db);

    match service.create_product(&draft).await {
        Ok(product) => {
            (StatusCode::CREATED, Json(product_response(&state, product))).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn update_product(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Json(payload): Json<ProductRequest>,
) -> impl IntoResponse {
    let draft = ProductDraft::from(payload);
    let service = CatalogAdminService::new(&state.db);

    match service.update_product(product_id, &draft, Utc::now()).await {
        Ok(product) => (StatusCode::OK, Json(product_response(&state, product))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}
