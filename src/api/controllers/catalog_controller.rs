use crate::api::controllers::dto::catalog_dto::{
    CategoryDetailResponse, CategoryResponse, HomeResponse, ProductDetailResponse, ProductResponse,
};
use crate::api::controllers::dto::promotion_dto::PromotionResponse;
use crate::api::errors::APIErrors;
use crate::api::request::SearchQuery;
use crate::api::state::AppState;
use crate::services::catalog_service::CatalogService;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

/// Categories, featured and newest products, running promotions
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let service = CatalogService::new(&state.db, state.resolver.clone());
    let now = Utc::now();

    match service.home(now).await {
        Ok(home) => (StatusCode::OK, Json(HomeResponse::from((home, now)))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let service = CatalogService::new(&state.db, state.resolver.clone());

    match service.list_categories().await {
        Ok(categories) => {
            let response: Vec<CategoryResponse> =
                categories.into_iter().map(CategoryResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let service = CatalogService::new(&state.db, state.resolver.clone());

    match service.category_detail(&slug, Utc::now()).await {
        Ok(detail) => (StatusCode::OK, Json(CategoryDetailResponse::from(detail))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let service = CatalogService::new(&state.db, state.resolver.clone());

    match service.product_detail(&slug, Utc::now()).await {
        Ok(detail) => (StatusCode::OK, Json(ProductDetailResponse::from(detail))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

/// The promotion currently priced into a product, or 404 when none applies
pub async fn get_product_promotion(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> impl IntoResponse {
    let service = CatalogService::new(&state.db, state.resolver.clone());
    let now = Utc::now();

    match service.current_promotion(product_id, now).await {
        Ok(Some(promotion)) => {
            (StatusCode::OK, Json(PromotionResponse::from((promotion, now)))).into_response()
        }
        Ok(None) => APIErrors::NotFound("No current promotion".to_string()).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let service = CatalogService::new(&state.db, state.resolver.clone());
    let q = query.q.unwrap_or_default();

    match service.search(&q, Utc::now()).await {
        Ok(cards) => {
            let response: Vec<ProductResponse> =
                cards.into_iter().map(ProductResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}
