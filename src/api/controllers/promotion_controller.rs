use crate::api::controllers::dto::promotion_dto::{
    ProductPromotionResponse, PromotionDetailResponse, PromotionResponse,
};
use crate::api::errors::APIErrors;
use crate::api::extractors::AdminGuard;
use crate::api::request::{CreatePromotionRequest, LinkProductRequest};
use crate::api::response::MessageResponse;
use crate::api::state::AppState;
use crate::services::promotion_service::{MIN_PRIORITY, PromotionDraft, PromotionService};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

/// Promotions running right now
pub async fn list_current(State(state): State<AppState>) -> impl IntoResponse {
    let service = PromotionService::new(&state.db);
    let now = Utc::now();

    match service.list_current(now).await {
        Ok(promotions) => {
            let response: Vec<PromotionResponse> = promotions
                .into_iter()
                .map(|p| PromotionResponse::from((p, now)))
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn get_promotion(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let service = PromotionService::new(&state.db);

    match service.detail(&slug).await {
        Ok(detail) => (
            StatusCode::OK,
            Json(PromotionDetailResponse::from((detail, Utc::now()))),
        )
            .into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn create_promotion(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Json(payload): Json<CreatePromotionRequest>,
) -> impl IntoResponse {
    let draft = match PromotionDraft::try_from(payload) {
        Ok(draft) => draft,
        Err(e) => return APIErrors::from(e).into_response(),
    };

    let service = PromotionService::new(&state.db);
    let now = Utc::now();

    match service.create(draft, now).await {
        Ok(promotion) => {
            (StatusCode::CREATED, Json(PromotionResponse::from((promotion, now)))).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn link_product(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path(promotion_id): Path<i32>,
    Json(payload): Json<LinkProductRequest>,
) -> impl IntoResponse {
    let service = PromotionService::new(&state.db);
    let priority = payload.priority.unwrap_or(MIN_PRIORITY);

    match service.link(payload.product_id, promotion_id, priority).await {
        Ok(link) => {
            (StatusCode::CREATED, Json(ProductPromotionResponse::from(link))).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn unlink_product(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path((promotion_id, product_id)): Path<(i32, i32)>,
) -> impl IntoResponse {
    let service = PromotionService::new(&state.db);

    match service.unlink(product_id, promotion_id).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Product unlinked"))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn deactivate_promotion(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path(promotion_id): Path<i32>,
) -> impl IntoResponse {
    let service = PromotionService::new(&state.db);
    let now = Utc::now();

    match service.deactivate(promotion_id, now).await {
        Ok(promotion) => {
            (StatusCode::OK, Json(PromotionResponse::from((promotion, now)))).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}
