use crate::api::controllers::dto::order_dto::OrderResponse;
use crate::api::errors::APIErrors;
use crate::api::extractors::{AdminGuard, cart_session};
use crate::api::request::{CheckoutRequest, UpdateOrderStatusRequest};
use crate::api::state::AppState;
use crate::services::checkout_service::{CheckoutForm, CheckoutService, OrderStatus};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use std::str::FromStr;

/// Place an order from the session's cart
pub async fn place_order(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CheckoutRequest>,
) -> impl IntoResponse {
    let (jar, session) = cart_session(jar);
    let service = CheckoutService::new(&state.db, state.resolver.clone());
    let form = CheckoutForm::from(payload);

    let response = match service.place_order(&session, &form, Utc::now()).await {
        Ok(placed) => (StatusCode::CREATED, Json(OrderResponse::from(placed))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    };
    (jar, response)
}

pub async fn update_order_status(
    _admin: AdminGuard,
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> impl IntoResponse {
    let Ok(status) = OrderStatus::from_str(&payload.status) else {
        return APIErrors::Validation(vec!["status".to_string()]).into_response();
    };

    let service = CheckoutService::new(&state.db, state.resolver.clone());
    match service.update_status(order_id, status, Utc::now()).await {
        Ok(order) => (StatusCode::OK, Json(OrderResponse::from(order))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}
