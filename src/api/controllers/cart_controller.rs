use crate::api::controllers::dto::cart_dto::CartResponse;
use crate::api::errors::APIErrors;
use crate::api::extractors::cart_session;
use crate::api::request::{AddToCartRequest, UpdateCartItemRequest};
use crate::api::state::AppState;
use crate::services::cart_service::CartService;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

pub async fn view_cart(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, session) = cart_session(jar);
    (jar, cart_response(&state, &session, StatusCode::OK).await)
}

pub async fn add_item(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<AddToCartRequest>,
) -> impl IntoResponse {
    let (jar, session) = cart_session(jar);
    let service = CartService::new(&state.db, state.resolver.clone());

    let response = match service
        .add(&session, payload.product_id, payload.quantity.unwrap_or(1))
        .await
    {
        Ok(()) => cart_response(&state, &session, StatusCode::CREATED).await,
        Err(e) => APIErrors::from(e).into_response(),
    };
    (jar, response)
}

/// Quantity zero or below removes the line
pub async fn update_item(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(product_id): Path<i32>,
    Json(payload): Json<UpdateCartItemRequest>,
) -> impl IntoResponse {
    let (jar, session) = cart_session(jar);
    let service = CartService::new(&state.db, state.resolver.clone());

    let response = match service.update(&session, product_id, payload.quantity).await {
        Ok(()) => cart_response(&state, &session, StatusCode::OK).await,
        Err(e) => APIErrors::from(e).into_response(),
    };
    (jar, response)
}

pub async fn remove_item(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(product_id): Path<i32>,
) -> impl IntoResponse {
    let (jar, session) = cart_session(jar);
    let service = CartService::new(&state.db, state.resolver.clone());

    let response = match service.remove(&session, product_id).await {
        Ok(()) => cart_response(&state, &session, StatusCode::OK).await,
        Err(e) => APIErrors::from(e).into_response(),
    };
    (jar, response)
}

async fn cart_response(state: &AppState, session: &str, status: StatusCode) -> Response {
    let service = CartService::new(&state.db, state.resolver.clone());

    match service.view(session, Utc::now()).await {
        Ok(cart) => (status, Json(CartResponse::from(cart))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}
