use crate::api::controllers::dto::account_dto::{LoginResponse, ProfileResponse, UserResponse};
use crate::api::controllers::dto::order_dto::OrderResponse;
use crate::api::errors::APIErrors;
use crate::api::request::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest,
};
use crate::api::response::MessageResponse;
use crate::api::state::AppState;
use crate::data::models::user::User;
use crate::security::jwt::{AccessClaims, JwtService};
use crate::services::account_service::{
    AccountService, PasswordChangeForm, ProfileForm, RegistrationForm,
};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let service = AccountService::new(&state.db);
    let form = RegistrationForm::from(payload);

    match service.register(&form).await {
        Ok((user, _profile)) => {
            (StatusCode::CREATED, Json(UserResponse::from(user))).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

/// Checks credentials and returns a bearer token with the profile
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    let service = AccountService::new(&state.db);

    let user = match service.login(&payload.username, &payload.password).await {
        Ok(user) => user,
        Err(e) => return APIErrors::from(e).into_response(),
    };

    let tokens = JwtService::from_config(&state.config);
    let token = match tokens.generate_token(&user) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to issue token: {}", e);
            return APIErrors::Internal.into_response();
        }
    };

    match service.profile(&user).await {
        Ok((profile, orders)) => (
            StatusCode::OK,
            Json(LoginResponse {
                token,
                token_type: "Bearer".to_string(),
                expires_in: tokens.expires_in(),
                profile: ProfileResponse::from((user, profile, orders)),
            }),
        )
            .into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

async fn signed_in_user(service: &AccountService, claims: &AccessClaims) -> Result<User, Response> {
    let user_id = claims
        .user_id()
        .map_err(|_| APIErrors::Unauthorized.into_response())?;

    service
        .current_user(user_id)
        .await
        .map_err(|e| APIErrors::from(e).into_response())
}

/// Profile with the most recent orders
pub async fn me(claims: AccessClaims, State(state): State<AppState>) -> impl IntoResponse {
    let service = AccountService::new(&state.db);
    let user = match signed_in_user(&service, &claims).await {
        Ok(user) => user,
        Err(rejection) => return rejection,
    };

    match service.profile(&user).await {
        Ok((profile, orders)) => (
            StatusCode::OK,
            Json(ProfileResponse::from((user, profile, orders))),
        )
            .into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn my_orders(claims: AccessClaims, State(state): State<AppState>) -> impl IntoResponse {
    let service = AccountService::new(&state.db);
    let user = match signed_in_user(&service, &claims).await {
        Ok(user) => user,
        Err(rejection) => return rejection,
    };

    match service.order_history(&user.email, None).await {
        Ok(orders) => {
            let response: Vec<OrderResponse> =
                orders.into_iter().map(OrderResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => APIErrors::from(e).into_response(),
    }
}

/// Only orders placed with the user's email are visible
pub async fn my_order(
    claims: AccessClaims,
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> impl IntoResponse {
    let service = AccountService::new(&state.db);
    let user = match signed_in_user(&service, &claims).await {
        Ok(user) => user,
        Err(rejection) => return rejection,
    };

    match service.order_detail(&user.email, order_id).await {
        Ok(order) => (StatusCode::OK, Json(OrderResponse::from(order))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn update_me(
    claims: AccessClaims,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProfileRequest>,
) -> impl IntoResponse {
    let user_id = match claims.user_id() {
        Ok(user_id) => user_id,
        Err(_) => return APIErrors::Unauthorized.into_response(),
    };
    let service = AccountService::new(&state.db);
    let form = ProfileForm::from(payload);

    let (user, profile) = match service.update_profile(user_id, &form).await {
        Ok(updated) => updated,
        Err(e) => return APIErrors::from(e).into_response(),
    };

    match service.profile(&user).await {
        Ok((_, orders)) => (
            StatusCode::OK,
            Json(ProfileResponse::from((user, Some(profile), orders))),
        )
            .into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}

pub async fn change_password(
    claims: AccessClaims,
    State(state): State<AppState>,
    Json(payload): Json<ChangePasswordRequest>,
) -> impl IntoResponse {
    let user_id = match claims.user_id() {
        Ok(user_id) => user_id,
        Err(_) => return APIErrors::Unauthorized.into_response(),
    };
    let service = AccountService::new(&state.db);
    let form = PasswordChangeForm::from(payload);

    match service.change_password(user_id, &form).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Password changed"))).into_response(),
        Err(e) => APIErrors::from(e).into_response(),
    }
}
