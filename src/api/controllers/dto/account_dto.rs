use super::order_dto::OrderResponse;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_joined: String,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub email_confirmed: bool,
    pub orders: Vec<OrderResponse>,
}

/// Returned by login: the bearer token plus the profile it unlocks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub profile: ProfileResponse,
}
