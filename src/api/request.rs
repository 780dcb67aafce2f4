use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct AddToCartRequest {
    pub product_id: i32,
    pub quantity: Option<i32>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

#[derive(Deserialize, Debug, Default)]
pub struct CheckoutRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub delivery_type: String,
    pub payment_type: String,
    pub address_street: Option<String>,
    pub address_apartment: Option<String>,
    pub address_entrance: Option<String>,
    pub address_floor: Option<String>,
    pub address_comment: Option<String>,
    pub pickup_point: Option<String>,
    pub note: Option<String>,
}

/// Struct for updating order status
#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Deserialize, Debug)]
pub struct CreatePromotionRequest {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub discount_type: Option<String>,
    pub discount_value: BigDecimal,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize, Debug)]
pub struct CategoryRequest {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ProductRequest {
    pub category_id: i32,
    pub name: String,
    pub slug: Option<String>,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub old_price: Option<BigDecimal>,
    pub unit: Option<String>,
    pub stock: Option<i32>,
    pub available: Option<bool>,
    pub weight: Option<BigDecimal>,
    pub dimensions: Option<String>,
    pub color: Option<String>,
    pub material: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LinkProductRequest {
    pub product_id: i32,
    pub priority: Option<i32>,
}

#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password_confirm: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct UpdateProfileRequest {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}
