use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PromotionResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub short_description: String,
    pub discount_type: String,
    pub discount_value: BigDecimal,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: bool,
    pub is_current: bool,
    pub is_upcoming: bool,
    pub is_expired: bool,
    pub days_left: i64,
    pub time_left: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductPromotionResponse {
    pub id: i32,
    pub product_id: i32,
    pub promotion_id: i32,
    pub priority: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinkedProductResponse {
    pub product_id: i32,
    pub name: String,
    pub slug: String,
    pub priority: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PromotionDetailResponse {
    pub promotion: PromotionResponse,
    pub description: String,
    pub products: Vec<LinkedProductResponse>,
}
