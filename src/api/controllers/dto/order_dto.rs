use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderItemResponse {
    pub product_id: i32,
    pub product_name: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
    pub cost: BigDecimal,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderResponse {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub delivery_type: String,
    pub delivery_cost: BigDecimal,
    pub destination: Option<String>,
    pub payment_type: String,
    pub items: Vec<OrderItemResponse>,
    pub total: Option<BigDecimal>,
    pub created: String,
}
