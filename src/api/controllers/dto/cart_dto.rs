use super::catalog_dto::ProductResponse;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartLineResponse {
    pub product: ProductResponse,
    pub quantity: i32,
    pub line_total: BigDecimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    pub item_count: i32,
    pub total: BigDecimal,
}
