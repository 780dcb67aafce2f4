use crate::data::models::promotion::Promotion;
use crate::pricing::errors::PromotionError;
use bigdecimal::{BigDecimal, Zero};
use diesel::deserialize::FromSqlRow;
use diesel::expression::AsExpression;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow, Serialize, Deserialize)]
#[diesel(sql_type = diesel::sql_types::Text)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    Fixed,
    BuyOneGetOne,
    SpecialPrice,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
            DiscountType::BuyOneGetOne => "buy_one_get_one",
            DiscountType::SpecialPrice => "special_price",
        }
    }
}

impl FromStr for DiscountType {
    type Err = PromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "percentage" => Ok(DiscountType::Percentage),
            "fixed" => Ok(DiscountType::Fixed),
            "buy_one_get_one" => Ok(DiscountType::BuyOneGetOne),
            "special_price" => Ok(DiscountType::SpecialPrice),
            other => Err(PromotionError::UnknownDiscountType(other.to_string())),
        }
    }
}

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Promotion {
    /// Discount this promotion grants on one unit at `price`.
    ///
    /// `SpecialPrice` treats the value as the new price, so the result goes
    /// negative when the special price is above the list price.
    pub fn calculate_discount(&self, price: &BigDecimal) -> BigDecimal {
        if *price <= BigDecimal::zero() {
            return BigDecimal::zero();
        }

        match self.discount_type {
            DiscountType::Percentage => (price * &self.discount_value) / BigDecimal::from(100),
            DiscountType::Fixed => self.discount_value.clone().min(price.clone()),
            DiscountType::SpecialPrice => price - &self.discount_value,
            DiscountType::BuyOneGetOne => price.clone(),
        }
    }
}
