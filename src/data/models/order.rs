use crate::data::models::product::Product;
use crate::data::models::schema::*;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub delivery_type: String,
    pub delivery_cost: BigDecimal,
    pub delivery_address: Option<String>,
    pub delivery_comment: Option<String>,
    pub pickup_point: Option<String>,
    pub payment_type: String,
    pub status: String,
    pub note: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Order {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Where the order goes: the courier address or the pickup point.
    pub fn destination(&self) -> Option<&str> {
        self.delivery_address
            .as_deref()
            .or(self.pickup_point.as_deref())
    }
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub delivery_type: String,
    pub delivery_cost: BigDecimal,
    pub delivery_address: Option<String>,
    pub delivery_comment: Option<String>,
    pub pickup_point: Option<String>,
    pub payment_type: String,
    pub status: String,
    pub note: String,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = orders)]
pub struct UpdateOrder<'a> {
    pub status: Option<&'a str>,
    pub note: Option<&'a str>,
    pub updated: DateTime<Utc>,
}

/// Order line with the unit price captured when the order was placed.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl OrderItem {
    pub fn cost(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub price: BigDecimal,
    pub quantity: i32,
}
