use crate::data::models::product::Product;
use crate::data::models::schema::*;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// One product line in an anonymous session's cart.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = cart_items)]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartItem {
    pub id: i32,
    pub session_key: String,
    pub product_id: i32,
    pub quantity: i32,
    pub created: DateTime<Utc>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = cart_items)]
pub struct NewCartItem<'a> {
    pub session_key: &'a str,
    pub product_id: i32,
    pub quantity: i32,
}
