use crate::data::models::product::Product;
use crate::data::models::promotion::Promotion;
use crate::data::models::schema::*;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Priority-weighted link between a product and a promotion.
#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = product_promotions)]
#[diesel(belongs_to(Product, foreign_key = product_id))]
#[diesel(belongs_to(Promotion, foreign_key = promotion_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductPromotion {
    pub id: i32,
    pub product_id: i32,
    pub promotion_id: i32,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = product_promotions)]
pub struct NewProductPromotion {
    pub product_id: i32,
    pub promotion_id: i32,
    pub priority: i32,
}
