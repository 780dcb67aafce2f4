use crate::data::models::schema::*;
use crate::pricing::DiscountType;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = promotions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Promotion {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub discount_type: DiscountType,
    pub discount_value: BigDecimal,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = promotions)]
pub struct NewPromotion {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub short_description: String,
    pub discount_type: DiscountType,
    pub discount_value: BigDecimal,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: bool,
}

#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = promotions)]
pub struct UpdatePromotion {
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}
