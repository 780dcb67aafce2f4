use crate::data::models::category::Category;
use crate::data::models::schema::*;
use crate::images::{HasImageSources, ImageSources};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Associations, PartialEq, Debug, Clone)]
#[diesel(table_name = products)]
#[diesel(belongs_to(Category, foreign_key = category_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub slug: String,
    pub brand: String,
    pub description: String,
    pub price: BigDecimal,
    pub old_price: Option<BigDecimal>,
    pub unit: String,
    pub stock: i32,
    pub available: bool,
    pub weight: Option<BigDecimal>,
    pub dimensions: String,
    pub color: String,
    pub material: String,
    pub image: Option<String>,
    pub image_file: Option<String>,
    pub image_url: Option<String>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl HasImageSources for Product {
    const UPLOAD_FOLDER: &'static str = "products";

    fn image_sources(&self) -> ImageSources {
        ImageSources::new(
            self.image.clone(),
            self.image_file.clone(),
            self.image_url.clone(),
        )
    }
}

/// Units a product can be sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Piece,
    Kilogram,
    Litre,
    Metre,
    SquareMetre,
    CubicMetre,
    Pack,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Piece => "pcs",
            Unit::Kilogram => "kg",
            Unit::Litre => "l",
            Unit::Metre => "m",
            Unit::SquareMetre => "m2",
            Unit::CubicMetre => "m3",
            Unit::Pack => "pack",
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pcs" => Ok(Unit::Piece),
            "kg" => Ok(Unit::Kilogram),
            "l" => Ok(Unit::Litre),
            "m" => Ok(Unit::Metre),
            "m2" => Ok(Unit::SquareMetre),
            "m3" => Ok(Unit::CubicMetre),
            "pack" => Ok(Unit::Pack),
            _ => Err(()),
        }
    }
}

#[derive(Insertable, PartialEq, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct<'a> {
    pub category_id: i32,
    pub name: &'a str,
    pub slug: &'a str,
    pub brand: &'a str,
    pub description: &'a str,
    pub price: BigDecimal,
    pub old_price: Option<BigDecimal>,
    pub unit: &'a str,
    pub stock: i32,
    pub available: bool,
    pub weight: Option<BigDecimal>,
    pub dimensions: &'a str,
    pub color: &'a str,
    pub material: &'a str,
    pub image_url: Option<&'a str>,
}

/// Replaces every editable column. Image columns are managed separately.
#[derive(AsChangeset, PartialEq, Debug)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateProduct<'a> {
    pub category_id: i32,
    pub name: &'a str,
    pub slug: &'a str,
    pub brand: &'a str,
    pub description: &'a str,
    pub price: BigDecimal,
    pub old_price: Option<BigDecimal>,
    pub unit: &'a str,
    pub stock: i32,
    pub available: bool,
    pub weight: Option<BigDecimal>,
    pub dimensions: &'a str,
    pub color: &'a str,
    pub material: &'a str,
    pub updated: DateTime<Utc>,
}
