use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceResponse {
    pub price: BigDecimal,
    pub old_price: Option<BigDecimal>,
    pub sale_price: BigDecimal,
    pub discount_amount: BigDecimal,
    pub discount_percentage: BigDecimal,
    pub has_promotion: bool,
    pub promotion_name: Option<String>,
    pub promotion_slug: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub slug: String,
    pub brand: String,
    pub unit: String,
    pub stock: i32,
    pub available: bool,
    pub image_url: Option<String>,
    pub pricing: PriceResponse,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GalleryImageResponse {
    pub id: i32,
    pub url: Option<String>,
    pub alt_text: String,
    pub sort_order: i32,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
    pub description: String,
    pub weight: Option<BigDecimal>,
    pub dimensions: String,
    pub color: String,
    pub material: String,
    pub category: CategoryResponse,
    pub gallery: Vec<GalleryImageResponse>,
    pub related: Vec<ProductResponse>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryDetailResponse {
    pub category: CategoryResponse,
    pub products: Vec<ProductResponse>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HomeResponse {
    pub categories: Vec<CategoryResponse>,
    pub featured: Vec<ProductResponse>,
    pub newest: Vec<ProductResponse>,
    pub promotions: Vec<super::promotion_dto::PromotionResponse>,
    pub available_count: i64,
}

/// A product as stored, returned by the admin endpoints.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductRecordResponse {
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
    pub image_url: Option<String>,
}
