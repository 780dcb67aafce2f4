pub mod discount;
pub mod engine;
pub mod errors;
pub mod schedule;

pub use discount::DiscountType;
pub use engine::{PriceQuote, current_promotion, discount_amount, discount_percentage, sale_price};
pub use errors::PromotionError;
