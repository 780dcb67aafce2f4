pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod product_image;
pub mod product_promotion;
pub mod promotion;
pub mod schema;
pub mod user;
