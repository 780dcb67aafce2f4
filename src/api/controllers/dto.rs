pub mod account_dto;
pub mod cart_dto;
pub mod catalog_dto;
pub mod image_dto;
pub mod order_dto;
pub mod promotion_dto;
