pub mod account_controller;
pub mod cart_controller;
pub mod catalog_admin_controller;
pub mod catalog_controller;
pub mod checkout_controller;
pub mod dto;
pub mod image_controller;
pub mod promotion_controller;
