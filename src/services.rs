pub mod account_service;
pub mod cart_service;
pub mod catalog_admin_service;
pub mod catalog_service;
pub mod checkout_service;
pub mod errors;
pub mod image_service;
pub mod promotion_service;
