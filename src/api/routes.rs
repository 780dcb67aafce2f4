pub mod account_routes;
pub mod admin_routes;
pub mod cart_routes;
pub mod catalog_routes;
pub mod checkout_routes;
pub mod promotion_routes;
