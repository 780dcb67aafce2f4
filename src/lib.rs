pub mod api;
pub mod data;
pub mod images;
pub mod pricing;
pub mod security;
pub mod services;
pub mod storage;
pub mod utils;
