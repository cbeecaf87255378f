pub mod api_utils;
pub mod date_utils;
pub mod icons;
pub mod modal;
pub mod product_store;
pub mod push;
pub mod qr_scanner;
