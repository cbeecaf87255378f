pub mod api;
pub mod recent;
pub mod ui;
