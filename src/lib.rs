pub mod application;
pub mod config;
pub mod constants;
pub mod dom;
pub mod logging;
pub mod models;
pub mod ordered_map;
pub mod page;
pub mod populator;
pub mod prelude;
pub mod repository;
pub mod views;
