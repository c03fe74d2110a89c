pub mod db;

pub mod accounts;
pub mod customers;
pub mod holdings;
pub mod market_data;
pub mod securities;

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod schema;

pub use portfolio::*;
