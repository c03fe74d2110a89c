pub mod correlation;
pub mod performance;
pub mod valuation;

pub mod portfolio_model;
pub mod portfolio_service;
pub mod portfolio_traits;

#[cfg(test)]
pub(crate) mod tests;

pub use portfolio_model::*;
pub use portfolio_service::*;
pub use portfolio_traits::*;
