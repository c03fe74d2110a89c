// Module declarations
pub(crate) mod valuation_model;
pub(crate) mod valuation_service;

// Re-export the public interface
pub use valuation_model::DailyHoldingValuation;
pub use valuation_service::ValuationService;
