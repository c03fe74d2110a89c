// Module declarations
pub(crate) mod correlation_model;
pub(crate) mod correlation_service;

// Re-export the public interface
pub use correlation_model::{AssetClassReturns, CorrelationMatrix, DailyReturn};
pub use correlation_service::CorrelationService;
