// Module declarations
pub(crate) mod performance_model;
pub(crate) mod performance_service;

// Re-export the public interface
pub use performance_model::{PortfolioPerformance, SecurityPerformance};
pub use performance_service::PerformanceService;
