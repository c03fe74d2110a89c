use async_trait::async_trait;

use super::portfolio_model::{AnalyticsRequest, PortfolioAnalytics};
use crate::errors::Result;

/// Trait defining the contract for the portfolio analytics service.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Computes the full analytics bundle for one request: per-security
    /// return/risk metrics, the weighted portfolio aggregate, and the
    /// asset-class correlation cross-table.
    async fn compute_analytics(&self, request: &AnalyticsRequest) -> Result<PortfolioAnalytics>;
}
