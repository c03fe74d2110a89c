use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::accounts::{AccountRepository, AccountRepositoryTrait};
use crate::customers::{CustomerRepository, CustomerRepositoryTrait};
use crate::db::DbPool;
use crate::errors::Result;
use crate::holdings::{HoldingRepository, HoldingRepositoryTrait};
use crate::market_data::{MarketDataRepository, MarketDataRepositoryTrait};
use crate::securities::{SecurityRepository, SecurityRepositoryTrait};

use super::correlation::CorrelationService;
use super::performance::PerformanceService;
use super::portfolio_model::{AnalyticsRequest, PortfolioAnalytics};
use super::portfolio_traits::PortfolioServiceTrait;
use super::valuation::ValuationService;

/// Wires the pipeline stages together: join, per-security metrics,
/// portfolio aggregation, and the asset-class correlation cross-table.
pub struct PortfolioService {
    valuation_service: ValuationService,
    performance_service: PerformanceService,
    correlation_service: CorrelationService,
}

impl PortfolioService {
    /// Builds the analytics pipeline over the given store
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self::with_repositories(
            Arc::new(CustomerRepository::new(pool.clone())),
            Arc::new(AccountRepository::new(pool.clone())),
            Arc::new(HoldingRepository::new(pool.clone())),
            Arc::new(SecurityRepository::new(pool.clone())),
            Arc::new(MarketDataRepository::new(pool)),
        )
    }

    /// Builds the analytics pipeline over caller-supplied repositories
    pub fn with_repositories(
        customer_repository: Arc<dyn CustomerRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
        security_repository: Arc<dyn SecurityRepositoryTrait>,
        market_data_repository: Arc<dyn MarketDataRepositoryTrait>,
    ) -> Self {
        Self {
            valuation_service: ValuationService::new(
                customer_repository,
                account_repository,
                holding_repository,
                security_repository,
                market_data_repository,
            ),
            performance_service: PerformanceService::new(),
            correlation_service: CorrelationService::new(),
        }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn compute_analytics(&self, request: &AnalyticsRequest) -> Result<PortfolioAnalytics> {
        request.validate()?;

        let valuations = self.valuation_service.build_holding_valuations(request)?;
        if valuations.is_empty() {
            warn!(
                "No priced holdings for customers {:?} between {} and {}; returning empty analytics",
                request.customer_ids, request.start_date, request.end_date
            );
        }

        let customer_label = request.customer_ids.join(",");

        let security_performance = self
            .performance_service
            .calculate_security_performance(&valuations);
        let portfolio_performance = self
            .performance_service
            .calculate_portfolio_performance(&customer_label, &security_performance);

        let daily_returns = self
            .correlation_service
            .calculate_daily_returns(&valuations, request.start_date);
        let asset_class_returns = self
            .correlation_service
            .calculate_asset_class_returns(&daily_returns);
        let asset_class_correlations = self
            .correlation_service
            .calculate_correlation_matrix(&asset_class_returns);

        debug!(
            "Computed analytics for {}: {} securities over {} trading dates",
            customer_label,
            security_performance.len(),
            asset_class_returns.len()
        );

        Ok(PortfolioAnalytics {
            security_performance,
            portfolio_performance,
            asset_class_correlations,
        })
    }
}
