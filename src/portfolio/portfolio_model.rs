use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::market_data::DEFAULT_PRICE_TYPE;

use super::correlation::CorrelationMatrix;
use super::performance::{PortfolioPerformance, SecurityPerformance};

/// Invocation parameters for one analytics run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRequest {
    pub customer_ids: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price_type: String,
}

impl AnalyticsRequest {
    /// Creates a request against the default (adjusted close) price type
    pub fn new(customer_ids: Vec<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            customer_ids,
            start_date,
            end_date,
            price_type: DEFAULT_PRICE_TYPE.to_string(),
        }
    }

    /// Validates the request parameters
    pub fn validate(&self) -> Result<()> {
        if self.customer_ids.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "customerIds".to_string(),
            )));
        }
        if self.customer_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Customer ids cannot be empty".to_string(),
            )));
        }
        if self.start_date > self.end_date {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Start date must be before end date".to_string(),
            )));
        }
        if self.price_type.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "priceType".to_string(),
            )));
        }
        Ok(())
    }
}

/// The three result sets produced by one analytics run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalytics {
    /// Per-security metrics, ordered by return_12m descending
    pub security_performance: Vec<SecurityPerformance>,
    /// Weight-aggregated portfolio figures
    pub portfolio_performance: PortfolioPerformance,
    /// Asset-class correlation cross-table in fixed presentation order
    pub asset_class_correlations: CorrelationMatrix,
}
