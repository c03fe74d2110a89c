use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trailing return, weight and risk figures for one security.
///
/// Return and risk fields stay undefined when the daily-return sample
/// cannot support them; the weight is always defined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPerformance {
    pub ticker: String,
    pub security_name: String,
    pub major_asset_class: String,
    pub return_12m: Option<Decimal>,
    pub return_18m: Option<Decimal>,
    pub return_24m: Option<Decimal>,
    pub weight: Decimal,
    pub sigma_12m: Option<Decimal>,
    pub risk_adjusted_return_12m: Option<Decimal>,
}

/// Weight-aggregated portfolio-level figures for one customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPerformance {
    pub customer_id: String,
    pub return_12m: Option<Decimal>,
    pub sigma_12m: Option<Decimal>,
    pub risk_adjusted_return_12m: Option<Decimal>,
}
