use std::collections::BTreeMap;

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::{DECIMAL_PRECISION, TRADING_DAYS_12M, TRADING_DAYS_18M, TRADING_DAYS_24M};
use crate::portfolio::valuation::DailyHoldingValuation;

use super::performance_model::{PortfolioPerformance, SecurityPerformance};

const SQRT_TRADING_DAYS_12M_APPROX: Decimal = dec!(15.8113883008); // sqrt(250)
const SQRT_TRADING_DAYS_18M_APPROX: Decimal = dec!(19.3649167310); // sqrt(375)
const SQRT_TRADING_DAYS_24M_APPROX: Decimal = dec!(22.3606797750); // sqrt(500)

/// Aggregates joined valuation rows into per-security return/risk metrics
/// and the weighted portfolio-level figures.
pub struct PerformanceService;

impl PerformanceService {
    /// Creates a new PerformanceService instance
    pub fn new() -> Self {
        Self
    }

    /// Groups the valuation rows by ticker and computes trailing returns,
    /// portfolio weight, annualized volatility and the risk-adjusted
    /// return for each security, ordered by return_12m descending with
    /// undefined returns last.
    pub fn calculate_security_performance(
        &self,
        valuations: &[DailyHoldingValuation],
    ) -> Vec<SecurityPerformance> {
        // Grand total of position value across the whole joined set; the
        // weight denominator is global, never per group.
        let total_position_value: Decimal = valuations.iter().map(|v| v.position_value).sum();

        let mut groups: BTreeMap<&str, Vec<&DailyHoldingValuation>> = BTreeMap::new();
        for valuation in valuations {
            groups
                .entry(valuation.ticker.as_str())
                .or_default()
                .push(valuation);
        }

        let annualize_12m = Self::annualization_factor(TRADING_DAYS_12M, SQRT_TRADING_DAYS_12M_APPROX);
        let annualize_18m = Self::annualization_factor(TRADING_DAYS_18M, SQRT_TRADING_DAYS_18M_APPROX);
        let annualize_24m = Self::annualization_factor(TRADING_DAYS_24M, SQRT_TRADING_DAYS_24M_APPROX);

        let mut rows = Vec::with_capacity(groups.len());
        for (_, group) in groups {
            // Rows without a prior value carry no return observation but
            // still count toward the position-value exposure.
            let sample: Vec<Decimal> = group.iter().filter_map(|v| v.daily_return()).collect();
            let exposure: Decimal = group.iter().map(|v| v.position_value).sum();
            let weight = if total_position_value.is_zero() {
                Decimal::ZERO
            } else {
                exposure / total_position_value
            };

            let mean = Self::mean(&sample);
            let std_dev = Self::sample_std(&sample);

            let first = group[0];
            rows.push(SecurityPerformance {
                ticker: first.ticker.clone(),
                security_name: first.security_name.clone(),
                major_asset_class: first.major_asset_class.clone(),
                return_12m: mean.map(|m| (m * annualize_12m).round_dp(DECIMAL_PRECISION)),
                return_18m: mean.map(|m| (m * annualize_18m).round_dp(DECIMAL_PRECISION)),
                return_24m: mean.map(|m| (m * annualize_24m).round_dp(DECIMAL_PRECISION)),
                weight,
                sigma_12m: std_dev.map(|s| (s * annualize_12m).round_dp(DECIMAL_PRECISION)),
                // Mean over stdev of the raw daily sample; the annualization
                // factor cancels and must not be applied here.
                risk_adjusted_return_12m: match (mean, std_dev) {
                    (Some(m), Some(s)) => Some((m / s).round_dp(DECIMAL_PRECISION)),
                    _ => None,
                },
            });
        }

        rows.sort_by(|a, b| b.return_12m.cmp(&a.return_12m));
        rows
    }

    /// Aggregates security metrics into single portfolio-level figures by
    /// portfolio weight. Securities whose metric is undefined are skipped
    /// and the weight mass renormalizes over the contributors; a metric no
    /// security defines stays undefined.
    pub fn calculate_portfolio_performance(
        &self,
        customer_id: &str,
        securities: &[SecurityPerformance],
    ) -> PortfolioPerformance {
        PortfolioPerformance {
            customer_id: customer_id.to_string(),
            return_12m: Self::weighted_average(securities, |s| s.return_12m),
            sigma_12m: Self::weighted_average(securities, |s| s.sigma_12m),
            risk_adjusted_return_12m: Self::weighted_average(securities, |s| {
                s.risk_adjusted_return_12m
            }),
        }
    }

    fn weighted_average<F>(securities: &[SecurityPerformance], metric: F) -> Option<Decimal>
    where
        F: Fn(&SecurityPerformance) -> Option<Decimal>,
    {
        let mut weighted_sum = Decimal::ZERO;
        let mut weight_mass = Decimal::ZERO;
        for security in securities {
            if let Some(value) = metric(security) {
                weighted_sum += value * security.weight;
                weight_mass += security.weight;
            }
        }

        if weight_mass.is_zero() {
            None
        } else {
            Some((weighted_sum / weight_mass).round_dp(DECIMAL_PRECISION))
        }
    }

    fn annualization_factor(trading_days: u32, fallback: Decimal) -> Decimal {
        Decimal::from(trading_days).sqrt().unwrap_or(fallback)
    }

    fn mean(sample: &[Decimal]) -> Option<Decimal> {
        if sample.is_empty() {
            return None;
        }

        let count = Decimal::from(sample.len());
        let sum: Decimal = sample.iter().sum();
        Some(sum / count)
    }

    /// Sample standard deviation; undefined below two observations or at
    /// zero variance.
    fn sample_std(sample: &[Decimal]) -> Option<Decimal> {
        if sample.len() < 2 {
            return None;
        }

        let mean = Self::mean(sample)?;
        let count = Decimal::from(sample.len());
        let sum_squared_diff: Decimal = sample
            .iter()
            .map(|&r| {
                let diff = r - mean;
                diff * diff
            })
            .sum();

        let variance = sum_squared_diff / (count - Decimal::ONE);
        if variance <= Decimal::ZERO {
            return None;
        }

        variance.sqrt()
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new()
    }
}
