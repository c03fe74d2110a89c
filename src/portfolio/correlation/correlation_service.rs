use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::CORRELATION_PRECISION;
use crate::portfolio::valuation::DailyHoldingValuation;
use crate::securities::AssetClass;

use super::correlation_model::{AssetClassReturns, CorrelationMatrix, DailyReturn};

/// Derives the daily return series per security, averages them into one
/// series per canonical asset class, and correlates every class pair into
/// the presentation cross-table.
pub struct CorrelationService;

impl CorrelationService {
    /// Creates a new CorrelationService instance
    pub fn new() -> Self {
        Self
    }

    /// Daily simple return per (ticker, date), restricted to dates strictly
    /// after the window start. Normally one observation per group; the mean
    /// absorbs duplicate holdings of the same ticker. Groups without a
    /// defined return are dropped. Ordered by date ascending.
    pub fn calculate_daily_returns(
        &self,
        valuations: &[DailyHoldingValuation],
        window_start: NaiveDate,
    ) -> Vec<DailyReturn> {
        let mut groups: BTreeMap<(NaiveDate, &str), (&DailyHoldingValuation, Vec<Decimal>)> =
            BTreeMap::new();
        for valuation in valuations {
            if valuation.date <= window_start {
                continue;
            }
            let entry = groups
                .entry((valuation.date, valuation.ticker.as_str()))
                .or_insert_with(|| (valuation, Vec::new()));
            if let Some(daily_return) = valuation.daily_return() {
                entry.1.push(daily_return);
            }
        }

        let mut rows = Vec::with_capacity(groups.len());
        for ((date, ticker), (representative, sample)) in groups {
            if sample.is_empty() {
                continue;
            }
            let sum: Decimal = sample.iter().sum();
            rows.push(DailyReturn {
                ticker: ticker.to_string(),
                major_asset_class: representative.major_asset_class.clone(),
                date,
                return_1d: sum / Decimal::from(sample.len()),
            });
        }
        rows
    }

    /// One row per distinct trading date carrying the cross-sectional mean
    /// return of each canonical asset class. Securities whose normalized
    /// label matches no canonical class contribute to no column.
    pub fn calculate_asset_class_returns(
        &self,
        daily_returns: &[DailyReturn],
    ) -> Vec<AssetClassReturns> {
        let mut by_date: BTreeMap<NaiveDate, HashMap<AssetClass, Vec<Decimal>>> = BTreeMap::new();
        for daily_return in daily_returns {
            let class = match AssetClass::from_label(&daily_return.major_asset_class) {
                Some(class) => class,
                None => continue,
            };
            by_date
                .entry(daily_return.date)
                .or_default()
                .entry(class)
                .or_default()
                .push(daily_return.return_1d);
        }

        by_date
            .into_iter()
            .map(|(date, samples)| {
                let average = |class: AssetClass| -> Option<Decimal> {
                    samples.get(&class).map(|sample| {
                        let sum: Decimal = sample.iter().sum();
                        sum / Decimal::from(sample.len())
                    })
                };
                AssetClassReturns {
                    date,
                    equity: average(AssetClass::Equity),
                    commodities: average(AssetClass::Commodities),
                    fixed_income: average(AssetClass::FixedIncome),
                    alternatives: average(AssetClass::Alternatives),
                }
            })
            .collect()
    }

    /// Builds the symmetric cross-table: one pairwise coefficient per
    /// unordered class pair, materialized into the NxN matrix by lookup.
    pub fn calculate_correlation_matrix(&self, series: &[AssetClassReturns]) -> CorrelationMatrix {
        let classes = AssetClass::ALL.to_vec();

        let mut pairwise: HashMap<(AssetClass, AssetClass), Option<Decimal>> = HashMap::new();
        for (i, &x) in classes.iter().enumerate() {
            for &y in classes.iter().skip(i + 1) {
                pairwise.insert((x, y), Self::pairwise_correlation(series, x, y));
            }
        }

        let coefficients = classes
            .iter()
            .map(|&row| {
                classes
                    .iter()
                    .map(|&column| {
                        if row == column {
                            Some(dec!(1.000))
                        } else {
                            pairwise
                                .get(&(row, column))
                                .or_else(|| pairwise.get(&(column, row)))
                                .copied()
                                .flatten()
                        }
                    })
                    .collect()
            })
            .collect();

        CorrelationMatrix {
            classes,
            coefficients,
        }
    }

    /// Pearson coefficient between two class series over pairwise-complete
    /// observations, via the raw-moment formula. Undefined when no date has
    /// both series or when either series is constant over the overlap.
    fn pairwise_correlation(
        series: &[AssetClassReturns],
        x: AssetClass,
        y: AssetClass,
    ) -> Option<Decimal> {
        let mut count = 0u32;
        let mut sum_x = Decimal::ZERO;
        let mut sum_y = Decimal::ZERO;
        let mut sum_xy = Decimal::ZERO;
        let mut sum_xx = Decimal::ZERO;
        let mut sum_yy = Decimal::ZERO;

        for row in series {
            if let (Some(x_value), Some(y_value)) = (row.for_class(x), row.for_class(y)) {
                count += 1;
                sum_x += x_value;
                sum_y += y_value;
                sum_xy += x_value * y_value;
                sum_xx += x_value * x_value;
                sum_yy += y_value * y_value;
            }
        }

        if count == 0 {
            return None;
        }

        let n = Decimal::from(count);
        let numerator = n * sum_xy - sum_x * sum_y;
        let dispersion_x = n * sum_xx - sum_x * sum_x;
        let dispersion_y = n * sum_yy - sum_y * sum_y;
        if dispersion_x <= Decimal::ZERO || dispersion_y <= Decimal::ZERO {
            return None;
        }

        let denominator = dispersion_x.sqrt()? * dispersion_y.sqrt()?;
        if denominator.is_zero() {
            return None;
        }

        Some((numerator / denominator).round_dp(CORRELATION_PRECISION))
    }
}

impl Default for CorrelationService {
    fn default() -> Self {
        Self::new()
    }
}
