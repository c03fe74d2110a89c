use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One holding priced on one trading date: the denormalized row the whole
/// analytics pipeline consumes.
///
/// Invariant: within one ticker's row set, rows are ordered by date and
/// `prior_value` carries the value of the immediately preceding row (a
/// row lag, not a calendar lag). The first row of each ticker has no prior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyHoldingValuation {
    pub customer_id: String,
    pub full_name: String,
    pub account_open_date: NaiveDate,
    pub major_asset_class: String,
    pub minor_asset_class: String,
    pub ticker: String,
    pub security_name: String,
    pub quantity: Decimal,
    pub date: NaiveDate,
    pub value: Decimal,
    pub prior_value: Option<Decimal>,
    pub position_value: Decimal,
}

impl DailyHoldingValuation {
    /// Daily simple return against the prior pricing row, when one exists
    pub fn daily_return(&self) -> Option<Decimal> {
        match self.prior_value {
            Some(prior) if !prior.is_zero() => Some((self.value - prior) / prior),
            _ => None,
        }
    }
}
