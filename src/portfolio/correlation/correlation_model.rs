use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::securities::AssetClass;

/// Daily simple return of one security on one trading date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyReturn {
    pub ticker: String,
    pub major_asset_class: String,
    pub date: NaiveDate,
    pub return_1d: Decimal,
}

/// Cross-sectional average daily return of each canonical asset class on
/// one trading date; a class with no traded members that day stays
/// undefined, never zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetClassReturns {
    pub date: NaiveDate,
    pub equity: Option<Decimal>,
    pub commodities: Option<Decimal>,
    pub fixed_income: Option<Decimal>,
    pub alternatives: Option<Decimal>,
}

impl AssetClassReturns {
    pub fn for_class(&self, class: AssetClass) -> Option<Decimal> {
        match class {
            AssetClass::Equity => self.equity,
            AssetClass::Commodities => self.commodities,
            AssetClass::FixedIncome => self.fixed_income,
            AssetClass::Alternatives => self.alternatives,
        }
    }
}

/// Symmetric Pearson cross-table over the canonical asset classes: unit
/// diagonal, [i][j] == [j][i], undefined cells where the overlapping
/// observations cannot support a coefficient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationMatrix {
    /// Row and column order of `coefficients`
    pub classes: Vec<AssetClass>,
    pub coefficients: Vec<Vec<Option<Decimal>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: AssetClass, column: AssetClass) -> Option<Decimal> {
        let row_index = self.classes.iter().position(|c| *c == row)?;
        let column_index = self.classes.iter().position(|c| *c == column)?;
        self.coefficients[row_index][column_index]
    }
}
