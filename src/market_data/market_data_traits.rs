use chrono::NaiveDate;

use super::market_data_model::DailyPrice;
use crate::market_data::Result;

/// Trait defining the contract for market-data repository operations.
pub trait MarketDataRepositoryTrait: Send + Sync {
    fn get_prices(
        &self,
        tickers: &[String],
        start_date: NaiveDate,
        end_date: NaiveDate,
        requested_type: &str,
    ) -> Result<Vec<DailyPrice>>;

    fn list_price_types(&self, symbol: &str) -> Result<Vec<String>>;
}
