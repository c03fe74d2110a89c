use std::sync::Arc;

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::db::{get_connection, DbPool};
use crate::market_data::{MarketDataError, Result};
use crate::schema::daily_prices::dsl::*;

use super::market_data_model::{DailyPrice, DailyPriceDB};
use super::market_data_traits::MarketDataRepositoryTrait;

/// Read-only repository over the daily pricing records of the analytics store
pub struct MarketDataRepository {
    pool: Arc<DbPool>,
}

impl MarketDataRepository {
    /// Creates a new MarketDataRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl MarketDataRepositoryTrait for MarketDataRepository {
    /// Loads the prices of one type for the given tickers within the
    /// inclusive date window, ordered by (ticker, date) ascending; the
    /// lag computation downstream relies on this ordering.
    fn get_prices(
        &self,
        tickers: &[String],
        start_date: NaiveDate,
        end_date: NaiveDate,
        requested_type: &str,
    ) -> Result<Vec<DailyPrice>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| MarketDataError::PoolError(e.to_string()))?;

        daily_prices
            .filter(ticker.eq_any(tickers))
            .filter(price_type.eq(requested_type))
            .filter(date.ge(start_date))
            .filter(date.le(end_date))
            .order((ticker.asc(), date.asc()))
            .load::<DailyPriceDB>(&mut conn)
            .map_err(MarketDataError::DatabaseError)
            .map(|results| results.into_iter().map(DailyPrice::from).collect())
    }

    /// Lists the distinct price types recorded for a ticker
    fn list_price_types(&self, symbol: &str) -> Result<Vec<String>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| MarketDataError::PoolError(e.to_string()))?;

        daily_prices
            .filter(ticker.eq(symbol))
            .select(price_type)
            .distinct()
            .order(price_type.asc())
            .load::<String>(&mut conn)
            .map_err(MarketDataError::DatabaseError)
    }
}
