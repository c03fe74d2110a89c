use std::sync::Arc;

use diesel::prelude::*;

use crate::db::{get_connection, DbPool};
use crate::schema::securities::dsl::*;
use crate::securities::{Result, SecurityError};

use super::securities_model::{Security, SecurityDB};
use super::securities_traits::SecurityRepositoryTrait;

/// Read-only repository over the security master of the analytics store
pub struct SecurityRepository {
    pool: Arc<DbPool>,
}

impl SecurityRepository {
    /// Creates a new SecurityRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl SecurityRepositoryTrait for SecurityRepository {
    /// Retrieves a security-master entry by ticker
    fn get_by_ticker(&self, symbol: &str) -> Result<Security> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| SecurityError::DatabaseError(e.to_string()))?;

        let security = securities
            .find(symbol)
            .first::<SecurityDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    SecurityError::NotFound(format!("Security with ticker {} not found", symbol))
                }
                _ => SecurityError::DatabaseError(e.to_string()),
            })?;

        Ok(security.into())
    }

    /// Lists the security-master entries for the given tickers; tickers
    /// without a master entry are simply absent
    fn list_by_tickers(&self, tickers: &[String]) -> Result<Vec<Security>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| SecurityError::DatabaseError(e.to_string()))?;

        securities
            .filter(ticker.eq_any(tickers))
            .order(ticker.asc())
            .load::<SecurityDB>(&mut conn)
            .map_err(|e| SecurityError::DatabaseError(e.to_string()))
            .map(|results| results.into_iter().map(Security::from).collect())
    }
}
