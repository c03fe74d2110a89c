use std::sync::Arc;

use diesel::prelude::*;

use crate::db::{get_connection, DbPool};
use crate::holdings::{HoldingError, Result};
use crate::schema::holdings::dsl::*;

use super::holdings_model::{Holding, HoldingDB};
use super::holdings_traits::HoldingRepositoryTrait;

/// Read-only repository over the holding records of the analytics store
pub struct HoldingRepository {
    pool: Arc<DbPool>,
}

impl HoldingRepository {
    /// Creates a new HoldingRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl HoldingRepositoryTrait for HoldingRepository {
    /// Lists the holdings of the given accounts
    fn list_by_account_ids(&self, account_ids: &[String]) -> Result<Vec<Holding>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| HoldingError::DatabaseError(e.to_string()))?;

        holdings
            .filter(account_id.eq_any(account_ids))
            .order((account_id.asc(), ticker.asc()))
            .load::<HoldingDB>(&mut conn)
            .map_err(|e| HoldingError::DatabaseError(e.to_string()))
            .map(|results| results.into_iter().map(Holding::from).collect())
    }
}
