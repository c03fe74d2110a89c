use std::sync::Arc;

use diesel::prelude::*;

use crate::accounts::{AccountError, Result};
use crate::db::{get_connection, DbPool};
use crate::schema::accounts::dsl::*;

use super::accounts_model::{Account, AccountDB};
use super::accounts_traits::AccountRepositoryTrait;

/// Read-only repository over the account records of the analytics store
pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl AccountRepositoryTrait for AccountRepository {
    /// Retrieves an account by its ID
    fn get_by_id(&self, id: &str) -> Result<Account> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        let account = accounts
            .find(id)
            .first::<AccountDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    AccountError::NotFound(format!("Account with id {} not found", id))
                }
                _ => AccountError::DatabaseError(e.to_string()),
            })?;

        Ok(account.into())
    }

    /// Lists the accounts belonging to the given customers
    fn list_by_customer_ids(&self, customer_ids: &[String]) -> Result<Vec<Account>> {
        let mut conn =
            get_connection(&self.pool).map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        accounts
            .filter(client_id.eq_any(customer_ids))
            .order(account_id.asc())
            .load::<AccountDB>(&mut conn)
            .map_err(|e| AccountError::DatabaseError(e.to_string()))
            .map(|results| results.into_iter().map(Account::from).collect())
    }
}
