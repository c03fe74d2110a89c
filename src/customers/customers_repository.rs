use std::sync::Arc;

use diesel::prelude::*;

use crate::customers::{CustomerError, Result};
use crate::db::{get_connection, DbPool};
use crate::schema::customers::dsl::*;

use super::customers_model::{Customer, CustomerDB};
use super::customers_traits::CustomerRepositoryTrait;

/// Read-only repository over the customer records of the analytics store
pub struct CustomerRepository {
    pool: Arc<DbPool>,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl CustomerRepositoryTrait for CustomerRepository {
    /// Retrieves a customer by its ID
    fn get_by_id(&self, id: &str) -> Result<Customer> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        let customer = customers
            .find(id)
            .first::<CustomerDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    CustomerError::NotFound(format!("Customer with id {} not found", id))
                }
                _ => CustomerError::DatabaseError(e.to_string()),
            })?;

        Ok(customer.into())
    }

    /// Lists the customers matching the given IDs; missing IDs are simply absent
    fn list_by_ids(&self, ids: &[String]) -> Result<Vec<Customer>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        customers
            .filter(customer_id.eq_any(ids))
            .order(customer_id.asc())
            .load::<CustomerDB>(&mut conn)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))
            .map(|results| results.into_iter().map(Customer::from).collect())
    }

    /// Lists every customer known to the store
    fn list_all(&self) -> Result<Vec<Customer>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        customers
            .order(customer_id.asc())
            .load::<CustomerDB>(&mut conn)
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))
            .map(|results| results.into_iter().map(Customer::from).collect())
    }
}
