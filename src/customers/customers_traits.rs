use super::customers_model::Customer;
use crate::customers::Result;

/// Trait defining the contract for customer repository operations.
pub trait CustomerRepositoryTrait: Send + Sync {
    fn get_by_id(&self, id: &str) -> Result<Customer>;
    fn list_by_ids(&self, ids: &[String]) -> Result<Vec<Customer>>;
    fn list_all(&self) -> Result<Vec<Customer>>;
}
