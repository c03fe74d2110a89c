use super::accounts_model::Account;
use crate::accounts::Result;

/// Trait defining the contract for account repository operations.
pub trait AccountRepositoryTrait: Send + Sync {
    fn get_by_id(&self, id: &str) -> Result<Account>;
    fn list_by_customer_ids(&self, customer_ids: &[String]) -> Result<Vec<Account>>;
}
