use super::holdings_model::Holding;
use crate::holdings::Result;

/// Trait defining the contract for holding repository operations.
pub trait HoldingRepositoryTrait: Send + Sync {
    fn list_by_account_ids(&self, account_ids: &[String]) -> Result<Vec<Holding>>;
}
