use super::securities_model::Security;
use crate::securities::Result;

/// Trait defining the contract for security-master repository operations.
pub trait SecurityRepositoryTrait: Send + Sync {
    fn get_by_ticker(&self, symbol: &str) -> Result<Security>;
    fn list_by_tickers(&self, tickers: &[String]) -> Result<Vec<Security>>;
}
