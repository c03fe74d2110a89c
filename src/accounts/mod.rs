// Module declarations
pub(crate) mod accounts_errors;
pub(crate) mod accounts_model;
pub(crate) mod accounts_repository;
pub(crate) mod accounts_traits;

// Re-export the public interface
pub use accounts_model::{Account, AccountDB};
pub use accounts_repository::AccountRepository;
pub use accounts_traits::AccountRepositoryTrait;

// Re-export error types for convenience
pub use accounts_errors::{AccountError, Result};
