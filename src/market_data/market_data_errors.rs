use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for market-data operations
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DieselError),
    #[error("Pool error: {0}")]
    PoolError(String),
    #[error("Price data not found: {0}")]
    NotFound(String),
}

/// Result type for market-data operations
pub type Result<T> = std::result::Result<T, MarketDataError>;
