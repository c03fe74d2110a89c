/// Price type identifiers recorded in the daily pricing table
pub const PRICE_TYPE_ADJUSTED: &str = "Adj_Close";
pub const PRICE_TYPE_CLOSE: &str = "Close";

/// Price type used for return analytics unless the caller overrides it
pub const DEFAULT_PRICE_TYPE: &str = PRICE_TYPE_ADJUSTED;
