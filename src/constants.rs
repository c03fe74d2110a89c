/// Decimal precision for derived analytics
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for correlation coefficients
pub const CORRELATION_PRECISION: u32 = 3;

/// Trading-day counts backing the trailing-return horizons. Empirically
/// derived from the pricing history, not calendar-exact; downstream
/// consumers depend on these exact values.
pub const TRADING_DAYS_12M: u32 = 250;
pub const TRADING_DAYS_18M: u32 = 375;
pub const TRADING_DAYS_24M: u32 = 500;
