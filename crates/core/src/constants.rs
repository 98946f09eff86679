use rust_decimal::Decimal;

/// Decimal precision for values returned by the analytics views
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Upper bound for any percentage stored in the catalog
pub const MAX_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;
