/// Items per page in the gallery-style collections (owned, selling, market).
pub const GALLERY_PAGE_SIZE: usize = 3;

/// Items per page in the purchase-history table.
pub const HISTORY_PAGE_SIZE: u64 = 5;

/// Decimal precision for display amounts.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Smallest-unit decimals of the native currency (1 whole unit = 10^18).
pub const NATIVE_DECIMALS: u32 = 18;

/// Largest supported smallest-unit exponent for conversions.
pub const MAX_UNIT_DECIMALS: u32 = 28;
