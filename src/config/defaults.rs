//! Default values for fraud-pulse configuration.

pub use crate::derived::DEFAULT_AVERAGE_ORDER_VALUE;

/// Default event loop tick.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Default cosmetic delay before a root-cause summary appears.
pub const DEFAULT_RCA_DELAY_MS: u64 = 900;

/// Upper bound accepted for the reveal delay.
pub const MAX_RCA_DELAY_MS: u64 = 10_000;

/// Accepted tick range.
pub const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 10..=1_000;
