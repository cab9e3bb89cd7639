//! Pure formatting and derivation helpers.
//!
//! Nothing in here touches UI state; every function is total over its input.

mod funnel;
mod sparkline;
mod support;
mod trend;
mod volume;

pub use funnel::{dropped_volume, estimated_loss, format_currency, DEFAULT_AVERAGE_ORDER_VALUE};
pub use sparkline::{
    sparkline_path, sparkline_points, FLAT_SPARKLINE_PATH, SPARKLINE_BOTTOM, SPARKLINE_SPAN,
    SPARKLINE_WIDTH,
};
pub use support::{support_signal, SupportSignal, FLAT_SUPPORT_PATH};
pub use trend::{capitalize, classify_trend, TrendClass};
pub use volume::{
    format_rate_percent, format_thousands, format_volume, volume_share, EMPTY_PLACEHOLDER,
};
