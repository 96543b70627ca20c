//! Numeric and identifier primitives shared across the order book.

use serde::{Deserialize, Serialize};

/// Price in minor units (e.g. cents). Signed so that subtraction is always
/// safe; valid order prices are strictly positive.
pub type Price = i64;

/// Order quantity in units. Signed so that decrements cannot underflow;
/// valid live quantities are strictly positive.
pub type Quantity = i64;

/// Unique identifier for an order, assigned by the caller.
pub type OrderId = u64;

/// Unique identifier for a trade, assigned by the engine. Strictly
/// increasing across the lifetime of an [`crate::OrderBook`] instance.
pub type TradeId = u64;

/// Monotonic timestamp in nanoseconds, used only for ordering and audit.
/// See [`crate::utils::monotonic_time_ns`].
pub type Timestamp = u64;

/// Number of minor units per major unit. A scale of 100 gives two decimal
/// places: $100.50 is stored as `10050`.
pub const PRICE_SCALE: Price = 100;

/// The side of an order or book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    /// Buyer side; resting buy orders form the bids.
    Buy = 0,
    /// Seller side; resting sell orders form the asks.
    Sell = 1,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

/// Renders a minor-unit price as `[-]D.CC` with zero-padded cents.
///
/// The formatter is a display convenience only; wire and stored values use
/// the raw integer.
///
/// ```
/// use matchbook::orderbook::types::price_to_string;
/// assert_eq!(price_to_string(10050), "100.50");
/// assert_eq!(price_to_string(-5), "-0.05");
/// ```
#[must_use]
pub fn price_to_string(price: Price) -> String {
    let negative = price < 0;
    let abs = price.unsigned_abs();
    let scale = PRICE_SCALE.unsigned_abs();
    let major = abs / scale;
    let minor = abs % scale;
    format!("{}{major}.{minor:02}", if negative { "-" } else { "" })
}
