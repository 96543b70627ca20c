//! Market-data shapes derived from the book.

use serde::{Deserialize, Serialize};

use super::types::{Price, Quantity, Timestamp};

/// Top-of-book snapshot.
///
/// Missing sides report `0` in the price fields; `spread` and `mid_price`
/// are only meaningful when both sides are present, so callers should gate
/// on `bid_price`/`ask_price` before interpreting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceData {
    /// Monotonic timestamp at which the snapshot was taken.
    pub time: Timestamp,
    /// Best bid, or 0 when the bid side is empty.
    pub bid_price: Price,
    /// Best ask, or 0 when the ask side is empty.
    pub ask_price: Price,
    /// `(bid + ask) / 2` by integer division, or 0 when either side is empty.
    pub mid_price: Price,
    /// `ask - bid` over the zero-filled prices above.
    pub spread: Price,
    /// Price of the most recent trade, or 0 before the first trade.
    pub last_trade_price: Price,
    /// Quantity of the most recent trade, or 0 before the first trade.
    pub last_trade_qty: Quantity,
}

/// One aggregated price level, as returned by [`crate::OrderBook::depth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    /// The level's price in minor units.
    pub price: Price,
    /// Total resting quantity at this price.
    pub total_quantity: Quantity,
    /// Number of resting orders queued at this price.
    pub order_count: usize,
}
