//! Rejection reasons returned by the order book.
//!
//! Rejections are values, not exceptions: every public operation returns a
//! result struct carrying an `accepted` flag and, when rejected, one of the
//! reasons below. A reject never mutates book state.

use serde::Serialize;
use std::fmt;

use super::types::Side;

/// Why an operation was rejected.
///
/// The `Display` strings are stable and form part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum RejectReason {
    /// The order id is already present in the book.
    DuplicateOrderId,

    /// Quantity was zero or negative.
    InvalidQuantity,

    /// A limit order was submitted without a price.
    MissingLimitPrice,

    /// A price was present but zero or negative.
    InvalidPrice,

    /// Market orders must be IOC or FOK.
    MarketCannotBeGtc,

    /// The FOK admission precheck found less liquidity than the order size.
    FokInsufficientLiquidity,

    /// A market order arrived while the opposite side was empty. `taker` is
    /// the side of the incoming order; the empty book side is the opposite.
    EmptyOppositeSide {
        /// Side of the incoming market order.
        taker: Side,
    },

    /// Cancel or modify referenced an id that is not resting on the book.
    OrderNotFound,

    /// The modify would cross the spread; crossing intent requires a
    /// cancel plus a new order.
    WouldCrossSpread,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::DuplicateOrderId => write!(f, "Duplicate order ID"),
            RejectReason::InvalidQuantity => write!(f, "Invalid quantity: must be positive"),
            RejectReason::MissingLimitPrice => write!(f, "Limit order requires price"),
            RejectReason::InvalidPrice => write!(f, "Price must be positive"),
            RejectReason::MarketCannotBeGtc => {
                write!(f, "Invalid: MARKET orders cannot be GTC")
            }
            RejectReason::FokInsufficientLiquidity => {
                write!(f, "FOK: insufficient liquidity for full fill")
            }
            RejectReason::EmptyOppositeSide { taker } => {
                let empty = match taker {
                    Side::Buy => "ask",
                    Side::Sell => "bid",
                };
                write!(f, "No liquidity: {empty} side empty")
            }
            RejectReason::OrderNotFound => write!(f, "Order not found"),
            RejectReason::WouldCrossSpread => write!(f, "modify would cross spread"),
        }
    }
}

impl std::error::Error for RejectReason {}
