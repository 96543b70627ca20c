//! Order descriptor and construction.

use serde::{Deserialize, Serialize};

use super::stp::STPMode;
use super::types::{OrderId, Price, Quantity, Side, Timestamp};
use crate::utils::monotonic_time_ns;

/// Execution style of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OrderType {
    /// Carries a price; rests on the book if not fully filled.
    Limit = 0,
    /// No price constraint; takes the best available prices and never rests.
    Market = 1,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "Limit"),
            OrderType::Market => write!(f, "Market"),
        }
    }
}

/// How long an order remains eligible for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum TimeInForce {
    /// Good-Till-Cancel: any residual rests on the book.
    #[default]
    Gtc = 0,
    /// Immediate-or-Cancel: any residual is discarded.
    Ioc = 1,
    /// Fill-or-Kill: rejected at admission unless fully fillable.
    Fok = 2,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeInForce::Gtc => write!(f, "GTC"),
            TimeInForce::Ioc => write!(f, "IOC"),
            TimeInForce::Fok => write!(f, "FOK"),
        }
    }
}

/// An order as submitted to the book.
///
/// Immutable at submission except for `quantity`, which the matching engine
/// decrements in place as fills occur, and `price`/`quantity`/`timestamp`,
/// which [`crate::OrderBook::modify_order`] may rewrite. A limit order always
/// carries a price; a market order never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Owner tag used for self-trade prevention. An empty tag is anonymous
    /// and bypasses STP checks regardless of the order's [`STPMode`].
    pub trader_id: String,

    /// Caller-assigned unique identifier.
    pub id: OrderId,

    /// Limit price in minor units. `None` iff `order_type` is `Market`.
    pub price: Option<Price>,

    /// Remaining quantity. Strictly positive for live orders.
    pub quantity: Quantity,

    /// Buy or Sell.
    pub side: Side,

    /// Limit or Market.
    pub order_type: OrderType,

    /// GTC, IOC or FOK.
    pub time_in_force: TimeInForce,

    /// Self-trade prevention mode applied when this order is the taker.
    pub stp_mode: STPMode,

    /// Monotonic submission timestamp. Refreshed when a modify re-queues
    /// the order.
    pub timestamp: Timestamp,
}

impl Order {
    /// Creates a GTC limit order.
    #[must_use]
    pub fn limit(
        id: OrderId,
        price: Price,
        quantity: Quantity,
        side: Side,
        trader_id: impl Into<String>,
        stp_mode: STPMode,
    ) -> Self {
        Self::limit_with_tif(id, price, quantity, side, trader_id, stp_mode, TimeInForce::Gtc)
    }

    /// Creates a limit order with an explicit time-in-force.
    #[must_use]
    pub fn limit_with_tif(
        id: OrderId,
        price: Price,
        quantity: Quantity,
        side: Side,
        trader_id: impl Into<String>,
        stp_mode: STPMode,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            trader_id: trader_id.into(),
            id,
            price: Some(price),
            quantity,
            side,
            order_type: OrderType::Limit,
            time_in_force,
            stp_mode,
            timestamp: monotonic_time_ns(),
        }
    }

    /// Creates an IOC market order.
    #[must_use]
    pub fn market(
        id: OrderId,
        quantity: Quantity,
        side: Side,
        trader_id: impl Into<String>,
        stp_mode: STPMode,
    ) -> Self {
        Self::market_with_tif(id, quantity, side, trader_id, stp_mode, TimeInForce::Ioc)
    }

    /// Creates a market order with an explicit time-in-force.
    ///
    /// Market orders must be IOC or FOK; a GTC market order is rejected by
    /// the validator at submission.
    #[must_use]
    pub fn market_with_tif(
        id: OrderId,
        quantity: Quantity,
        side: Side,
        trader_id: impl Into<String>,
        stp_mode: STPMode,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            trader_id: trader_id.into(),
            id,
            price: None,
            quantity,
            side,
            order_type: OrderType::Market,
            time_in_force,
            stp_mode,
            timestamp: monotonic_time_ns(),
        }
    }

    /// Returns `true` when the order carries no owner tag and therefore
    /// bypasses self-trade prevention.
    #[must_use]
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        self.trader_id.is_empty()
    }
}
