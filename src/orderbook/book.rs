//! Core order book state and market-data queries.

use std::collections::HashMap;

use super::level::{Arena, NodeHandle};
use super::order::Order;
use super::side::BookSide;
use super::snapshot::{LevelInfo, PriceData};
use super::types::{OrderId, Price, Quantity, Side, TradeId};
use crate::utils::monotonic_time_ns;

/// Locator for a resting order: enough to reach its queue node in O(1).
#[derive(Debug, Clone, Copy)]
pub(crate) struct OrderLocation {
    pub(crate) side: Side,
    pub(crate) price: Price,
    pub(crate) handle: NodeHandle,
}

/// A single-instrument limit order book with strict price-time priority.
///
/// The engine is single-threaded and non-reentrant: all mutating operations
/// take `&mut self` and the order of calls defines priority. Multi-producer
/// deployments serialise calls through a dispatcher thread or a mutex held
/// across each full operation; queries are only meaningful between
/// operations.
///
/// All state is owned by the instance and dropped with it. Resting orders
/// live in a slab arena addressed by the side books (primary) and the order
/// index (secondary, non-owning handles), so cancel and modify resolve to
/// the exact queue node in O(1).
pub struct OrderBook {
    /// Instrument tag for this book; a label only.
    pub(super) symbol: String,

    /// Arena holding every resting order's queue node.
    pub(super) arena: Arena,

    /// Bid side, iterated highest price first.
    pub(super) bids: BookSide,

    /// Ask side, iterated lowest price first.
    pub(super) asks: BookSide,

    /// Resting order id -> exact queue position.
    pub(super) order_index: HashMap<OrderId, OrderLocation>,

    /// Price of the most recent trade; 0 before the first trade.
    pub(super) last_trade_price: Price,

    /// Quantity of the most recent trade; 0 before the first trade.
    pub(super) last_trade_qty: Quantity,

    /// Next trade id to assign; starts at 1 and only increases.
    pub(super) next_trade_id: TradeId,
}

impl OrderBook {
    /// Creates an empty book for `symbol`.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            arena: Arena::new(),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            order_index: HashMap::new(),
            last_trade_price: 0,
            last_trade_qty: 0,
            next_trade_id: 1,
        }
    }

    /// The instrument tag this book was created with.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Highest resting bid price, if any.
    #[must_use]
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Lowest resting ask price, if any.
    #[must_use]
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// `best_ask - best_bid` over zero-filled sides.
    ///
    /// Only meaningful when both sides are present; with one side empty the
    /// result degenerates to `ask - 0` or `0 - bid`, so callers should gate
    /// on [`Self::best_bid`]/[`Self::best_ask`] first.
    #[must_use]
    pub fn spread(&self) -> Price {
        self.best_ask().unwrap_or(0) - self.best_bid().unwrap_or(0)
    }

    /// Midpoint of the touch by integer division (rounds toward zero), or 0
    /// when either side is empty.
    #[must_use]
    pub fn mid_price(&self) -> Price {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => (bid + ask) / 2,
            _ => 0,
        }
    }

    /// Price of the most recent trade; 0 before the first trade.
    #[must_use]
    pub fn last_trade_price(&self) -> Price {
        self.last_trade_price
    }

    /// Quantity of the most recent trade; 0 before the first trade.
    #[must_use]
    pub fn last_trade_qty(&self) -> Quantity {
        self.last_trade_qty
    }

    /// Number of trades executed over the book's lifetime.
    #[must_use]
    pub fn trade_count(&self) -> u64 {
        self.next_trade_id - 1
    }

    /// Number of orders currently resting on the book.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.order_index.len()
    }

    /// `true` when no orders rest on either side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order_index.is_empty()
    }

    /// Looks up a resting order by id.
    #[must_use]
    pub fn get_order(&self, id: OrderId) -> Option<&Order> {
        let loc = self.order_index.get(&id)?;
        Some(&self.arena[loc.handle].order)
    }

    /// The resting orders queued at one price, front (oldest) first.
    /// Returns an empty vector when no level exists at `price`.
    #[must_use]
    pub fn queue_at_price(&self, side: Side, price: Price) -> Vec<&Order> {
        let book_side = match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        };
        book_side
            .level(price)
            .map(|level| level.iter(&self.arena).collect())
            .unwrap_or_default()
    }

    /// Total resting quantity on one side of the book.
    #[must_use]
    pub fn side_quantity(&self, side: Side) -> Quantity {
        match side {
            Side::Buy => self.bids.total_quantity(),
            Side::Sell => self.asks.total_quantity(),
        }
    }

    /// Number of non-empty price levels on one side of the book.
    #[must_use]
    pub fn level_count(&self, side: Side) -> usize {
        match side {
            Side::Buy => self.bids.level_count(),
            Side::Sell => self.asks.level_count(),
        }
    }

    /// Aggregated ladder for one side, from the aggressive end outward,
    /// up to `max_levels` levels.
    #[must_use]
    pub fn depth(&self, side: Side, max_levels: usize) -> Vec<LevelInfo> {
        let book_side = match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        };
        book_side
            .iter_from_best()
            .take(max_levels)
            .map(|(&price, level)| LevelInfo {
                price,
                total_quantity: level.total_quantity(),
                order_count: level.len(),
            })
            .collect()
    }

    /// Top-of-book snapshot with the zero-fill conventions of [`PriceData`].
    #[must_use]
    pub fn snapshot(&self) -> PriceData {
        PriceData {
            time: monotonic_time_ns(),
            bid_price: self.best_bid().unwrap_or(0),
            ask_price: self.best_ask().unwrap_or(0),
            mid_price: self.mid_price(),
            spread: self.spread(),
            last_trade_price: self.last_trade_price,
            last_trade_qty: self.last_trade_qty,
        }
    }
}

#[cfg(test)]
impl OrderBook {
    /// Exhaustive structural check used by scenario tests after every
    /// mutating call: level totals, index/handle agreement, uncrossed book.
    pub(crate) fn assert_consistent(&self) {
        let mut seen = 0usize;
        for (book_side, side) in [(&self.bids, Side::Buy), (&self.asks, Side::Sell)] {
            for (&price, level) in book_side.iter_from_best() {
                assert!(!level.is_empty(), "empty level persisted at {price}");
                let mut total: Quantity = 0;
                let mut count = 0usize;
                for order in level.iter(&self.arena) {
                    assert!(order.quantity > 0, "non-positive resting quantity");
                    assert_eq!(order.price, Some(price), "order price disagrees with level key");
                    assert_eq!(order.side, side, "order side disagrees with book side");
                    let loc = self
                        .order_index
                        .get(&order.id)
                        .unwrap_or_else(|| panic!("resting order {} missing from index", order.id));
                    assert_eq!(loc.side, side);
                    assert_eq!(loc.price, price);
                    assert_eq!(self.arena[loc.handle].order.id, order.id);
                    total += order.quantity;
                    count += 1;
                }
                assert_eq!(level.total_quantity(), total, "cached level total drifted");
                assert_eq!(level.len(), count);
                seen += count;
            }
        }
        assert_eq!(seen, self.order_index.len(), "index size disagrees with book");
        assert_eq!(self.arena.len(), self.order_index.len());
        if let (Some(bid), Some(ask)) = (self.best_bid(), self.best_ask()) {
            assert!(bid < ask, "book is crossed: bid {bid} >= ask {ask}");
        }
    }
}
