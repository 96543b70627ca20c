//! Public order operations: add, cancel, modify, mass cancel.

use tracing::trace;

use super::book::{OrderBook, OrderLocation};
use super::error::RejectReason;
use super::order::{Order, OrderType, TimeInForce};
use super::stp::STPResult;
use super::trade::{ModifyResult, OrderResult};
use super::types::{OrderId, Price, Quantity, Side};
use crate::utils::monotonic_time_ns;

impl OrderBook {
    /// Submits an order to the book.
    ///
    /// The order is validated, matched against the opposite side, and, for a
    /// GTC limit order with residual quantity, rested on its own side at the
    /// back of its price level. Market orders never rest; IOC and FOK
    /// residuals are discarded.
    ///
    /// A reject leaves the book in its pre-call state; an accept leaves it
    /// fully consistent with all trades applied.
    pub fn add_order(&mut self, order: Order) -> OrderResult {
        trace!(
            "add order {} {} {} {:?} qty {} on {}",
            order.id, order.side, order.order_type, order.price, order.quantity, self.symbol
        );
        if let Err(reason) = self.validate_order(&order) {
            trace!("order {} rejected: {reason}", order.id);
            return OrderResult::rejected(reason, order.quantity);
        }
        match order.order_type {
            OrderType::Market => self.handle_market_order(order),
            OrderType::Limit => self.handle_limit_order(order),
        }
    }

    /// Cancels a resting order by id. Returns `false` when the id is not on
    /// the book (unknown, already filled, or already cancelled).
    pub fn cancel_order(&mut self, id: OrderId) -> bool {
        let Some(loc) = self.order_index.remove(&id) else {
            return false;
        };
        let book_side = match loc.side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        book_side.remove_order(&mut self.arena, loc.price, loc.handle);
        trace!("cancelled order {id} on {}", self.symbol);
        true
    }

    /// Modifies a resting order's price and/or quantity.
    ///
    /// A same-price quantity decrease is applied in place and keeps the
    /// order's queue position. Every other accepted modify re-queues the
    /// order at the back of the destination level with a fresh timestamp,
    /// losing time priority. Modify never matches: a new price that would
    /// cross the spread is rejected; crossing intent requires a cancel plus
    /// a new order.
    pub fn modify_order(
        &mut self,
        id: OrderId,
        new_price: Price,
        new_quantity: Quantity,
    ) -> ModifyResult {
        let Some(&loc) = self.order_index.get(&id) else {
            return ModifyResult::not_found();
        };
        let old_price = loc.price;
        let old_quantity = self.arena[loc.handle].order.quantity;

        if new_quantity <= 0 {
            return ModifyResult::rejected(RejectReason::InvalidQuantity, old_price, old_quantity);
        }
        if new_price <= 0 {
            return ModifyResult::rejected(RejectReason::InvalidPrice, old_price, old_quantity);
        }
        let crosses = match loc.side {
            Side::Buy => self.best_ask().is_some_and(|ask| new_price >= ask),
            Side::Sell => self.best_bid().is_some_and(|bid| new_price <= bid),
        };
        if crosses {
            return ModifyResult::rejected(RejectReason::WouldCrossSpread, old_price, old_quantity);
        }

        if new_price == old_price && new_quantity <= old_quantity {
            // In-place decrease: queue position and timestamp are preserved.
            let book_side = match loc.side {
                Side::Buy => &mut self.bids,
                Side::Sell => &mut self.asks,
            };
            self.arena[loc.handle].order.quantity = new_quantity;
            let level = book_side
                .level_mut(old_price)
                .expect("order location refers to a live price level");
            level.reduce_total(old_quantity - new_quantity);
            trace!("modified order {id} in place: qty {old_quantity} -> {new_quantity}");
            return ModifyResult::accepted(old_price, new_price, old_quantity, new_quantity);
        }

        // Price change or quantity increase: cancel and re-queue at the back
        // of the destination level with a fresh timestamp.
        self.order_index.remove(&id);
        let book_side = match loc.side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let mut order = book_side.remove_order(&mut self.arena, old_price, loc.handle);
        order.price = Some(new_price);
        order.quantity = new_quantity;
        order.timestamp = monotonic_time_ns();
        self.rest_order(order);
        trace!(
            "modified order {id}: price {old_price} -> {new_price}, qty {old_quantity} -> {new_quantity}"
        );
        ModifyResult::accepted(old_price, new_price, old_quantity, new_quantity)
    }

    /// Cancels every resting order, returning how many were removed. The
    /// last-trade statistics and the trade-id sequence are unaffected.
    pub fn cancel_all_orders(&mut self) -> usize {
        let cancelled = self.order_index.len();
        self.order_index.clear();
        self.bids.clear();
        self.asks.clear();
        self.arena.clear();
        trace!("cancelled all {cancelled} orders on {}", self.symbol);
        cancelled
    }

    /// Cancels every resting order carrying `trader_id`, returning the
    /// cancelled ids in no particular order.
    pub fn cancel_orders_by_trader(&mut self, trader_id: &str) -> Vec<OrderId> {
        let ids: Vec<OrderId> = self
            .arena
            .iter()
            .filter(|(_, node)| node.order.trader_id == trader_id)
            .map(|(_, node)| node.order.id)
            .collect();
        for &id in &ids {
            self.cancel_order(id);
        }
        ids
    }

    fn handle_limit_order(&mut self, mut order: Order) -> OrderResult {
        let mut trades = Vec::new();
        let mut stp = STPResult::default();
        self.match_incoming(&mut order, &mut trades, &mut stp);

        // The matcher decremented `order.quantity` in place.
        let remaining = order.quantity;
        if remaining > 0 && order.time_in_force == TimeInForce::Gtc {
            self.rest_order(order);
        }

        OrderResult {
            accepted: true,
            reject_reason: None,
            trades,
            remaining_quantity: remaining,
            stp_result: stp,
        }
    }

    fn handle_market_order(&mut self, mut order: Order) -> OrderResult {
        let opposite_empty = match order.side {
            Side::Buy => self.asks.is_empty(),
            Side::Sell => self.bids.is_empty(),
        };
        if opposite_empty {
            return OrderResult::rejected(
                RejectReason::EmptyOppositeSide { taker: order.side },
                order.quantity,
            );
        }

        let mut trades = Vec::new();
        let mut stp = STPResult::default();
        self.match_incoming(&mut order, &mut trades, &mut stp);

        // Market orders never rest; any residual is discarded.
        OrderResult {
            accepted: true,
            reject_reason: None,
            trades,
            remaining_quantity: order.quantity,
            stp_result: stp,
        }
    }

    /// Enqueues a residual limit order on its own side and records its
    /// location in the index.
    fn rest_order(&mut self, order: Order) {
        let price = order
            .price
            .expect("only limit orders rest, and limit orders carry a price");
        let (id, side) = (order.id, order.side);
        let book_side = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let handle = book_side.enqueue(&mut self.arena, price, order);
        self.order_index
            .insert(id, OrderLocation { side, price, handle });
    }
}
