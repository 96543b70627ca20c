//! The matching engine: crosses an incoming order against the opposite side.
//!
//! The outer loop walks opposite-side levels from the aggressive end while
//! the incoming order has quantity left and the peeked level is price
//! acceptable. The inner loop walks one level's FIFO queue from the front,
//! dispatching the self-trade prevention state machine before every fill.
//! Trades always execute at the resting (maker) order's price; that rule is
//! enforced here and nowhere else.

use tracing::trace;

use super::book::OrderBook;
use super::order::{Order, OrderType};
use super::stp::{STPMode, STPResult};
use super::trade::Trade;
use super::types::{Price, Side};
use crate::utils::monotonic_time_ns;

/// Whether a taker on `taker_side` may cross a level at `level_price` given
/// its `limit` (`None` for market orders, which accept any price).
#[inline]
pub(crate) fn price_acceptable(taker_side: Side, level_price: Price, limit: Option<Price>) -> bool {
    match (taker_side, limit) {
        (_, None) => true,
        (Side::Buy, Some(limit)) => level_price <= limit,
        (Side::Sell, Some(limit)) => level_price >= limit,
    }
}

impl OrderBook {
    /// Matches `order` against the opposite side, mutating its `quantity` in
    /// place as fills are produced. Trades are appended in execution order;
    /// STP side effects are recorded on `stp`.
    pub(crate) fn match_incoming(
        &mut self,
        order: &mut Order,
        trades: &mut Vec<Trade>,
        stp: &mut STPResult,
    ) {
        let limit = match order.order_type {
            OrderType::Market => None,
            OrderType::Limit => order.price,
        };

        // Tracks the last processed level so a level left holding only
        // skipped same-trader orders (DecrementAndCancel) is walked past
        // instead of peeked again.
        let mut last_price: Option<Price> = None;

        while order.quantity > 0 {
            let best = {
                let opposite = match order.side {
                    Side::Buy => &self.asks,
                    Side::Sell => &self.bids,
                };
                match opposite.best_price_beyond(last_price) {
                    Some(price) => price,
                    None => break,
                }
            };
            if !price_acceptable(order.side, best, limit) {
                break;
            }

            let stop = self.fill_at_level(order, best, trades, stp);

            let opposite = match order.side {
                Side::Buy => &mut self.asks,
                Side::Sell => &mut self.bids,
            };
            opposite.remove_level_if_empty(best);
            last_price = Some(best);

            if stop {
                break;
            }
        }
    }

    /// Fills `order` against the level at `level_price`, front to back.
    ///
    /// Returns `true` when matching must stop entirely (an STP terminal
    /// action cancelled the incoming order). The caller erases the level if
    /// it was left empty.
    fn fill_at_level(
        &mut self,
        order: &mut Order,
        level_price: Price,
        trades: &mut Vec<Trade>,
        stp: &mut STPResult,
    ) -> bool {
        let book_side = match order.side {
            Side::Buy => &mut self.asks,
            Side::Sell => &mut self.bids,
        };
        let arena = &mut self.arena;
        let index = &mut self.order_index;
        let Some(level) = book_side.level_mut(level_price) else {
            return false;
        };

        let mut cursor = level.front();
        while order.quantity > 0 {
            let Some(handle) = cursor else {
                break;
            };

            let self_trade = {
                let resting = &arena[handle].order;
                order.stp_mode.is_enabled()
                    && !order.is_anonymous()
                    && resting.trader_id == order.trader_id
            };

            if self_trade {
                stp.mark(order.stp_mode);
                match order.stp_mode {
                    STPMode::DecrementAndCancel => {
                        cursor = arena[handle].next;
                        continue;
                    }
                    STPMode::CancelNewest => {
                        trace!("STP cancel newest: incoming order {}", order.id);
                        stp.cancelled_orders.push(order.id);
                        order.quantity = 0;
                        return true;
                    }
                    STPMode::CancelOldest => {
                        let next = arena[handle].next;
                        let removed = level.unlink(arena, handle);
                        index.remove(&removed.id);
                        trace!("STP cancel oldest: resting order {}", removed.id);
                        stp.cancelled_orders.push(removed.id);
                        cursor = next;
                        continue;
                    }
                    STPMode::CancelBoth => {
                        let removed = level.unlink(arena, handle);
                        index.remove(&removed.id);
                        trace!(
                            "STP cancel both: resting order {} and incoming order {}",
                            removed.id, order.id
                        );
                        stp.cancelled_orders.push(removed.id);
                        stp.cancelled_orders.push(order.id);
                        order.quantity = 0;
                        return true;
                    }
                    STPMode::Allow => unreachable!("STP conflicts only arise for enabled modes"),
                }
            }

            // Normal fill at the maker's price.
            let fill_qty = order.quantity.min(arena[handle].order.quantity);
            let resting_id = arena[handle].order.id;
            let (buy_order_id, sell_order_id) = match order.side {
                Side::Buy => (order.id, resting_id),
                Side::Sell => (resting_id, order.id),
            };
            trades.push(Trade {
                trade_id: self.next_trade_id,
                buy_order_id,
                sell_order_id,
                price: level_price,
                quantity: fill_qty,
                time: monotonic_time_ns(),
            });
            self.next_trade_id += 1;

            order.quantity -= fill_qty;
            arena[handle].order.quantity -= fill_qty;
            level.reduce_total(fill_qty);
            self.last_trade_price = level_price;
            self.last_trade_qty = fill_qty;

            if arena[handle].order.quantity == 0 {
                let next = arena[handle].next;
                level.unlink(arena, handle);
                index.remove(&resting_id);
                cursor = next;
            }
            // A partially filled resting order stays in place and keeps its
            // time priority; the incoming order is exhausted at this point.
        }

        false
    }
}
