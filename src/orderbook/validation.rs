//! Admission checks run before any state mutation.

use super::book::OrderBook;
use super::error::RejectReason;
use super::matching::price_acceptable;
use super::order::{Order, OrderType, TimeInForce};
use super::types::{Price, Quantity, Side};

impl OrderBook {
    /// Validates an incoming order against the current book state.
    ///
    /// Rules are applied in a fixed sequence and the first failure wins:
    /// duplicate id, non-positive quantity, limit without price, non-positive
    /// price, market with GTC, and finally the FOK liquidity precheck. A
    /// failed check leaves the book untouched.
    pub(crate) fn validate_order(&self, order: &Order) -> Result<(), RejectReason> {
        if self.order_index.contains_key(&order.id) {
            return Err(RejectReason::DuplicateOrderId);
        }
        if order.quantity <= 0 {
            return Err(RejectReason::InvalidQuantity);
        }
        if order.order_type == OrderType::Limit && order.price.is_none() {
            return Err(RejectReason::MissingLimitPrice);
        }
        if let Some(price) = order.price {
            if price <= 0 {
                return Err(RejectReason::InvalidPrice);
            }
        }
        if order.order_type == OrderType::Market && order.time_in_force == TimeInForce::Gtc {
            return Err(RejectReason::MarketCannotBeGtc);
        }
        if order.time_in_force == TimeInForce::Fok {
            let limit = match order.order_type {
                OrderType::Market => None,
                OrderType::Limit => order.price,
            };
            if self.available_liquidity(order.side, limit, order.quantity) < order.quantity {
                return Err(RejectReason::FokInsufficientLiquidity);
            }
        }
        Ok(())
    }

    /// Sums opposite-side liquidity at prices the matcher would accept for a
    /// taker on `taker_side` with `limit`, stopping early once `target` is
    /// reached. Uses the same price-acceptability rule as the matcher.
    pub(crate) fn available_liquidity(
        &self,
        taker_side: Side,
        limit: Option<Price>,
        target: Quantity,
    ) -> Quantity {
        let opposite = match taker_side {
            Side::Buy => &self.asks,
            Side::Sell => &self.bids,
        };
        let mut available: Quantity = 0;
        for (&price, level) in opposite.iter_from_best() {
            if !price_acceptable(taker_side, price, limit) {
                break;
            }
            available = available.saturating_add(level.total_quantity());
            if available >= target {
                break;
            }
        }
        available
    }
}
