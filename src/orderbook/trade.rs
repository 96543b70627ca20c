//! Trades and operation results.

use serde::{Deserialize, Serialize};

use super::error::RejectReason;
use super::stp::STPResult;
use super::types::{OrderId, Price, Quantity, Timestamp, TradeId};

/// A single execution between one buy and one sell order.
///
/// Immutable once emitted. The price is always the resting (maker) order's
/// price, never the incoming order's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Engine-assigned id, strictly increasing across the book's lifetime.
    pub trade_id: TradeId,
    /// Id of the buy-side order.
    pub buy_order_id: OrderId,
    /// Id of the sell-side order.
    pub sell_order_id: OrderId,
    /// Execution price (the maker's price), in minor units.
    pub price: Price,
    /// Executed quantity; always positive.
    pub quantity: Quantity,
    /// Monotonic timestamp of the execution.
    pub time: Timestamp,
}

/// Outcome of submitting an order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderResult {
    /// `false` when the validator or the market handler rejected the order.
    /// A reject leaves the book untouched.
    pub accepted: bool,

    /// Set iff `accepted` is `false`.
    pub reject_reason: Option<RejectReason>,

    /// Trades produced by this submission, in execution order.
    pub trades: Vec<Trade>,

    /// Quantity left unfilled after matching. For a reject this is the
    /// original quantity; for a resting GTC limit it is the resting size.
    pub remaining_quantity: Quantity,

    /// Self-trade prevention outcome for this submission.
    pub stp_result: STPResult,
}

impl OrderResult {
    pub(crate) fn rejected(reason: RejectReason, original_quantity: Quantity) -> Self {
        Self {
            accepted: false,
            reject_reason: Some(reason),
            trades: Vec::new(),
            remaining_quantity: original_quantity,
            stp_result: STPResult::default(),
        }
    }

    /// Total quantity filled by this submission.
    #[must_use]
    pub fn executed_quantity(&self) -> Quantity {
        self.trades.iter().map(|t| t.quantity).sum()
    }

    /// `true` when the order was accepted and nothing remains unfilled.
    #[must_use]
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.accepted && self.remaining_quantity == 0
    }
}

/// Outcome of a modify operation.
///
/// On a reject where the order was found, the `old_*` fields carry the
/// current resting values; when the order was not found they are zero.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModifyResult {
    /// `false` when the modify was rejected; the book is untouched.
    pub accepted: bool,
    /// Set iff `accepted` is `false`.
    pub reject_reason: Option<RejectReason>,
    /// Price before the modify.
    pub old_price: Price,
    /// Price after the modify (equals `old_price` on reject).
    pub new_price: Price,
    /// Quantity before the modify.
    pub old_quantity: Quantity,
    /// Quantity after the modify (equals `old_quantity` on reject).
    pub new_quantity: Quantity,
}

impl ModifyResult {
    pub(crate) fn not_found() -> Self {
        Self {
            accepted: false,
            reject_reason: Some(RejectReason::OrderNotFound),
            old_price: 0,
            new_price: 0,
            old_quantity: 0,
            new_quantity: 0,
        }
    }

    pub(crate) fn rejected(reason: RejectReason, old_price: Price, old_quantity: Quantity) -> Self {
        Self {
            accepted: false,
            reject_reason: Some(reason),
            old_price,
            new_price: old_price,
            old_quantity,
            new_quantity: old_quantity,
        }
    }

    pub(crate) fn accepted(
        old_price: Price,
        new_price: Price,
        old_quantity: Quantity,
        new_quantity: Quantity,
    ) -> Self {
        Self {
            accepted: true,
            reject_reason: None,
            old_price,
            new_price,
            old_quantity,
            new_quantity,
        }
    }
}
