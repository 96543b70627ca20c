//! Self-Trade Prevention (STP) types.
//!
//! STP governs what happens when an incoming order would match against a
//! resting order carrying the same trader tag. The mode travels on the
//! incoming (taker) order; resting orders do not veto. An empty trader tag
//! is anonymous and always bypasses STP.
//!
//! The five modes form a closed state machine dispatched inside the matching
//! engine's inner loop; side-effect ordering (cancel resting, zero incoming,
//! record ids, set the action string) is part of the contract.

use serde::{Deserialize, Serialize};

use super::types::OrderId;

/// Self-Trade Prevention mode carried by an incoming order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum STPMode {
    /// No self-trade prevention (default). Same-trader orders match freely.
    #[default]
    Allow = 0,

    /// Cancel the incoming (newest) order on conflict. The resting order is
    /// untouched and matching stops.
    CancelNewest = 1,

    /// Cancel the conflicting resting (oldest) order and keep matching the
    /// incoming order against the rest of the book.
    CancelOldest = 2,

    /// Cancel both the resting and the incoming order; matching stops.
    CancelBoth = 3,

    /// Skip same-trader resting orders and fill against everyone else; any
    /// residual follows the order's normal time-in-force handling.
    DecrementAndCancel = 4,
}

impl STPMode {
    /// Returns `true` if STP checks apply (any mode other than `Allow`).
    #[must_use]
    #[inline]
    pub fn is_enabled(self) -> bool {
        self != STPMode::Allow
    }

    /// Human-readable action string recorded in [`STPResult::action`] when
    /// this mode fires.
    pub(crate) fn action_label(self) -> &'static str {
        match self {
            STPMode::Allow => "",
            STPMode::CancelNewest => "Self-Trade Prevention: Cancel Newest",
            STPMode::CancelOldest => "Self-Trade Prevention: Cancel Oldest",
            STPMode::CancelBoth => "Self-Trade Prevention: Cancel Both",
            STPMode::DecrementAndCancel => "Self-Trade Prevention: Decrement And Cancel",
        }
    }
}

impl std::fmt::Display for STPMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            STPMode::Allow => write!(f, "Allow"),
            STPMode::CancelNewest => write!(f, "CancelNewest"),
            STPMode::CancelOldest => write!(f, "CancelOldest"),
            STPMode::CancelBoth => write!(f, "CancelBoth"),
            STPMode::DecrementAndCancel => write!(f, "DecrementAndCancel"),
        }
    }
}

/// STP outcome attached to an [`OrderResult`](crate::OrderResult).
///
/// STP outcomes are not errors: the order is still accepted, and any fills
/// produced before the conflict are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct STPResult {
    /// `true` when at least one same-trader conflict was encountered.
    pub self_trade: bool,

    /// Ids of orders cancelled by STP, in the order the cancellations
    /// happened. May include the incoming order's own id.
    pub cancelled_orders: Vec<OrderId>,

    /// Action string for the mode that fired; empty when no conflict.
    pub action: String,
}

impl STPResult {
    /// Marks a conflict under `mode`, setting the action string on first use.
    pub(crate) fn mark(&mut self, mode: STPMode) {
        self.self_trade = true;
        if self.action.is_empty() {
            self.action = mode.action_label().to_string();
        }
    }
}
