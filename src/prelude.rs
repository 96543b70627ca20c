//! Prelude module that re-exports the commonly used types.
//!
//! Instead of importing each type individually, you can use:
//!
//! ```rust
//! use matchbook::prelude::*;
//! ```

// Core book and operations
pub use crate::orderbook::OrderBook;

// Order construction
pub use crate::orderbook::order::{Order, OrderType, TimeInForce};

// Self-trade prevention
pub use crate::orderbook::stp::{STPMode, STPResult};

// Results and trades
pub use crate::orderbook::trade::{ModifyResult, OrderResult, Trade};

// Rejection reasons
pub use crate::orderbook::error::RejectReason;

// Market data shapes
pub use crate::orderbook::snapshot::{LevelInfo, PriceData};

// Primitives
pub use crate::orderbook::types::{
    OrderId, Price, Quantity, Side, Timestamp, TradeId, PRICE_SCALE, price_to_string,
};

// Utility functions
pub use crate::utils::monotonic_time_ns;
