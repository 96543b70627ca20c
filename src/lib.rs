//! # Limit Order Book Matching Engine
//!
//! A single-instrument, in-memory limit order book with strict price-time
//! priority. The crate is the matching path of a trading venue: it accepts
//! order submissions, crosses them against the resting book, maintains the
//! two-sided book, and exposes top-of-book market data.
//!
//! ## Key Features
//!
//! - **Strict price-time priority**: orders at the same price fill in
//!   arrival order; the trade price is always the resting (maker) order's
//!   price.
//! - **Order types and time-in-force**: limit and market orders with GTC,
//!   IOC and FOK semantics, including an atomic FOK admission precheck.
//! - **Self-Trade Prevention**: five STP modes (allow, cancel newest,
//!   cancel oldest, cancel both, decrement-and-cancel) dispatched inside
//!   the matching loop.
//! - **O(1) cancel and modify**: resting orders live in a slab arena and
//!   are addressed by stable handles, so cancellation unlinks the exact
//!   queue node without scanning.
//! - **Errors as values**: every operation returns a result struct with an
//!   `accepted` flag and a stable reject reason; a reject never mutates the
//!   book.
//!
//! ## Concurrency model
//!
//! The engine is deliberately single-threaded and non-reentrant: mutating
//! operations take `&mut OrderBook`, and the order of calls defines
//! price-time priority. Multi-producer deployments wrap the book in a
//! dispatcher thread consuming a serial queue, or a mutex held across each
//! full call. Nothing inside the engine blocks, sleeps or performs I/O.
//!
//! ## Example
//!
//! ```
//! use matchbook::prelude::*;
//!
//! let mut book = OrderBook::new("ACME");
//!
//! // A resting sell at $100.50 for 50 units.
//! let sell = Order::limit(1, 10_050, 50, Side::Sell, "maker", STPMode::Allow);
//! assert!(book.add_order(sell).accepted);
//!
//! // A buy crosses for 30 units at the maker's price.
//! let buy = Order::limit(2, 10_050, 30, Side::Buy, "taker", STPMode::Allow);
//! let result = book.add_order(buy);
//! assert_eq!(result.trades.len(), 1);
//! assert_eq!(result.trades[0].price, 10_050);
//! assert_eq!(result.trades[0].quantity, 30);
//!
//! // The residual 20 units still rest on the ask side.
//! assert_eq!(book.best_ask(), Some(10_050));
//! assert_eq!(book.last_trade_qty(), 30);
//! ```

pub mod orderbook;

pub mod prelude;
mod utils;

pub use orderbook::{
    LevelInfo, ModifyResult, Order, OrderBook, OrderId, OrderResult, OrderType, Price, PriceData,
    Quantity, RejectReason, STPMode, STPResult, Side, TimeInForce, Timestamp, Trade, TradeId,
    PRICE_SCALE, price_to_string,
};
pub use utils::monotonic_time_ns;
