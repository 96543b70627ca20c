//! Tests for the admission validator: reject reasons, rule ordering, and
//! the guarantee that rejects never mutate the book.

#[cfg(test)]
mod tests {
    use crate::orderbook::book::OrderBook;
    use crate::orderbook::error::RejectReason;
    use crate::orderbook::order::{Order, OrderType, TimeInForce};
    use crate::orderbook::stp::STPMode;
    use crate::orderbook::types::{Price, Quantity, Side};

    fn sell(id: u64, price: Price, quantity: Quantity) -> Order {
        Order::limit(id, price, quantity, Side::Sell, "s", STPMode::Allow)
    }

    fn buy(id: u64, price: Price, quantity: Quantity) -> Order {
        Order::limit(id, price, quantity, Side::Buy, "b", STPMode::Allow)
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut book = OrderBook::new("TEST");
        assert!(book.add_order(buy(1, 10_000, 10)).accepted);

        let result = book.add_order(buy(1, 9_900, 5));
        assert!(!result.accepted);
        assert_eq!(result.reject_reason, Some(RejectReason::DuplicateOrderId));
        assert_eq!(result.remaining_quantity, 5);
        assert!(result.trades.is_empty());

        // The original order is untouched.
        assert_eq!(book.get_order(1).map(|o| o.quantity), Some(10));
        assert_eq!(book.order_count(), 1);
        book.assert_consistent();
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let mut book = OrderBook::new("TEST");
        for quantity in [0, -5] {
            let result = book.add_order(buy(1, 10_000, quantity));
            assert!(!result.accepted);
            assert_eq!(result.reject_reason, Some(RejectReason::InvalidQuantity));
            assert_eq!(result.remaining_quantity, quantity);
        }
        assert!(book.is_empty());
    }

    #[test]
    fn test_limit_without_price_rejected() {
        let mut book = OrderBook::new("TEST");
        let mut order = buy(1, 10_000, 10);
        order.price = None;

        let result = book.add_order(order);
        assert!(!result.accepted);
        assert_eq!(result.reject_reason, Some(RejectReason::MissingLimitPrice));
        assert!(book.is_empty());
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let mut book = OrderBook::new("TEST");
        for price in [0, -100] {
            let result = book.add_order(buy(1, price, 10));
            assert!(!result.accepted);
            assert_eq!(result.reject_reason, Some(RejectReason::InvalidPrice));
        }
        assert!(book.is_empty());
    }

    #[test]
    fn test_market_gtc_rejected() {
        let mut book = OrderBook::new("TEST");
        book.add_order(sell(1, 10_000, 100));

        let order = Order::market_with_tif(2, 10, Side::Buy, "b", STPMode::Allow, TimeInForce::Gtc);
        let result = book.add_order(order);
        assert!(!result.accepted);
        assert_eq!(result.reject_reason, Some(RejectReason::MarketCannotBeGtc));
        assert_eq!(result.reject_reason.unwrap().to_string(), "Invalid: MARKET orders cannot be GTC");

        // No fills happened despite available liquidity.
        assert_eq!(book.get_order(1).map(|o| o.quantity), Some(100));
        book.assert_consistent();
    }

    #[test]
    fn test_fok_rejected_when_liquidity_short() {
        let mut book = OrderBook::new("TEST");
        book.add_order(sell(1, 10_000, 50));

        let order = Order::limit_with_tif(
            2,
            10_000,
            100,
            Side::Buy,
            "b",
            STPMode::Allow,
            TimeInForce::Fok,
        );
        let result = book.add_order(order);

        assert!(!result.accepted);
        assert_eq!(result.reject_reason, Some(RejectReason::FokInsufficientLiquidity));
        assert_eq!(
            result.reject_reason.unwrap().to_string(),
            "FOK: insufficient liquidity for full fill"
        );
        assert!(result.trades.is_empty());
        assert_eq!(result.remaining_quantity, 100);

        // Book unchanged.
        assert_eq!(book.get_order(1).map(|o| o.quantity), Some(50));
        assert_eq!(book.order_count(), 1);
        book.assert_consistent();
    }

    #[test]
    fn test_fok_ignores_liquidity_beyond_limit() {
        let mut book = OrderBook::new("TEST");
        book.add_order(sell(1, 10_000, 50));
        book.add_order(sell(2, 10_200, 500));

        // Plenty of quantity rests, but not at acceptable prices.
        let order = Order::limit_with_tif(
            3,
            10_100,
            100,
            Side::Buy,
            "b",
            STPMode::Allow,
            TimeInForce::Fok,
        );
        let result = book.add_order(order);
        assert!(!result.accepted);
        assert_eq!(result.reject_reason, Some(RejectReason::FokInsufficientLiquidity));
        book.assert_consistent();
    }

    #[test]
    fn test_fok_accepted_fills_fully_and_atomically() {
        let mut book = OrderBook::new("TEST");
        book.add_order(sell(1, 10_000, 60));
        book.add_order(sell(2, 10_050, 60));

        let order = Order::limit_with_tif(
            3,
            10_050,
            100,
            Side::Buy,
            "b",
            STPMode::Allow,
            TimeInForce::Fok,
        );
        let result = book.add_order(order);
        book.assert_consistent();

        assert!(result.accepted);
        assert_eq!(result.executed_quantity(), 100);
        assert_eq!(result.remaining_quantity, 0);
        assert!(result.is_complete());
        // Nothing rested: FOK never leaves a residual on the book.
        assert_eq!(book.best_bid(), None);
    }

    #[test]
    fn test_market_fok_precheck_is_unbounded_by_price() {
        let mut book = OrderBook::new("TEST");
        book.add_order(sell(1, 10_000, 30));
        book.add_order(sell(2, 99_000, 70));

        let order = Order::market_with_tif(3, 100, Side::Buy, "b", STPMode::Allow, TimeInForce::Fok);
        let result = book.add_order(order);

        assert!(result.accepted);
        assert_eq!(result.executed_quantity(), 100);
        assert!(book.is_empty());
    }

    #[test]
    fn test_market_on_empty_side_rejected() {
        let mut book = OrderBook::new("TEST");

        let result = book.add_order(Order::market(1, 40, Side::Buy, "b", STPMode::Allow));
        assert!(!result.accepted);
        assert_eq!(
            result.reject_reason,
            Some(RejectReason::EmptyOppositeSide { taker: Side::Buy })
        );
        assert_eq!(result.reject_reason.unwrap().to_string(), "No liquidity: ask side empty");
        assert_eq!(result.remaining_quantity, 40);

        let result = book.add_order(Order::market(2, 40, Side::Sell, "s", STPMode::Allow));
        assert_eq!(result.reject_reason.unwrap().to_string(), "No liquidity: bid side empty");
    }

    #[test]
    fn test_duplicate_check_precedes_quantity_check() {
        let mut book = OrderBook::new("TEST");
        book.add_order(buy(1, 10_000, 10));

        // Both rules are violated; the duplicate check fires first.
        let result = book.add_order(buy(1, 10_000, 0));
        assert_eq!(result.reject_reason, Some(RejectReason::DuplicateOrderId));
    }

    #[test]
    fn test_market_order_type_is_market() {
        let order = Order::market(1, 10, Side::Sell, "s", STPMode::Allow);
        assert_eq!(order.order_type, OrderType::Market);
    }
}
