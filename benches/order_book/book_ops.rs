use criterion::{BenchmarkId, Criterion};
use matchbook::prelude::*;
use std::hint::black_box;

/// Builds a book with `count` resting GTC limit orders spread over 500
/// price levels per side, bids below 10_000 and asks at or above it.
fn populate(count: u64) -> OrderBook {
    let mut book = OrderBook::new("BENCH");
    for i in 0..count {
        let (side, price) = if i % 2 == 0 {
            (Side::Buy, 9_999 - (i % 500) as Price)
        } else {
            (Side::Sell, 10_000 + (i % 500) as Price)
        };
        let order = Order::limit(i + 1, price, 10, side, "mm", STPMode::Allow);
        let result = book.add_order(order);
        assert!(result.accepted);
    }
    book
}

/// Register all benchmarks for core book operations.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Core Ops");

    // Benchmark resting adds at varying book depths
    for &order_count in &[100u64, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("add_resting_order", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || populate(count),
                    |mut book| {
                        let order =
                            Order::limit(count + 1, 9_400, 10, Side::Buy, "mm", STPMode::Allow);
                        black_box(book.add_order(order));
                    },
                );
            },
        );
    }

    // Benchmark a marketable limit sweeping the top of the ask side
    for &order_count in &[1_000u64, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("cross_top_levels", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || populate(count),
                    |mut book| {
                        let order = Order::limit(
                            count + 1,
                            10_009,
                            100,
                            Side::Buy,
                            "taker",
                            STPMode::Allow,
                        );
                        black_box(book.add_order(order));
                    },
                );
            },
        );
    }

    // Benchmark O(1) cancellation from the middle of the book
    for &order_count in &[1_000u64, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("cancel_order", order_count),
            &order_count,
            |b, &count| {
                b.iter_with_setup(
                    || populate(count),
                    |mut book| {
                        assert!(black_box(book.cancel_order(count / 2 + 1)));
                    },
                );
            },
        );
    }

    // Benchmark the top-of-book snapshot
    group.bench_function("snapshot", |b| {
        let book = populate(10_000);
        b.iter(|| black_box(book.snapshot()));
    });

    group.finish();
}
