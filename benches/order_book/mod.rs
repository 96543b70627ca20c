use criterion::Criterion;

mod book_ops;

/// Register all order book benchmarks.
pub fn register_benchmarks(c: &mut Criterion) {
    book_ops::register_benchmarks(c);
}
