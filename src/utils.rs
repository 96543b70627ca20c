//! Small crate-wide helpers.

use std::sync::OnceLock;
use std::time::Instant;

static CLOCK_ORIGIN: OnceLock<Instant> = OnceLock::new();

/// Returns the number of nanoseconds elapsed on a process-monotonic clock.
///
/// The value is suitable only for ordering events within a single process;
/// it is not a wall-clock timestamp and must not be persisted across runs.
pub fn monotonic_time_ns() -> u64 {
    let origin = CLOCK_ORIGIN.get_or_init(Instant::now);
    origin.elapsed().as_nanos() as u64
}
