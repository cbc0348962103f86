//! Recursive factorial
//!
//! Recursion depth equals `n`. Results past 20! do not fit in an `i64` and
//! wrap around silently.

use tracing::trace;

use crate::error::{RecursionError, Result};

/// Compute `n!`.
///
/// Fails with [`RecursionError::InvalidArgument`] when `n` is negative.
pub fn compute(n: i32) -> Result<i64> {
    trace!(n, "computing factorial");

    if n < 0 {
        return Err(RecursionError::invalid_argument("n", n, "must be non-negative"));
    }
    Ok(compute_recursive(n as i64))
}

fn compute_recursive(n: i64) -> i64 {
    if n == 0 {
        1
    } else {
        n.wrapping_mul(compute_recursive(n - 1))
    }
}
