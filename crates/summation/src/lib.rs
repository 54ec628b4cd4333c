//! Three ways to compute `1 + 2 + … + n`.
//!
//! Every variant returns `Some(0)` for `n <= 0` and `None` when the sum does
//! not fit in an `i64`, i.e. for `n > MAX_N`.

/// Largest `n` whose sum fits in an `i64`.
pub const MAX_N: i64 = 4_294_967_295;

/// Iterative sum.
///
/// ```rust
/// assert_eq!(summation::sum_to_n_loop(5), Some(15));
/// ```
#[must_use]
pub fn sum_to_n_loop(n: i64) -> Option<i64> {
    if n > MAX_N {
        return None;
    }
    let mut sum: i64 = 0;
    for i in 1..=n {
        sum = sum.checked_add(i)?;
    }
    Some(sum)
}

/// Closed form `n * (n + 1) / 2`.
///
/// One of `n` and `n + 1` is even, so it is halved before multiplying.
///
/// ```rust
/// assert_eq!(summation::sum_to_n_formula(i64::MAX), None);
/// ```
#[must_use]
pub fn sum_to_n_formula(n: i64) -> Option<i64> {
    if n <= 0 {
        return Some(0);
    }
    let next = n.checked_add(1)?;
    if n % 2 == 0 {
        (n / 2).checked_mul(next)
    } else {
        n.checked_mul(next / 2)
    }
}

/// Recursive sum, `n + sum(n - 1)`.
///
/// Recursion depth is `n`; only suitable for small inputs.
#[must_use]
pub fn sum_to_n_recursive(n: i64) -> Option<i64> {
    if n > MAX_N {
        return None;
    }
    if n <= 0 {
        return Some(0);
    }
    n.checked_add(sum_to_n_recursive(n - 1)?)
}
