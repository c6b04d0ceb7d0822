//! Binomial primitives shared by both probability models.

/// Number of ways to choose `k` items from `n`.
///
/// Returns 0 for `k` outside `0..=n`. The product multiplies and divides
/// in the same step so intermediates stay bounded; no recursion, no
/// factorials.
pub fn binomial_coefficient(n: u32, k: i64) -> f64 {
    if k < 0 || k > i64::from(n) {
        return 0.0;
    }
    let mut k = k as u32;
    if k == 0 || k == n {
        return 1.0;
    }
    if k > n / 2 {
        k = n - k;
    }
    let mut result = 1.0;
    for i in 1..=k {
        result = result * f64::from(n - i + 1) / f64::from(i);
    }
    result
}

/// `P(X >= k)` for `X ~ Binomial(n, p)`.
///
/// `k <= 0` is certainty and `k > n` is impossible; in between the upper
/// tail is summed directly.
pub fn binomial_tail(n: u32, p: f64, k: i64) -> f64 {
    if k <= 0 {
        return 1.0;
    }
    if k > i64::from(n) {
        return 0.0;
    }
    let q = 1.0 - p;
    let mut sum = 0.0;
    for i in k as u32..=n {
        sum += binomial_coefficient(n, i64::from(i)) * p.powi(i as i32) * q.powi((n - i) as i32);
    }
    sum
}
