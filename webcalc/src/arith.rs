//! The two exported functions.
//!
//! Both are pure and operate on `i32` with two's complement wraparound, so
//! every input has a defined result.

/// Smallest `n` whose factorial wraps to `0` in 32 bits
pub const ZERO_FROM: i32 = 34;

/// Sum of `a` and `b`, wrapping on overflow.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Product of `2..=n`, wrapping on overflow.
///
/// Negative `n` returns `0`. `factorial(0)` and `factorial(1)` are both `1`.
pub fn factorial(n: i32) -> i32 {
    if n < 0 {
        return 0;
    }
    // 34! holds 2^32 as a factor, so every wrapped product from there on is 0
    if n >= ZERO_FROM {
        return 0;
    }

    (2..=n).fold(1i32, |acc, i| acc.wrapping_mul(i))
}
