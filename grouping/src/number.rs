//! Number theory: primality and divisors.

use serde::{Deserialize, Serialize};

use crate::GroupingError;

#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

/// Prime/composite classification. Every non-prime, `1` included, is
/// reported as composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Prime,
    Composite,
}

/// Trial division up to `⌊√n⌋`. Returns `false` for `n <= 1`.
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n <= 1 {
        return false;
    }
    (2..=n.isqrt()).all(|i| n % i != 0)
}

/// Every `i` in `1..=n` dividing `n`, ascending.
///
/// Divisors are found in pairs `(i, n / i)` for `i <= √n`, so the work is
/// `O(√n)`; the output matches direct trial division over `1..=n`.
///
/// # Errors
///
/// Returns [`GroupingError::InvalidArgument`] for `n == 0`, whose divisor set
/// is unbounded.
pub fn divisors(n: u32) -> Result<Vec<u32>, GroupingError> {
    if n == 0 {
        return Err(GroupingError::InvalidArgument("divisors of 0 are unbounded".into()));
    }

    let mut small = Vec::new();
    let mut large = Vec::new();
    for i in (1..=n.isqrt()).filter(|i| n % i == 0) {
        small.push(i);
        let pair = n / i;
        if pair != i {
            large.push(pair);
        }
    }
    small.extend(large.into_iter().rev());
    Ok(small)
}

#[must_use]
pub fn classify(n: u32) -> Classification {
    if is_prime(n) { Classification::Prime } else { Classification::Composite }
}
