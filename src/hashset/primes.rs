//! Prime sizes of the hash tables.

use tracing::error;

use crate::failure::{Failure, Result};

/// The largest prime size of a table, such that table indexes fit within 31 bits.
pub const MAX_PRIME: usize = 0x7FEF_FFFD;

//  Sizes beyond the table must also not be congruent to 1 modulo this prime.
const HASH_PRIME: usize = 101;

//  Roughly 1.2x apart, so that doubling lands close to one of them.
const PRIMES: &[usize] = &[
    3, 7, 11, 17, 23, 29, 37, 47, 59, 71, 89, 107, 131, 163, 197, 239, 293, 353, 431, 521, 631, 761, 919,
    1103, 1327, 1597, 1931, 2333, 2801, 3371, 4049, 4861, 5839, 7013, 8419, 10103, 12143, 14591,
    17519, 21023, 25229, 30293, 36353, 43627, 52361, 62851, 75431, 90523, 108631, 130363, 156437,
    187751, 225307, 270371, 324449, 389357, 467237, 560689, 672827, 807403, 968897, 1162687, 1395263,
    1674319, 2009191, 2411033, 2893249, 3471899, 4166287, 4999559, 5999471, 7199369,
];

/// Returns whether `candidate` is prime.
pub fn is_prime(candidate: usize) -> bool {
    if candidate & 1 == 0 {
        return candidate == 2;
    }

    let mut divisor = 3;
    while divisor <= candidate / divisor {
        if candidate % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    candidate != 1
}

/// Returns the smallest usable prime greater than or equal to `min`.
///
/// #   Errors
///
/// Returns `CapacityExhausted` if there is no such prime within 31 bits.
pub fn get_prime(min: usize) -> Result<usize> {
    if let Some(prime) = PRIMES.iter().copied().find(|&p| p >= min) {
        return Ok(prime);
    }

    let mut candidate = min | 1;
    while candidate <= i32::MAX as usize {
        if is_prime(candidate) && (candidate - 1) % HASH_PRIME != 0 {
            return Ok(candidate);
        }
        candidate += 2;
    }

    error!(min, "no prime table size available");
    Err(Failure::CapacityExhausted)
}

/// Returns the prime size to grow a table holding `old` elements to.
///
/// #   Errors
///
/// Returns `CapacityExhausted` if there is no larger prime within 31 bits.
pub fn expand_prime(old: usize) -> Result<usize> {
    let new = old.saturating_mul(2);

    if new > MAX_PRIME && MAX_PRIME > old {
        return Ok(MAX_PRIME);
    }

    get_prime(new)
}
