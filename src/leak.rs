// src/leak.rs

//! Leak-value composition.
//!
//! The leaks deliberately reveal partial information about the primes:
//! `x mod q = p mod q` and `y mod p = q mod p`, which a solver uses to
//! reconstruct `p` and `q`.

use num_bigint_dig::BigUint;

/// Compose the leak values `x = b*q + p` and `y = a*p + q`.
#[must_use]
pub fn compose(p: &BigUint, q: &BigUint, a: &BigUint, b: &BigUint) -> (BigUint, BigUint) {
    let x = b * q + p;
    let y = a * p + q;
    (x, y)
}
