// src/sampling.rs

//! Random prime and blinding-integer generation.
//!
//! Both samplers take the rng explicitly; the binary passes `OsRng`, tests
//! pass a seeded rng. The infallible `RngCore` interface aborts the process
//! if the underlying source fails, so neither sampler can return a partial
//! value.

use crate::consts::{BLIND_BITS, PRIME_BITS};
use num_bigint_dig::{BigUint, RandBigInt, RandPrime};

/// Generate a 1024-bit probable prime with the top bit set.
#[must_use]
pub fn random_prime<R: rand_core::RngCore + rand_core::CryptoRng>(rng: &mut R) -> BigUint {
    rng.gen_prime(PRIME_BITS)
}

/// Sample a blinding integer uniformly from `[0, 2^1024)`.
///
/// The bound is a power of two, so a straight 1024-bit draw is exactly
/// uniform and no rejection step is needed.
#[must_use]
pub fn random_blind<R: rand_core::RngCore + rand_core::CryptoRng>(rng: &mut R) -> BigUint {
    rng.gen_biguint(BLIND_BITS)
}
