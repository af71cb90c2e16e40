// src/lib.rs

//! # inferno-pad
//!
//! One-shot generator for an RSA leak-value CTF challenge.
//!
//! A single [`Challenge::generate`] call produces two 1024-bit primes `p`
//! and `q`, two blinding integers `a, b < 2^1024`, a secret padded to 128
//! bytes and encrypted as `c = m^65537 mod n`, and the two leak values
//! `x = b*q + p` and `y = a*p + q`. Printing the challenge emits the four
//! public values `c`, `n`, `x`, `y` one per line.
//!
//! Every randomized step takes the rng as an explicit parameter, so a
//! seeded rng reproduces an instance exactly.

pub mod challenge;
pub mod consts;
pub mod error;
pub mod leak;
pub mod padding;
pub mod rsa;
pub mod sampling;

pub use challenge::Challenge;
pub use error::{Error, Result};

pub use consts::{MESSAGE_SIZE, PRIME_BITS, PUBLIC_EXPONENT};
