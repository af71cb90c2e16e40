// src/challenge.rs

//! A complete challenge instance and the order it is generated in.

use crate::error::Result;
use crate::{leak, padding, rsa};
use crate::sampling::{random_blind, random_prime};
use core::fmt;
use num_bigint_dig::BigUint;

/// One generated challenge instance.
///
/// All fields are readable so a test harness can verify the arithmetic;
/// only `c`, `n`, `x`, `y` are public outputs, emitted by the `Display`
/// impl. `p`, `q`, `a`, `b`, `m` never leave the process in normal
/// operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Challenge {
    /// First prime factor of the modulus.
    pub p: BigUint,
    /// Second prime factor of the modulus.
    pub q: BigUint,
    /// Public modulus, `p * q`.
    pub n: BigUint,
    /// Blinding integer for the `y` leak.
    pub a: BigUint,
    /// Blinding integer for the `x` leak.
    pub b: BigUint,
    /// Padded message as a big-endian integer.
    pub m: BigUint,
    /// Ciphertext, `m^65537 mod n`.
    pub c: BigUint,
    /// Leak value `b*q + p`.
    pub x: BigUint,
    /// Leak value `a*p + q`.
    pub y: BigUint,
}

impl Challenge {
    /// Generate a full instance from the given rng and secret bytes.
    ///
    /// Draws in a fixed order (p, q, a, b, padding), so a seeded rng
    /// reproduces the identical instance. The first failure aborts the
    /// run; no partial instance is ever returned.
    pub fn generate<R>(rng: &mut R, secret: &[u8]) -> Result<Self>
    where
        R: rand_core::RngCore + rand_core::CryptoRng,
    {
        let p = random_prime(rng);
        let q = random_prime(rng);
        let a = random_blind(rng);
        let b = random_blind(rng);
        let n = &p * &q;

        let m = padding::pad_secret(rng, secret)?;
        let c = rsa::encrypt(&m, &n)?;
        let (x, y) = leak::compose(&p, &q, &a, &b);

        Ok(Self {
            p,
            q,
            n,
            a,
            b,
            m,
            c,
            x,
            y,
        })
    }
}

impl fmt::Display for Challenge {
    /// The published form: `c`, `n`, `x`, `y` in decimal, one per line.
    /// The `"c = "` style prefixes are part of the contract a solver
    /// script parses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "c = {}", self.c)?;
        writeln!(f, "n = {}", self.n)?;
        writeln!(f, "x = {}", self.x)?;
        write!(f, "y = {}", self.y)
    }
}
