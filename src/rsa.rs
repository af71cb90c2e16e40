// src/rsa.rs

//! Textbook RSA encryption with the fixed public exponent.

use crate::consts::PUBLIC_EXPONENT;
use crate::error::{Error, Result};
use num_bigint_dig::BigUint;

/// Compute `c = m^65537 mod n`.
///
/// The message must satisfy `m < n`; a 128-byte message against a ~2048-bit
/// modulus makes a violation astronomically unlikely, but it is checked
/// anyway and surfaces as [`Error::MessageTooLarge`] rather than a silently
/// wrong ciphertext.
pub fn encrypt(m: &BigUint, n: &BigUint) -> Result<BigUint> {
    if m >= n {
        return Err(Error::MessageTooLarge);
    }
    let e = BigUint::from(PUBLIC_EXPONENT);
    Ok(m.modpow(&e, n))
}
