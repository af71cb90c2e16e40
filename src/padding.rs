// src/padding.rs

//! Secret padding to the fixed message size.

use crate::consts::MESSAGE_SIZE;
use crate::error::{Error, Result};
use num_bigint_dig::BigUint;
use zeroize::Zeroize;

/// Pad the secret to exactly [`MESSAGE_SIZE`] bytes with random bytes and
/// interpret the buffer as a big-endian integer.
///
/// A secret of exactly 128 bytes consumes no random bytes. A longer secret
/// is rejected with [`Error::InvalidSecretLength`] before the rng is
/// touched.
pub fn pad_secret<R>(rng: &mut R, secret: &[u8]) -> Result<BigUint>
where
    R: rand_core::RngCore + rand_core::CryptoRng,
{
    if secret.len() > MESSAGE_SIZE {
        return Err(Error::InvalidSecretLength { len: secret.len() });
    }

    let mut buffer = [0u8; MESSAGE_SIZE];
    buffer[..secret.len()].copy_from_slice(secret);
    rng.try_fill_bytes(&mut buffer[secret.len()..])
        .map_err(|_| Error::RandomSource)?;

    let m = BigUint::from_bytes_be(&buffer);
    buffer.zeroize();
    Ok(m)
}
