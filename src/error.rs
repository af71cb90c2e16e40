// src/error.rs

//! Error types for challenge generation.
//!
//! Every failure is fatal: the generator never retries or recovers, the
//! first error aborts the run before any output is produced.

use thiserror::Error;

/// Errors that can abort a challenge generation run.
#[derive(Error, Debug)]
pub enum Error {
    /// The secure random source failed or was exhausted.
    #[error("Secure random source failed")]
    RandomSource,

    /// The secret file could not be read.
    #[error("Failed to read secret file: {0}")]
    SecretFile(#[from] std::io::Error),

    /// The secret is longer than the fixed message size.
    #[error("Secret is {len} bytes, maximum is 128")]
    InvalidSecretLength {
        /// Length of the rejected secret.
        len: usize,
    },

    /// The padded message is not smaller than the modulus.
    #[error("Padded message is not smaller than the modulus")]
    MessageTooLarge,
}

/// Type alias for results in inferno-pad.
pub type Result<T> = core::result::Result<T, Error>;
