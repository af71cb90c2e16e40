// src/consts.rs

//! Fixed challenge parameters. None of these are configurable at runtime.

/// Bit length of each generated prime.
pub const PRIME_BITS: usize = 1024;

/// Bit length of the blinding integers `a` and `b`, sampled from `[0, 2^1024)`.
pub const BLIND_BITS: usize = 1024;

/// Total message size in bytes after padding.
pub const MESSAGE_SIZE: usize = 128;

/// Textbook RSA public exponent.
pub const PUBLIC_EXPONENT: u32 = 65537;

/// Path the binary reads the secret from.
pub const FLAG_PATH: &str = "flag.txt";
