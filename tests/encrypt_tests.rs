// tests/encrypt_tests.rs

//! Tests for the textbook RSA encryption step.

use inferno_pad::rsa::encrypt;
use inferno_pad::{Error, PUBLIC_EXPONENT};
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};

#[test]
fn test_exponent_is_65537() {
    assert_eq!(PUBLIC_EXPONENT, 65537);
}

#[test]
fn test_zero_and_one_are_fixed_points() {
    // 91 = 7 * 13, small but enough for fixed-point checks.
    let n = BigUint::from(91u32);

    let c0 = encrypt(&BigUint::zero(), &n).unwrap();
    assert!(c0.is_zero());

    let c1 = encrypt(&BigUint::one(), &n).unwrap();
    assert!(c1.is_one());
}

#[test]
fn test_ciphertext_matches_modpow() {
    let n = BigUint::from(3233u32); // 61 * 53
    let m = BigUint::from(42u32);

    let c = encrypt(&m, &n).unwrap();
    assert_eq!(c, m.modpow(&BigUint::from(65537u32), &n));
    assert!(c < n);
}

#[test]
fn test_message_equal_to_modulus_is_rejected() {
    let n = BigUint::from(3233u32);
    let result = encrypt(&n, &n);
    assert!(matches!(result, Err(Error::MessageTooLarge)));
}

#[test]
fn test_message_above_modulus_is_rejected() {
    let n = BigUint::from(3233u32);
    let m = &n + BigUint::one();
    let result = encrypt(&m, &n);
    assert!(matches!(result, Err(Error::MessageTooLarge)));
}
