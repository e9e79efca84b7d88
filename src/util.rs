//! Integer helpers.
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed};

/// Reduce `a` into `0..|b|`.
///
/// Panics when `b` is zero.
pub fn pmod(a: &BigInt, b: &BigInt) -> BigUint {
    let m = b.abs();
    // mod_floor takes the sign of the divisor, which is positive here
    a.mod_floor(&m)
        .to_biguint()
        .expect("floored modulus by a positive divisor is non-negative")
}

/// Number of set bits in a bit-set.
pub fn popcount(bits: &BigUint) -> u64 {
    bits.count_ones()
}

/// The product `1 * 2 * ... * n`.
pub fn factorial(n: usize) -> BigUint {
    (2..=n as u64).fold(BigUint::one(), |acc, k| acc * k)
}
