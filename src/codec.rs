//! Ranking and unranking of permutations.
//!
//! A permutation of degree n is encoded as an integer in `0..n!` through a mixed-radix code with
//! the radices n, n-1, ..., 2, most significant first. Digit `i` (radix `n - i`) records how far
//! value `i` has to travel to reach position `i` when the permutation is sorted back into the
//! identity by swaps, left to right. Every nonzero digit is one transposition.
//!
//! The least significant digit (radix 2) is not stored as-is. It holds the parity of the whole
//! permutation, and decoding recovers the final swap from it. As a result a rank is odd exactly
//! when its permutation is odd, which the alternating group uses to skip odd permutations.
//!
//! Both directions take O(n) arithmetic operations on the rank.
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::perm::Perm;
use crate::util::popcount;
use crate::{El, Rank};

/// Encode a permutation as its rank in `0..n!`.
pub fn rank(perm: &Perm) -> Rank {
    let n = perm.degree();
    if n < 2 {
        return Rank::zero();
    }

    // Sort the permutation into the identity by swapping positions while tracking the position
    // of every value.
    let mut work = perm.as_slice().to_vec();
    let mut position = vec![0usize; n];
    for (i, &p_i) in work.iter().enumerate() {
        position[p_i as usize] = i;
    }

    let mut moved = BigUint::zero();
    let mut x = Rank::zero();

    for i in 0..n - 1 {
        let j = position[i];
        let mut term = j - i;
        if term != 0 {
            moved.set_bit(i as u64, true);
            let displaced = work[i];
            work.swap(i, j);
            position[displaced as usize] = j;
            position[i] = i;
        }
        if i == n - 2 {
            term = (popcount(&moved) & 1) as usize;
        }
        x = x * (n - i) + term;
    }

    x
}

/// Decode a rank in `0..n!` into a permutation of degree n.
///
/// Ranks outside `0..n!` are a caller error; the result for them is unspecified.
pub fn unrank(degree: usize, rank: &Rank) -> Perm {
    let mut perm = Perm::identity(degree);
    if degree < 2 {
        return perm;
    }

    let mut digits = vec![0usize; degree - 1];
    let mut x = rank.clone();
    for i in (0..degree - 1).rev() {
        let (quotient, digit) = x.div_rem(&BigUint::from(degree - i));
        digits[i] = digit.to_usize().expect("digit is below its radix");
        x = quotient;
    }

    let (last, rest) = digits.split_last_mut().expect("degree is at least 2");
    let mut moved = BigUint::zero();
    for (i, &digit) in rest.iter().enumerate() {
        if digit != 0 {
            moved.set_bit(i as u64, true);
        }
    }
    let parity = (popcount(&moved) & 1) as usize;
    // The stored digit is the parity of the whole permutation; the final swap happened exactly
    // when it disagrees with the parity of the other swaps.
    *last ^= parity;

    for (i, &digit) in digits.iter().enumerate().rev() {
        if digit != 0 {
            perm.transpose(i as El, (i + digit) as El);
        }
    }

    perm
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::action::RightAction;
    use crate::util::factorial;

    fn random_perm<S>(size: S) -> impl Strategy<Value = Perm>
    where
        S: Strategy<Value = El>,
    {
        size.prop_map(|v| (0..v).collect::<Vec<_>>())
            .prop_shuffle()
            .prop_map(|vec| Perm::from_vec(vec).unwrap())
    }

    #[test]
    fn identity_is_zero() {
        for n in 0..10 {
            assert_eq!(rank(&Perm::identity(n)), Rank::zero());
            assert_eq!(unrank(n, &Rank::zero()), Perm::identity(n));
        }
    }

    #[test]
    fn exhaustive_roundtrip() {
        for n in 0..8 {
            let order = factorial(n).to_usize().unwrap();
            let mut seen = vec![false; order];
            for x in 0..order {
                let x = Rank::from(x);
                let perm = unrank(n, &x);
                assert_eq!(perm.degree(), n);
                assert_eq!(rank(&perm), x);

                let back = rank(&perm).to_usize().unwrap();
                assert!(!seen[back]);
                seen[back] = true;
            }
        }
    }

    #[test]
    fn low_bit_is_parity() {
        for n in 0..7 {
            let order = factorial(n).to_usize().unwrap();
            for x in 0..order {
                let perm = unrank(n, &Rank::from(x));
                assert_eq!(perm.is_even(), x % 2 == 0, "n = {}, x = {}", n, x);
            }
        }
    }

    #[test]
    fn small_ranks() {
        assert_eq!(unrank(2, &Rank::from(1u32)).as_slice(), &[1, 0]);
        assert_eq!(unrank(3, &Rank::from(1u32)).as_slice(), &[0, 2, 1]);
        assert_eq!(rank(&Perm::from_vec(vec![1, 0, 2]).unwrap()), Rank::from(3u32));
        assert_eq!(rank(&Perm::from_vec(vec![2, 1, 0]).unwrap()), Rank::from(5u32));
    }

    proptest! {
        #[test]
        fn roundtrip_large(perm in random_perm(0..300u32)) {
            let x = rank(&perm);
            prop_assert!(x < factorial(perm.degree()));
            prop_assert_eq!(unrank(perm.degree(), &x), perm);
        }

        #[test]
        fn roundtrip_ranks(n in 2..30usize, x in any::<u128>()) {
            let x = Rank::from(x) % factorial(n);
            prop_assert_eq!(rank(&unrank(n, &x)), x);
        }

        #[test]
        fn rank_parity_of_products(a in random_perm(12..13u32), b in random_perm(12..13u32)) {
            let product = b.right_apply(a.clone());
            let parity = |p: &Perm| rank(p).is_odd();
            prop_assert_eq!(parity(&product), parity(&a) ^ parity(&b));
        }
    }
}
