//! Symmetric and alternating groups.
//!
//! Both groups decode ranks to permutations with [`codec`](crate::codec), compose the
//! permutations and encode the result again. The alternating group halves the rank space:
//! rank x stands for the symmetric rank `2x`, so only even permutations are reachable.
use std::fmt;

use num_integer::Integer;

use crate::action::RightAction;
use crate::codec::{rank, unrank};
use crate::error::Error;
use crate::group::Group;
use crate::notation::Notation;
use crate::perm::Perm;
use crate::util::factorial;
use crate::Rank;

/// The group of all permutations of n elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymmetricGroup {
    degree: usize,
    order: Rank,
    notation: Notation,
}

impl SymmetricGroup {
    /// Symmetric group written in 1-based cycle notation.
    pub fn new(degree: usize) -> SymmetricGroup {
        SymmetricGroup {
            degree,
            order: factorial(degree),
            notation: Notation::new(),
        }
    }

    /// Symmetric group whose elements are written with one label per position.
    pub fn with_labels<I, S>(labels: I) -> Result<SymmetricGroup, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let degree = labels.len();
        Ok(SymmetricGroup {
            degree,
            order: factorial(degree),
            notation: Notation::with_labels(degree, labels)?,
        })
    }

    /// Name unlabelled elements with matrix literals when the degree is below `threshold`.
    pub fn prefer_matrix_below(mut self, threshold: usize) -> SymmetricGroup {
        self.notation = self.notation.prefer_matrix_below(threshold);
        self
    }

    /// The number of permuted elements.
    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn notation(&self) -> &Notation {
        &self.notation
    }

    /// The permutation with the given rank.
    pub fn permutation(&self, x: &Rank) -> Perm {
        self.check(x);
        unrank(self.degree, x)
    }

    /// The rank of a permutation.
    ///
    /// Panics if the permutation's degree differs from this group's.
    pub fn index(&self, perm: &Perm) -> Rank {
        assert_eq!(perm.degree(), self.degree);
        rank(perm)
    }
}

impl Group for SymmetricGroup {
    fn order(&self) -> &Rank {
        &self.order
    }

    fn parse(&self, name: &str) -> Option<Rank> {
        self.notation
            .parse(self.degree, name)
            .map(|perm| rank(&perm))
    }

    fn name(&self, x: &Rank) -> String {
        self.notation.name(&self.permutation(x))
    }

    fn mul(&self, a: &Rank, b: &Rank) -> Rank {
        let a = self.permutation(a);
        let b = self.permutation(b);
        rank(&b.right_apply(a))
    }

    fn inv(&self, x: &Rank) -> Rank {
        rank(&self.permutation(x).inverse())
    }
}

impl fmt::Display for SymmetricGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "S{}", self.degree)
    }
}

/// The group of even permutations of n elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlternatingGroup {
    symmetric: SymmetricGroup,
    order: Rank,
}

impl AlternatingGroup {
    fn from_symmetric(symmetric: SymmetricGroup) -> AlternatingGroup {
        // A0 and A1 still contain the identity.
        let order = if symmetric.degree < 2 {
            Rank::from(1u32)
        } else {
            symmetric.order() >> 1
        };
        AlternatingGroup { symmetric, order }
    }

    /// Alternating group written in 1-based cycle notation.
    pub fn new(degree: usize) -> AlternatingGroup {
        Self::from_symmetric(SymmetricGroup::new(degree))
    }

    /// Alternating group whose elements are written with one label per position.
    pub fn with_labels<I, S>(labels: I) -> Result<AlternatingGroup, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SymmetricGroup::with_labels(labels).map(Self::from_symmetric)
    }

    /// Name unlabelled elements with matrix literals when the degree is below `threshold`.
    pub fn prefer_matrix_below(self, threshold: usize) -> AlternatingGroup {
        Self::from_symmetric(self.symmetric.prefer_matrix_below(threshold))
    }

    pub fn degree(&self) -> usize {
        self.symmetric.degree
    }

    /// The permutation with the given rank. It is always even.
    pub fn permutation(&self, x: &Rank) -> Perm {
        self.check(x);
        unrank(self.degree(), &(x << 1))
    }

    /// The rank of a permutation, or None if the permutation is odd.
    ///
    /// Panics if the permutation's degree differs from this group's.
    pub fn index(&self, perm: &Perm) -> Option<Rank> {
        Self::halve(self.symmetric.index(perm))
    }

    fn halve(x: Rank) -> Option<Rank> {
        // The low bit of a symmetric rank is the parity of its permutation.
        if x.is_odd() {
            None
        } else {
            Some(x >> 1)
        }
    }

    fn even_index(&self, perm: &Perm) -> Rank {
        let x = rank(perm);
        debug_assert!(x.is_even());
        x >> 1
    }
}

impl Group for AlternatingGroup {
    fn order(&self) -> &Rank {
        &self.order
    }

    fn parse(&self, name: &str) -> Option<Rank> {
        self.symmetric.parse(name).and_then(Self::halve)
    }

    fn name(&self, x: &Rank) -> String {
        self.symmetric.notation.name(&self.permutation(x))
    }

    fn mul(&self, a: &Rank, b: &Rank) -> Rank {
        let a = self.permutation(a);
        let b = self.permutation(b);
        self.even_index(&b.right_apply(a))
    }

    fn inv(&self, x: &Rank) -> Rank {
        self.even_index(&self.permutation(x).inverse())
    }
}

impl fmt::Display for AlternatingGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "A{}", self.degree())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_traits::ToPrimitive;
    use proptest::prelude::*;

    use crate::group::tests::{check_axioms, check_names};

    fn r(x: u32) -> Rank {
        Rank::from(x)
    }

    #[test]
    fn s3_products() {
        let s3 = SymmetricGroup::new(3);
        assert_eq!(s3.to_string(), "S3");
        assert_eq!(*s3.order(), r(6));
        assert_eq!(s3.name(&r(0)), "e");

        let a = s3.parse("(1 2)").unwrap();
        let b = s3.parse("(2 3)").unwrap();
        assert_eq!(s3.mul(&a, &b), s3.parse("(1 3 2)").unwrap());
        assert_eq!(s3.mul(&b, &a), s3.parse("(1 2 3)").unwrap());
        assert_eq!(s3.parse("(1 2)(2 3)").unwrap(), s3.mul(&a, &b));
        assert_eq!(s3.inv(&s3.parse("(1 2 3)").unwrap()), s3.parse("(1 3 2)").unwrap());
    }

    #[test]
    fn group_axioms() {
        for n in 0..5 {
            check_axioms(&SymmetricGroup::new(n));
            check_axioms(&AlternatingGroup::new(n));
        }
        check_axioms(&AlternatingGroup::new(5));
    }

    #[test]
    fn labelled_names_roundtrip() {
        let s5 = SymmetricGroup::with_labels(vec!["A", "B", "C", "D", "E"]).unwrap();
        assert_eq!(*s5.order(), r(120));
        check_names(&s5);
        assert_eq!(s5.parse("(A B)(C D E)").map(|x| s5.name(&x)).as_deref(), Some("(A B)(C D E)"));
    }

    #[test]
    fn unlabelled_names_roundtrip() {
        for n in 0..6 {
            check_names(&SymmetricGroup::new(n));
            check_names(&SymmetricGroup::new(n).prefer_matrix_below(10));
            check_names(&AlternatingGroup::new(n));
        }
    }

    #[test]
    fn matrix_names() {
        let s4 = SymmetricGroup::new(4).prefer_matrix_below(10);
        let x = s4.parse("(1 2 3 4)").unwrap();
        assert_eq!(s4.name(&x), "[2341]");
        assert_eq!(s4.name(&r(0)), "[1234]");
        assert_eq!(s4.parse("e"), Some(r(0)));
        assert_eq!(s4.parse("[1134]"), None);
    }

    #[test]
    fn alternating_restriction() {
        for n in 0..7 {
            let sym = SymmetricGroup::new(n);
            let alt = AlternatingGroup::new(n);
            let expected = if n < 2 { 1 } else { sym.order().to_usize().unwrap() / 2 };
            assert_eq!(alt.order().to_usize().unwrap(), expected);

            let mut seen = std::collections::HashSet::new();
            for x in alt.elements() {
                let perm = alt.permutation(&x);
                assert!(perm.is_even());
                assert_eq!(alt.index(&perm), Some(x.clone()));
                assert!(seen.insert(perm));
            }
            for x in sym.elements() {
                let perm = sym.permutation(&x);
                if !perm.is_even() {
                    assert_eq!(alt.index(&perm), None);
                }
            }
        }
    }

    #[test]
    fn alternating_rejects_odd_names() {
        let a4 = AlternatingGroup::new(4);
        assert_eq!(a4.to_string(), "A4");
        assert_eq!(*a4.order(), r(12));
        assert_eq!(a4.parse("(1 2)"), None);
        assert_eq!(a4.parse("(1 2 3 4)"), None);
        let x = a4.parse("(1 2)(3 4)").unwrap();
        assert_eq!(a4.name(&x), "(1 2)(3 4)");
        assert_eq!(a4.mul(&x, &x), a4.id());
        let c = a4.parse("(1 2 3)").unwrap();
        assert_eq!(a4.pow(&c, &3.into()), a4.id());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn alternating_rank_out_of_range() {
        AlternatingGroup::new(4).name(&r(12));
    }

    #[test]
    fn invalid_labels() {
        assert_eq!(
            SymmetricGroup::with_labels(vec!["A", "A"]),
            Err(Error::DuplicateLabel("A".to_string()))
        );
    }

    proptest! {
        #[test]
        fn large_degree_axioms(
            a in any::<u128>(),
            b in any::<u128>(),
            c in any::<u128>(),
        ) {
            let s20 = SymmetricGroup::new(20);
            let a = Rank::from(a) % s20.order();
            let b = Rank::from(b) % s20.order();
            let c = Rank::from(c) % s20.order();

            prop_assert_eq!(
                s20.mul(&s20.mul(&a, &b), &c),
                s20.mul(&a, &s20.mul(&b, &c))
            );
            prop_assert_eq!(s20.mul(&a, &s20.inv(&a)), s20.id());
            prop_assert_eq!(s20.parse(&s20.name(&a)), Some(a));
        }

        #[test]
        fn alternating_products_stay_even(a in any::<u64>(), b in any::<u64>()) {
            let a9 = AlternatingGroup::new(9);
            let a = Rank::from(a) % a9.order();
            let b = Rank::from(b) % a9.order();
            let product = a9.mul(&a, &b);
            prop_assert!(a9.contains(&product));
            prop_assert!(a9.permutation(&product).is_even());
            prop_assert_eq!(a9.parse(&a9.name(&product)), Some(product));
        }
    }
}
