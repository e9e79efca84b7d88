//! The group interface shared by all group families.
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::util::pmod;
use crate::Rank;

/// A finite group whose elements are ranks in `0..order`.
///
/// Groups hold no elements. Every operation takes and returns ranks, and the identity is always
/// rank 0. Passing a rank outside `0..order` to [`mul`](Group::mul), [`inv`](Group::inv) or
/// [`name`](Group::name) is a programming error and panics.
pub trait Group {
    /// The number of elements.
    fn order(&self) -> &Rank;

    /// The identity element.
    fn id(&self) -> Rank {
        Rank::zero()
    }

    /// Parse the textual name of an element.
    ///
    /// Returns None when the text does not name an element of this group.
    fn parse(&self, name: &str) -> Option<Rank>;

    /// The textual name of an element.
    fn name(&self, x: &Rank) -> String;

    /// The product of two elements. The left operand acts first.
    fn mul(&self, a: &Rank, b: &Rank) -> Rank;

    /// The inverse of an element.
    fn inv(&self, x: &Rank) -> Rank;

    /// Whether `x` is a valid rank for this group.
    fn contains(&self, x: &Rank) -> bool {
        x < self.order()
    }

    /// Panics unless `x` is a valid rank for this group.
    fn check(&self, x: &Rank) {
        assert!(
            self.contains(x),
            "rank {} out of range for group of order {}",
            x,
            self.order()
        );
    }

    /// An element raised to a signed power.
    ///
    /// Negative exponents raise the inverse. This performs exponentiation by squaring.
    fn pow(&self, x: &Rank, exponent: &BigInt) -> Rank {
        self.check(x);
        let base = if exponent.is_negative() {
            self.inv(x)
        } else {
            x.clone()
        };
        // Reducing by the group order keeps the loop short for huge exponents.
        let mut exp = pmod(&exponent.abs(), &BigInt::from(self.order().clone()));
        let mut square = base;
        let mut result = self.id();
        while !exp.is_zero() {
            if exp.is_odd() {
                result = self.mul(&result, &square);
            }
            exp >>= 1;
            if !exp.is_zero() {
                square = self.mul(&square, &square);
            }
        }
        result
    }

    /// Iterate over all elements in rank order.
    fn elements(&self) -> Elements {
        Elements {
            next: Rank::zero(),
            end: self.order().clone(),
        }
    }
}

/// Iterator over the ranks `0..order` of a group.
#[derive(Clone, Debug)]
pub struct Elements {
    next: Rank,
    end: Rank,
}

impl Iterator for Elements {
    type Item = Rank;

    fn next(&mut self) -> Option<Rank> {
        if self.next < self.end {
            let current = self.next.clone();
            self.next += Rank::one();
            Some(current)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.end - &self.next).to_usize() {
            Some(len) => (len, Some(len)),
            None => (usize::max_value(), None),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Check associativity, identity and inverses over every element.
    pub fn check_axioms<G: Group>(group: &G) {
        let elements = group.elements().collect::<Vec<_>>();
        assert_eq!(Rank::from(elements.len()), *group.order());
        let id = group.id();
        for a in elements.iter() {
            assert_eq!(group.mul(&id, a), *a);
            assert_eq!(group.mul(a, &id), *a);
            assert_eq!(group.mul(a, &group.inv(a)), id);
            assert_eq!(group.mul(&group.inv(a), a), id);
            for b in elements.iter() {
                let ab = group.mul(a, b);
                assert!(group.contains(&ab));
                for c in elements.iter() {
                    assert_eq!(group.mul(&ab, c), group.mul(a, &group.mul(b, c)));
                }
            }
        }
    }

    /// Check that every element's name parses back to it.
    pub fn check_names<G: Group>(group: &G) {
        for x in group.elements() {
            let name = group.name(&x);
            assert_eq!(group.parse(&name), Some(x.clone()), "{}", name);
        }
    }
}
