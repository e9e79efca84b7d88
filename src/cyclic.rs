//! Cyclic groups.
use std::fmt;
use std::sync::OnceLock;

use num_bigint::BigInt;
use num_traits::{One, Zero};
use regex::Regex;

use crate::group::Group;
use crate::notation::IDENTITY;
use crate::util::pmod;
use crate::Rank;

/// The cyclic group Z<sub>n</sub>, generated by a single element `g`.
///
/// Rank k is g<sup>k</sup>. Elements are named `e`, `g`, `g2`, ..., and any integer power such as
/// `g-1` or `g10` is accepted when parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CyclicGroup {
    n: Rank,
}

impl CyclicGroup {
    /// Panics if `n` is zero.
    pub fn new<N: Into<Rank>>(n: N) -> CyclicGroup {
        let n = n.into();
        assert!(!n.is_zero(), "cyclic group must have at least one element");
        CyclicGroup { n }
    }
}

fn power_regex() -> &'static Regex {
    static POWER: OnceLock<Regex> = OnceLock::new();
    POWER.get_or_init(|| Regex::new(r"^g(-?\d*)$").expect("valid regex"))
}

impl Group for CyclicGroup {
    fn order(&self) -> &Rank {
        &self.n
    }

    fn parse(&self, name: &str) -> Option<Rank> {
        if name == IDENTITY {
            return Some(Rank::zero());
        }
        let captures = power_regex().captures(name)?;
        let power = match &captures[1] {
            "" => BigInt::one(),
            digits => digits.parse::<BigInt>().ok()?,
        };
        Some(pmod(&power, &BigInt::from(self.n.clone())))
    }

    fn name(&self, x: &Rank) -> String {
        self.check(x);
        if x.is_zero() {
            IDENTITY.to_string()
        } else if x.is_one() {
            "g".to_string()
        } else {
            format!("g{}", x)
        }
    }

    fn mul(&self, a: &Rank, b: &Rank) -> Rank {
        self.check(a);
        self.check(b);
        (a + b) % &self.n
    }

    fn inv(&self, x: &Rank) -> Rank {
        self.check(x);
        if x.is_zero() {
            Rank::zero()
        } else {
            &self.n - x
        }
    }
}

impl fmt::Display for CyclicGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Z{}", self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::group::tests::{check_axioms, check_names};

    fn r(x: u32) -> Rank {
        Rank::from(x)
    }

    #[test]
    fn names() {
        let z4 = CyclicGroup::new(4u32);
        assert_eq!(z4.to_string(), "Z4");
        assert_eq!(z4.name(&r(0)), "e");
        assert_eq!(z4.name(&r(1)), "g");
        assert_eq!(z4.name(&r(3)), "g3");
        assert_eq!(z4.parse("g-1"), Some(r(3)));
        assert_eq!(z4.parse("g9"), Some(r(1)));
        assert_eq!(z4.parse("g0"), Some(r(0)));
        assert_eq!(z4.parse("h"), None);
        assert_eq!(z4.parse("g-"), None);
        assert_eq!(z4.parse("gg"), None);
    }

    #[test]
    fn axioms() {
        for n in 1..8u32 {
            let group = CyclicGroup::new(n);
            check_axioms(&group);
            check_names(&group);
        }
    }

    #[test]
    fn powers() {
        let z5 = CyclicGroup::new(5u32);
        assert_eq!(z5.pow(&r(2), &BigInt::from(3)), r(1));
        assert_eq!(z5.pow(&r(2), &BigInt::from(-1)), r(3));
        assert_eq!(z5.pow(&r(2), &BigInt::from(0)), r(0));
        assert_eq!(z5.pow(&r(1), &"1000000000000000000001".parse().unwrap()), r(1));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn rank_out_of_range() {
        CyclicGroup::new(4u32).mul(&r(1), &r(4));
    }
}
