//! Dihedral groups.
use std::fmt;
use std::sync::OnceLock;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use regex::Regex;

use crate::group::Group;
use crate::notation::IDENTITY;
use crate::util::pmod;
use crate::Rank;

/// The dihedral group of order 2n, the symmetries of a regular n-gon.
///
/// Every element is written r<sup>k</sup>s<sup>j</sup> for a rotation `r` and a reflection `s`
/// with `0 <= k < n` and `j` in {0, 1}; its rank is `k << 1 | j`. Names are `e`, `r`, `r2`, `s`,
/// `rs`, `r2s` and so on. Parsing also accepts unreduced exponents such as `r5s3` and negative
/// rotations such as `r-1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DihedralGroup {
    n: Rank,
    order: Rank,
}

impl DihedralGroup {
    /// Panics if `n` is zero.
    pub fn new<N: Into<Rank>>(n: N) -> DihedralGroup {
        let n = n.into();
        assert!(!n.is_zero(), "dihedral group needs at least one rotation");
        let order = &n << 1;
        DihedralGroup { n, order }
    }

    fn split(x: &Rank) -> (Rank, bool) {
        (x >> 1, x.is_odd())
    }

    fn join(rotation: Rank, reflection: bool) -> Rank {
        rotation << 1 | Rank::from(reflection as u32)
    }
}

fn element_regex() -> &'static Regex {
    static ELEMENT: OnceLock<Regex> = OnceLock::new();
    ELEMENT.get_or_init(|| Regex::new(r"^(r?)(-?\d*)(s?)(\d*)$").expect("valid regex"))
}

fn exponent(marker: &str, digits: &str) -> Option<BigInt> {
    match (marker.is_empty(), digits.is_empty()) {
        (true, true) => Some(BigInt::zero()),
        (true, false) => None,
        (false, true) => Some(BigInt::one()),
        (false, false) => digits.parse().ok(),
    }
}

impl Group for DihedralGroup {
    fn order(&self) -> &Rank {
        &self.order
    }

    fn parse(&self, name: &str) -> Option<Rank> {
        if name == IDENTITY {
            return Some(Rank::zero());
        }
        if name.is_empty() {
            return None;
        }
        let captures = element_regex().captures(name)?;
        let rotation = exponent(&captures[1], &captures[2])?;
        let reflection = exponent(&captures[3], &captures[4])?;
        let rotation = pmod(&rotation, &BigInt::from(self.n.clone()));
        Some(Self::join(rotation, reflection.is_odd()))
    }

    fn name(&self, x: &Rank) -> String {
        self.check(x);
        let (rotation, reflection) = Self::split(x);
        let mut name = String::new();
        if !rotation.is_zero() {
            name.push('r');
            if !rotation.is_one() {
                name.push_str(&rotation.to_string());
            }
        }
        if reflection {
            name.push('s');
        }
        if name.is_empty() {
            name.push_str(IDENTITY);
        }
        name
    }

    fn mul(&self, a: &Rank, b: &Rank) -> Rank {
        self.check(a);
        self.check(b);
        let (ra, sa) = Self::split(a);
        let (rb, sb) = Self::split(b);
        // s r^k = r^-k s
        let rotation = if sa {
            (ra + &self.n - rb) % &self.n
        } else {
            (ra + rb) % &self.n
        };
        Self::join(rotation, sa ^ sb)
    }

    fn inv(&self, x: &Rank) -> Rank {
        self.check(x);
        let (rotation, reflection) = Self::split(x);
        if reflection || rotation.is_zero() {
            x.clone()
        } else {
            Self::join(&self.n - rotation, false)
        }
    }
}

impl fmt::Display for DihedralGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "D{}", self.n)
    }
}
