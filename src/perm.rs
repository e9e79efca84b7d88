//! Permutation arrays of a fixed degree.
use std::fmt;

use crate::action::{LeftAction, RightAction};
use crate::notation::Notation;
use crate::El;

/// A permutation of {0, ..., n-1}.
///
/// The permutation is stored as the array of images of 0..n, so position `i` maps to value
/// `perm[i]`. The length n is the degree of the permutation. Unlike a group element rank, this
/// is the expanded representation: it is recomputed from a rank whenever it is needed.
///
/// Two permutations can only be composed when their degrees agree.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Perm {
    perm: Box<[El]>,
}

impl Perm {
    /// The identity permutation of the given degree.
    pub fn identity(degree: usize) -> Perm {
        assert!(degree <= El::max_value() as usize);
        Perm {
            perm: (0..degree as El).collect(),
        }
    }

    /// Create a permutation from a vector containing the images of 0..n.
    ///
    /// Returns None if the vector does not correspond to a permutation.
    pub fn from_vec(perm: Vec<El>) -> Option<Perm> {
        assert!(perm.len() <= El::max_value() as usize);
        let mut seen = vec![false; perm.len()];

        for &p_i in perm.iter() {
            let p_i = p_i as usize;
            if p_i >= perm.len() || seen[p_i] {
                return None;
            }
            seen[p_i] = true;
        }

        Some(Perm {
            perm: perm.into_boxed_slice(),
        })
    }

    /// Build a permutation from a product of cycles.
    ///
    /// The product is read the same way as [`Group::mul`](crate::group::Group::mul): the
    /// leftmost cycle acts first. Cycles need not be disjoint. Each cycle maps every element to
    /// its successor and the last element back to the first.
    ///
    /// Returns None if a cycle mentions an element twice or an element outside 0..degree.
    pub fn from_cycles<C>(degree: usize, cycles: &[C]) -> Option<Perm>
    where
        C: AsRef<[El]>,
    {
        let mut result = Perm::identity(degree);
        let mut seen = vec![false; degree];

        // Starting from the identity, each cycle is prepended to the product so far, so the
        // rightmost cycle is applied first.
        for cycle in cycles.iter().rev() {
            let cycle = cycle.as_ref();
            for &el in cycle {
                let el = el as usize;
                if el >= degree || seen[el] {
                    return None;
                }
                seen[el] = true;
            }
            for &el in cycle {
                seen[el as usize] = false;
            }
            result.rotate(cycle);
        }

        Some(result)
    }

    /// Compose a single cycle on the left, in place.
    ///
    /// Afterwards the element `cycle[k]` maps to where `cycle[k + 1]` used to map.
    fn rotate(&mut self, cycle: &[El]) {
        if let Some((&first, rest)) = cycle.split_first() {
            let saved = self.perm[first as usize];
            let mut prev = first;
            for &current in rest {
                self.perm[prev as usize] = self.perm[current as usize];
                prev = current;
            }
            self.perm[prev as usize] = saved;
        }
    }

    /// The number of elements this permutation acts on.
    pub fn degree(&self) -> usize {
        self.perm.len()
    }

    /// The images of 0..n.
    pub fn as_slice(&self) -> &[El] {
        &self.perm
    }

    /// Whether this is the identity permutation.
    pub fn is_identity(&self) -> bool {
        self.perm.iter().enumerate().all(|(i, &p_i)| i == p_i as usize)
    }

    /// Exchange the images of two positions.
    ///
    /// This composes the transposition of `a` and `b` on the left.
    pub fn transpose(&mut self, a: El, b: El) {
        self.perm.swap(a as usize, b as usize);
    }

    /// The inverse of this permutation.
    pub fn inverse(&self) -> Perm {
        let mut inverse = vec![0; self.perm.len()];
        for (i, &p_i) in self.perm.iter().enumerate() {
            inverse[p_i as usize] = i as El;
        }
        Perm {
            perm: inverse.into_boxed_slice(),
        }
    }

    /// The number of transpositions this permutation decomposes into.
    ///
    /// A cycle of length k takes k - 1 transpositions.
    pub fn transpositions(&self) -> usize {
        self.cycles().map(|cycle| cycle.count() - 1).sum()
    }

    /// Whether this permutation is a product of an even number of transpositions.
    pub fn is_even(&self) -> bool {
        self.transpositions() % 2 == 0
    }

    /// Return the cycle starting at an element.
    ///
    /// Returns a 1-cycle when the element is a fixed point of this permutation.
    pub fn cycle_at(&self, el: El) -> Cycle {
        Cycle {
            perm: self,
            pos: Some(el),
            start: el,
        }
    }

    /// Returns an iterator over all proper cycles of a permutation.
    ///
    /// The returned iterator does not produce any 1-cycles. Cycles are ordered by their smallest
    /// element and every cycle starts at its smallest element.
    pub fn cycles(&self) -> Cycles {
        Cycles {
            perm: self,
            seen: vec![false; self.perm.len()],
            pos: 0,
        }
    }
}

impl From<Perm> for Vec<El> {
    fn from(perm: Perm) -> Vec<El> {
        perm.perm.into_vec()
    }
}

/// Application of a permutation to an element.
///
/// Elements beyond the degree are fixed.
impl LeftAction<El> for Perm {
    fn left_apply_to(&self, el: &mut El) {
        *el = self.perm.get(*el as usize).cloned().unwrap_or(*el);
    }
}

/// Composition of a permutation on the right.
///
/// `p.right_apply(q)` first applies `q` and then `p`.
impl RightAction<Perm> for Perm {
    fn right_apply_to(&self, perm: &mut Perm) {
        assert_eq!(self.degree(), perm.degree());
        for el in perm.perm.iter_mut() {
            self.left_apply_to(el);
        }
    }
}

/// Composition of a permutation on the left.
///
/// `p.left_apply(q)` first applies `p` and then `q`.
impl LeftAction<Perm> for Perm {
    fn left_apply_to(&self, perm: &mut Perm) {
        assert_eq!(self.degree(), perm.degree());
        let composed = self
            .perm
            .iter()
            .map(|&p_i| perm.perm[p_i as usize])
            .collect();
        perm.perm = composed;
    }
}

/// Cycle notation with 1-based positions, as written by [`Notation::new`].
impl fmt::Display for Perm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&Notation::new().name(self))
    }
}

impl fmt::Debug for Perm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Iterator over the elements of a permutation's cycle.
#[derive(Clone)]
pub struct Cycle<'a> {
    perm: &'a Perm,
    pos: Option<El>,
    start: El,
}

impl<'a> Iterator for Cycle<'a> {
    type Item = El;

    fn next(&mut self) -> Option<El> {
        self.pos.map(|pos| {
            let next = self.perm.left_apply(pos);
            self.pos = if next == self.start { None } else { Some(next) };

            pos
        })
    }
}

/// Iterator over the cycles of a permutation.
#[derive(Clone)]
pub struct Cycles<'a> {
    perm: &'a Perm,
    seen: Vec<bool>,
    pos: El,
}

impl<'a> Iterator for Cycles<'a> {
    type Item = Cycle<'a>;

    fn next(&mut self) -> Option<Cycle<'a>> {
        loop {
            if self.pos as usize >= self.perm.perm.len() {
                return None;
            } else if self.seen[self.pos as usize] || self.perm.left_apply(self.pos) == self.pos {
                self.pos += 1;
            } else {
                let cycle = self.perm.cycle_at(self.pos);
                for el in cycle.clone() {
                    self.seen[el as usize] = true;
                }
                self.pos += 1;
                return Some(cycle);
            }
        }
    }
}
