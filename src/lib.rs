//! Permutation groups with ranked elements
//!
//! This crate represents the elements of finite groups as single arbitrary-precision integers,
//! called ranks, in the range `0..order`. The identity is always rank 0. Groups are stateless
//! functions over ranks: the symmetric group of degree 16 has more than 2×10<sup>13</sup>
//! elements, so nothing is ever tabulated.
//!
//! For the symmetric and alternating groups a rank decodes to a permutation array and back in
//! O(n) arithmetic operations (see [`codec`]). Elements are read and written in cycle notation
//! or a compact matrix notation (see [`notation`]). An [`AliasGroup`](alias::AliasGroup) puts
//! short names like `R2` or `LU` on everything reachable from a set of named generators.
//!
pub mod action;
pub mod alias;
pub mod codec;
pub mod cyclic;
pub mod dihedral;
pub mod error;
pub mod group;
pub mod notation;
pub mod perm;
pub mod puzzle;
pub mod symmetric;
pub mod util;

pub use crate::alias::{AliasGroup, GeneratorSpec};
pub use crate::cyclic::CyclicGroup;
pub use crate::dihedral::DihedralGroup;
pub use crate::error::Error;
pub use crate::group::Group;
pub use crate::perm::Perm;
pub use crate::puzzle::Puzzle;
pub use crate::symmetric::{AlternatingGroup, SymmetricGroup};

/// Set element.
///
/// Elements permuted by a [`Perm`] are represented by non-negative integers (`u32`).
pub type El = u32;

/// Group element rank.
///
/// A rank identifies an element of a group and is always below the group's order.
pub type Rank = num_bigint::BigUint;
