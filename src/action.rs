//! Group actions.
//!
//! Permutations act on set elements and on each other. Composition in the permutation groups is
//! phrased in terms of these actions so the direction of a product is spelled out at each use.

/// Left action on `T`.
///
/// Elements of implementing types act on `T` values on the left.
pub trait LeftAction<T> {
    /// Act on a value on the left.
    fn left_apply(&self, mut value: T) -> T {
        self.left_apply_to(&mut value);
        value
    }

    /// Act on a value, in place, on the left.
    fn left_apply_to(&self, value: &mut T);
}

/// Right action on `T`.
///
/// Elements of implementing types act on `T` values on the right.
pub trait RightAction<T> {
    /// Act on a value on the right.
    fn right_apply(&self, mut value: T) -> T {
        self.right_apply_to(&mut value);
        value
    }

    /// Act on a value, in place, on the right.
    fn right_apply_to(&self, value: &mut T);
}
