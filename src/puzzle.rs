//! Permutation puzzle definitions.
//!
//! A puzzle is a set of labelled pieces together with named moves. Each move is a permutation of
//! the pieces, given in labelled cycle notation or as a rank of the symmetric group on them.
use std::collections::HashMap;
use std::rc::Rc;

use num_bigint::BigInt;

use crate::alias::{AliasGroup, GeneratorSpec};
use crate::error::Error;
use crate::group::Group;
use crate::symmetric::SymmetricGroup;

/// A labelled permutation puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    name: String,
    labels: Vec<String>,
    generators: Vec<(String, GeneratorSpec)>,
}

impl Puzzle {
    /// A puzzle with the given piece labels and no moves yet.
    pub fn new<N, I, S>(name: N, labels: I) -> Puzzle
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Puzzle {
            name: name.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            generators: vec![],
        }
    }

    /// Add a named move.
    pub fn generator<N, S>(mut self, name: N, spec: S) -> Puzzle
    where
        N: Into<String>,
        S: Into<GeneratorSpec>,
    {
        self.generators.push((name.into(), spec.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn generators(&self) -> impl Iterator<Item = (&str, &GeneratorSpec)> {
        self.generators.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// The symmetric group on the puzzle's pieces.
    pub fn symmetric_group(&self) -> Result<SymmetricGroup, Error> {
        SymmetricGroup::with_labels(self.labels.iter().cloned())
    }

    /// Name every position reachable with the puzzle's moves.
    ///
    /// This enumerates the whole group generated by the moves, so it is only practical for
    /// puzzles with a small number of positions.
    pub fn alias_group(&self) -> Result<AliasGroup<SymmetricGroup>, Error> {
        let group = Rc::new(self.symmetric_group()?);
        AliasGroup::new(group, self.generators.iter().cloned())
    }

    /// The 3x3x2 cuboid.
    ///
    /// The pieces are the eight corners and the eight edges of the two 3x3 faces. L, R, U and D
    /// are half turns of the side layers, F is a clockwise quarter turn of the front face and B3
    /// is a counter-clockwise quarter turn of the back face.
    pub fn cuboid_332() -> Puzzle {
        let corners = "FUL FUR FDL FDR BUL BUR BDL BDR".split(' ');
        let edges = "FU FL FR FD BU BL BR BD".split(' ');
        Puzzle::new("3x3x2", corners.chain(edges))
            .generator("L", "(FDL BUL)(FL BL)(FUL BDL)")
            .generator("R", "(FDR BUR)(FR BR)(FUR BDR)")
            .generator("U", "(FUL BUR)(FU BU)(FUR BUL)")
            .generator("D", "(FDL BDR)(FD BD)(FDR BDL)")
            .generator("F", "(FUL FDL FDR FUR)(FU FL FD FR)")
            .generator("B3", "(BUL BDL BDR BUR)(BU BL BD BR)")
    }

    /// The gear cube.
    ///
    /// Besides the corners and the twelve edges the pieces are the six face centers `F`, `B`,
    /// `U`, `D`, `L`, `R` and three rings of six gear teeth, `x0`..`x5`, `y0`..`y5` and
    /// `z0`..`z5`. X, Y and Z turn the middle slice about the x, y and z axis by a sixth of a
    /// gear revolution; rx, ry and rz rotate the whole cube about the same axes. The face moves
    /// are composed from those: R is rx followed by X, L is rx<sup>3</sup> followed by X, and so
    /// on.
    pub fn gear() -> Result<Puzzle, Error> {
        let centers = "F B U D L R".split(' ');
        let teeth = (0..6)
            .map(|i| format!("x{}", i))
            .chain((0..6).map(|i| format!("y{}", i)))
            .chain((0..6).map(|i| format!("z{}", i)));
        let corners = "FUL FUR FDL FDR BUL BUR BDL BDR".split(' ');
        let edges = "fu fl fr fd bu bl br bd ul ur dl dr".split(' ');
        let labels = centers
            .map(String::from)
            .chain(teeth)
            .chain(corners.chain(edges).map(String::from));

        let puzzle = Puzzle::new("gear", labels)
            .generator(
                "X",
                "(FUL BUL BDL FDL)(FUR FDR BDR BUR)(fl ul bl dl)(fr dr br ur)\
                 (x0 x1 x2 x3 x4 x5)(y0 z0)(y1 z1)(y2 z2)(y3 z3)(y4 z4)(y5 z5)",
            )
            .generator(
                "Y",
                "(FUL FDL FDR FUR)(BUL BUR BDR BDL)(fu fl fd fr)(bu br bd bl)\
                 (y0 y1 y2 y3 y4 y5)(x0 z0)(x1 z1)(x2 z2)(x3 z3)(x4 z4)(x5 z5)",
            )
            .generator(
                "Z",
                "(FUL FUR BUR BUL)(FDR FDL BDL BDR)(fu ur bu ul)(fd dl bd dr)\
                 (z0 z1 z2 z3 z4 z5)(x0 y0)(x1 y1)(x2 y2)(x3 y3)(x4 y4)(x5 y5)",
            )
            .generator(
                "rx",
                "(F D B U)(FUL FDL BDL BUL)(FUR FDR BDR BUR)(fu fd bd bu)(ul fl dl bl)\
                 (ur fr dr br)(y0 z0)(y1 z1)(y2 z2)(y3 z3)(y4 z4)(y5 z5)",
            )
            .generator(
                "ry",
                "(L U R D)(FUL FUR FDR FDL)(BUL BUR BDR BDL)(fu fr fd fl)(bu br bd bl)\
                 (ul ur dr dl)(x0 z0)(x1 z1)(x2 z2)(x3 z3)(x4 z4)(x5 z5)",
            )
            .generator(
                "rz",
                "(F R B L)(FUL FUR BUR BUL)(FDL FDR BDR BDL)(fu ur bu ul)(fd dr bd dl)\
                 (fl fr br bl)(x0 y0)(x1 y1)(x2 y2)(x3 y3)(x4 y4)(x5 y5)",
            );

        let group = puzzle.symmetric_group()?;
        let mut moves = HashMap::new();
        for (name, spec) in puzzle.generators() {
            moves.insert(name.to_string(), spec.resolve(name, &group)?);
        }

        let faces = [
            ("R", "rx", 1, "X"),
            ("L", "rx", 3, "X"),
            ("U", "rz", 1, "Z"),
            ("D", "rz", 3, "Z"),
            ("F", "ry", 3, "Y"),
            ("B", "ry", 1, "Y"),
        ];
        let faces = faces
            .iter()
            .map(|&(name, rotation, turns, slice)| {
                let rotated = group.pow(&moves[rotation], &BigInt::from(turns));
                (name, group.mul(&rotated, &moves[slice]))
            })
            .collect::<Vec<_>>();

        Ok(faces
            .into_iter()
            .fold(puzzle, |puzzle, (name, x)| puzzle.generator(name, x)))
    }
}
