//! Construction errors.
//!
//! Parsing element notation never produces these: a string that does not name an element is
//! simply rejected with `None`. Errors are reserved for building groups and name tables.
use thiserror::Error;

use crate::Rank;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("expected {expected} labels, got {actual}")]
    LabelCount { expected: usize, actual: usize },
    #[error("label {0:?} is used more than once")]
    DuplicateLabel(String),
    #[error("label {0:?} is empty or contains whitespace, brackets or parentheses")]
    InvalidLabel(String),
    #[error("generator {name:?} does not name an element: {spec}")]
    UnresolvedGenerator { name: String, spec: String },
    #[error("generator {name:?} has rank {rank}, but the group has order {order}")]
    GeneratorOutOfRange { name: String, rank: Rank, order: Rank },
    #[error("generator name {0:?} is used more than once")]
    DuplicateGenerator(String),
    #[error("generator name {0:?} is reserved for the identity")]
    ReservedName(String),
    #[error("generator name {0:?} already names a different element of the parent group")]
    ShadowedName(String),
    #[error("generator names must not be empty")]
    EmptyGeneratorName,
}
