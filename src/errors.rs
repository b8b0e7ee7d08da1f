//! Errors raised while building indices, obstacles and visibility graphs

use crate::float_types::Real;
use crate::geometry::Position;

/// All the possible failures we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VisibilityError {
    /// (KeyOutOfRange) A key lies outside the domain of an index
    #[error("(KeyOutOfRange) Key {name} = {key} is outside of [{min}, {max}]")]
    KeyOutOfRange {
        name: &'static str,
        key: Real,
        min: Real,
        max: Real,
    },
    /// (InvertedRange) A linear index received `from > to`
    #[error("(InvertedRange) Range [{from}, {to}] is inverted on a linear index")]
    InvertedRange { from: Real, to: Real },
    /// (InvalidBinSize) The bin size is zero, negative, NaN or too small for the domain
    #[error("(InvalidBinSize) Bin size {0} must be a positive number giving a bounded bucket count")]
    InvalidBinSize(Real),
    /// (InvalidDomain) The key domain of an index is empty
    #[error("(InvalidDomain) Domain [{min}, {max}] is empty")]
    InvalidDomain { min: Real, max: Real },
    /// (NotANumber) A bound handed to an index is NaN
    #[error("(NotANumber) {0} must not be NaN")]
    NotANumber(&'static str),
    /// (EmptyObstacle) An obstacle was built from no coordinates
    #[error("(EmptyObstacle) An obstacle needs at least one coordinate")]
    EmptyObstacle,
    /// (InvalidCoordinate) The coordinate has a NaN or infinite component
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite component")]
    InvalidCoordinate(Position),
    /// (InvalidConfig) A generation parameter is out of range
    #[error("(InvalidConfig) {0}")]
    InvalidConfig(String),
}
