use crate::angle;
use crate::float_types::Real;
use nalgebra::Point2;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable planar coordinate.
///
/// Equality is exact coordinate equality (so `-0.0 == 0.0`), and hashing agrees
/// with it, which makes a `Position` usable as a map key for vertex deduplication.
#[derive(Debug, Clone, Copy, Default)]
pub struct Position {
    pub x: Real,
    pub y: Real,
}

impl Position {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Position) -> Real {
        nalgebra::distance(&self.to_point(), &other.to_point())
    }

    /// Bearing from this position to `other`, clockwise from north in `[0, 360)`.
    pub fn bearing_to(&self, other: &Position) -> Real {
        angle::bearing(self.x, self.y, other.x, other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_point(self) -> Point2<Real> {
        Point2::new(self.x, self.y)
    }

    pub const fn to_coord(self) -> geo::Coord<Real> {
        geo::Coord { x: self.x, y: self.y }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // fold -0.0 onto 0.0 so equal positions hash alike
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Point2<Real>> for Position {
    fn from(point: Point2<Real>) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<Position> for Point2<Real> {
    fn from(position: Position) -> Self {
        position.to_point()
    }
}

impl From<geo::Coord<Real>> for Position {
    fn from(coord: geo::Coord<Real>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<Position> for geo::Coord<Real> {
    fn from(position: Position) -> Self {
        position.to_coord()
    }
}

impl From<(Real, Real)> for Position {
    fn from((x, y): (Real, Real)) -> Self {
        Self::new(x, y)
    }
}

impl From<[Real; 2]> for Position {
    fn from([x, y]: [Real; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for [Real; 2] {
    fn from(position: Position) -> Self {
        [position.x, position.y]
    }
}
