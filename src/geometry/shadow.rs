use crate::angle;
use crate::float_types::Real;

/// Angular wedge seen from a source vertex beyond which a closed obstacle hides
/// everything: any position whose bearing lies strictly inside `(from, to)` and that
/// is farther than `distance` from the source is occluded. The bounding rays only
/// graze the obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowArea {
    pub from: Real,
    pub to: Real,
    pub distance: Real,
}

impl ShadowArea {
    pub const fn new(from: Real, to: Real, distance: Real) -> Self {
        Self { from, to, distance }
    }

    pub fn is_valid(&self) -> bool {
        !self.from.is_nan() && !self.to.is_nan() && !self.distance.is_nan()
    }

    /// True when a position at `bearing` and `distance` from the source lies in the shadow.
    /// Bearings within the angle tolerance of either bounding ray are never covered.
    pub fn covers(&self, bearing: Real, distance: Real) -> bool {
        distance > self.distance
            && angle::is_between(self.from, bearing, self.to)
            && !angle::are_equal(self.from, bearing)
            && !angle::are_equal(bearing, self.to)
    }

    /// Clockwise width of the wedge in degrees.
    pub fn span(&self) -> Real {
        angle::difference(self.from, self.to)
    }
}
