//! Obstacles: immutable coordinate chains that block line of sight.

use crate::angle;
use crate::errors::VisibilityError;
use crate::float_types::{HALF_CIRCLE, Real};
use crate::geometry::segment::{self, Orientation};
use crate::geometry::{Position, ShadowArea};
use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo::{Intersects, LineString, Polygon, Rect};

/// A simple open or closed chain of coordinates.
///
/// Consecutive duplicates are removed on construction. A chain whose first and
/// last coordinates coincide and which has at least three distinct coordinates is
/// *closed*; the closing coordinate is not stored twice and the edge back to the
/// first coordinate is implied.
#[derive(Debug, Clone)]
pub struct Obstacle {
    coordinates: Vec<Position>,
    envelope: Rect<Real>,
    closed: bool,
    polygon: Option<Polygon<Real>>,
}

impl Obstacle {
    /// Builds an obstacle, detecting closedness from the first and last coordinate.
    pub fn new<P, I>(coordinates: I) -> Result<Self, VisibilityError>
    where
        P: Into<Position>,
        I: IntoIterator<Item = P>,
    {
        let mut coordinates: Vec<Position> = coordinates.into_iter().map(Into::into).collect();
        if coordinates.is_empty() {
            return Err(VisibilityError::EmptyObstacle);
        }
        if let Some(bad) = coordinates.iter().find(|c| !c.is_finite()) {
            return Err(VisibilityError::InvalidCoordinate(*bad));
        }

        coordinates.dedup();
        let ring = coordinates.len() >= 2 && coordinates.first() == coordinates.last();
        if ring {
            coordinates.pop();
        }
        let closed = ring && coordinates.len() >= 3;

        Ok(Self::from_parts(coordinates, closed))
    }

    /// Builds an obstacle from a line string; a closed ring becomes a closed obstacle.
    pub fn from_line_string(line: &LineString<Real>) -> Result<Self, VisibilityError> {
        Self::new(line.coords().copied())
    }

    /// Builds a closed obstacle from the exterior ring of `polygon`. Holes are ignored.
    pub fn from_polygon(polygon: &Polygon<Real>) -> Result<Self, VisibilityError> {
        Self::new(polygon.exterior().coords().copied())
    }

    /// A single-coordinate obstacle. It owns one vertex but never blocks anything.
    pub fn from_point(position: Position) -> Result<Self, VisibilityError> {
        Self::new([position])
    }

    fn from_parts(coordinates: Vec<Position>, closed: bool) -> Self {
        let (mut min_x, mut min_y) = (Real::MAX, Real::MAX);
        let (mut max_x, mut max_y) = (Real::MIN, Real::MIN);
        for c in &coordinates {
            min_x = min_x.min(c.x);
            min_y = min_y.min(c.y);
            max_x = max_x.max(c.x);
            max_y = max_y.max(c.y);
        }
        let envelope = Rect::new(
            geo::Coord { x: min_x, y: min_y },
            geo::Coord { x: max_x, y: max_y },
        );
        let polygon = closed.then(|| {
            let ring: Vec<geo::Coord<Real>> = coordinates.iter().map(|c| c.to_coord()).collect();
            Polygon::new(LineString::new(ring), vec![])
        });

        Self {
            coordinates,
            envelope,
            closed,
            polygon,
        }
    }

    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    pub const fn envelope(&self) -> &Rect<Real> {
        &self.envelope
    }

    /// The polygon bounded by a closed obstacle.
    pub const fn polygon(&self) -> Option<&Polygon<Real>> {
        self.polygon.as_ref()
    }

    /// All edges in chain order, including the closing edge of a closed obstacle.
    pub fn edges(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        let closing = match (self.closed, self.coordinates.last(), self.coordinates.first()) {
            (true, Some(last), Some(first)) => Some((*last, *first)),
            _ => None,
        };
        self.coordinates
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }

    /// The coordinates before and after index `i` in chain order, wrapping when closed.
    pub fn adjacent(&self, i: usize) -> (Option<Position>, Option<Position>) {
        let n = self.coordinates.len();
        if i >= n || n < 2 {
            return (None, None);
        }
        let previous = if i > 0 {
            Some(self.coordinates[i - 1])
        } else if self.closed {
            Some(self.coordinates[n - 1])
        } else {
            None
        };
        let next = if i + 1 < n {
            Some(self.coordinates[i + 1])
        } else if self.closed {
            Some(self.coordinates[0])
        } else {
            None
        };
        (previous, next)
    }

    pub fn contains_coordinate(&self, position: &Position) -> bool {
        self.coordinates.contains(position)
    }

    /// `a` and `b` are adjacent coordinates of this obstacle, in either direction.
    pub fn has_line_segment(&self, a: Position, b: Position) -> bool {
        self.edges()
            .any(|(s, e)| (s == a && e == b) || (s == b && e == a))
    }

    /// The obstacle has an edge and its envelope intersects `rect`.
    pub fn can_intersect(&self, rect: &Rect<Real>) -> bool {
        self.coordinates.len() >= 2 && self.envelope.intersects(rect)
    }

    /// True when the segment `a..b` is blocked by this obstacle: it properly crosses
    /// an edge, passes through a vertex whose edges leave on opposite sides, or runs
    /// through the interior of a closed obstacle.
    pub fn occludes_segment(&self, a: Position, b: Position) -> bool {
        self.crosses_boundary(a, b) || self.passes_through_vertex(a, b) || self.passes_through_interior(a, b)
    }

    pub fn crosses_boundary(&self, a: Position, b: Position) -> bool {
        self.edges().any(|(s, e)| segment::do_intersect(a, b, s, e))
    }

    fn passes_through_vertex(&self, a: Position, b: Position) -> bool {
        self.coordinates.iter().enumerate().any(|(i, c)| {
            if *c == a || *c == b || !segment::is_on_segment(a, b, *c) {
                return false;
            }
            let (Some(previous), Some(next)) = self.adjacent(i) else {
                return false;
            };
            let before = segment::orientation(a, b, previous);
            let after = segment::orientation(a, b, next);
            before != Orientation::Collinear && after != Orientation::Collinear && before != after
        })
    }

    fn passes_through_interior(&self, a: Position, b: Position) -> bool {
        let Some(polygon) = &self.polygon else {
            return false;
        };
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let length_sq = dx * dx + dy * dy;
        if length_sq == 0.0 {
            return false;
        }

        // without proper crossings, the pieces between touched vertices lie entirely
        // inside or entirely outside the polygon
        let mut cuts: Vec<Real> = vec![0.0, 1.0];
        cuts.extend(
            self.coordinates
                .iter()
                .filter(|c| segment::is_on_segment(a, b, **c))
                .map(|c| ((c.x - a.x) * dx + (c.y - a.y) * dy) / length_sq),
        );
        cuts.sort_by(|l, r| l.total_cmp(r));
        cuts.dedup();

        cuts.windows(2).any(|w| {
            let t = (w[0] + w[1]) * 0.5;
            let probe = geo::Coord {
                x: a.x + dx * t,
                y: a.y + dy * t,
            };
            polygon.coordinate_position(&probe) == CoordPos::Inside
        })
    }

    /// The shadow this closed obstacle casts as seen from `source`.
    ///
    /// `None` for open obstacles and whenever the wedge is not well-formed: the
    /// source is one of the coordinates, lies on an edge or inside the polygon, or
    /// the wedge would be half a turn or wider.
    pub fn shadow_area(&self, source: &Position) -> Option<ShadowArea> {
        let polygon = self.polygon.as_ref()?;
        if self.contains_coordinate(source) || polygon.coordinate_position(&source.to_coord()) != CoordPos::Outside {
            return None;
        }

        let mut wedge: Option<(Real, Real)> = None;
        for (s, e) in self.edges() {
            if segment::is_on_segment(s, e, *source) {
                return None;
            }
            let (from, to) = angle::enclosing_angles(source.bearing_to(&s), source.bearing_to(&e));
            if from.is_nan() || to.is_nan() {
                return None;
            }
            wedge = Some(match wedge {
                None => (from, to),
                Some((wedge_from, wedge_to)) => angle::merge(wedge_from, wedge_to, from, to)?,
            });
        }

        let (from, to) = wedge?;
        let distance = self
            .coordinates
            .iter()
            .map(|c| source.distance(c))
            .fold(0.0, Real::max);
        let shadow = ShadowArea::new(from, to, distance);
        (shadow.is_valid() && shadow.span() < HALF_CIRCLE).then_some(shadow)
    }
}
