//! Exact segment predicates on raw coordinates.
//!
//! Visibility relies on *proper* crossings: two segments that merely touch
//! (a shared endpoint, or an endpoint lying on the other segment) do not block
//! each other.

use crate::geometry::Position;
use nalgebra::Vector2;

/// Turn direction of the path `p0 -> p1 -> p2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

pub fn orientation(p0: Position, p1: Position, p2: Position) -> Orientation {
    let a = Vector2::new(p1.x - p0.x, p1.y - p0.y);
    let b = Vector2::new(p2.x - p0.x, p2.y - p0.y);
    let cross = a.perp(&b);
    if cross > 0.0 {
        Orientation::CounterClockwise
    } else if cross < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// `p` lies on the closed segment `start..end`.
pub fn is_on_segment(start: Position, end: Position, p: Position) -> bool {
    on_segment_with(start, end, p, orientation(start, end, p))
}

fn on_segment_with(start: Position, end: Position, p: Position, orient: Orientation) -> bool {
    orient == Orientation::Collinear
        && start.x.min(end.x) <= p.x
        && p.x <= start.x.max(end.x)
        && start.y.min(end.y) <= p.y
        && p.y <= start.y.max(end.y)
}

fn disjoint_boxes(s1: Position, e1: Position, s2: Position, e2: Position) -> bool {
    s1.x.max(e1.x) < s2.x.min(e2.x)
        || s1.x.min(e1.x) > s2.x.max(e2.x)
        || s1.y.max(e1.y) < s2.y.min(e2.y)
        || s1.y.min(e1.y) > s2.y.max(e2.y)
}

fn shares_endpoint(s1: Position, e1: Position, s2: Position, e2: Position) -> bool {
    s1 == s2 || e1 == e2 || s1 == e2 || e1 == s2
}

struct Orientations([Orientation; 4]);

impl Orientations {
    fn of(s1: Position, e1: Position, s2: Position, e2: Position) -> Self {
        Self([
            orientation(s2, e2, s1),
            orientation(s2, e2, e1),
            orientation(s1, e1, s2),
            orientation(s1, e1, e2),
        ])
    }

    fn touching(&self, s1: Position, e1: Position, s2: Position, e2: Position) -> bool {
        let [o1, o2, o3, o4] = self.0;
        on_segment_with(s2, e2, s1, o1)
            || on_segment_with(s2, e2, e1, o2)
            || on_segment_with(s1, e1, s2, o3)
            || on_segment_with(s1, e1, e2, o4)
    }

    fn straddle(&self) -> bool {
        let [o1, o2, o3, o4] = self.0;
        o1 != o2 && o3 != o4
    }
}

/// Proper crossing of `s1..e1` and `s2..e2`; touching is not a crossing.
pub fn do_intersect(s1: Position, e1: Position, s2: Position, e2: Position) -> bool {
    if disjoint_boxes(s1, e1, s2, e2) || shares_endpoint(s1, e1, s2, e2) {
        return false;
    }
    let orientations = Orientations::of(s1, e1, s2, e2);
    orientations.straddle() && !orientations.touching(s1, e1, s2, e2)
}
