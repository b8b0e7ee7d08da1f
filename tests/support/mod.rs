//! Test support library
//! Provides obstacle builders & comparison helpers for tests.

use hvgraph::{Obstacle, Position, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Closed axis-aligned square with its lower left corner at `(x, y)`.
pub fn square(x: Real, y: Real, size: Real) -> Obstacle {
    Obstacle::new([
        (x, y),
        (x + size, y),
        (x + size, y + size),
        (x, y + size),
        (x, y),
    ])
    .unwrap()
}

/// Open chain through `points`.
pub fn polyline(points: &[(Real, Real)]) -> Obstacle {
    Obstacle::new(points.iter().copied()).unwrap()
}

pub fn pos(x: Real, y: Real) -> Position {
    Position::new(x, y)
}

/// Sorts positions so unordered neighbor sets can be compared.
pub fn sorted(mut positions: Vec<Position>) -> Vec<Position> {
    positions.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    positions
}
