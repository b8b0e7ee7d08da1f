mod support;

use geo::{LineString, Polygon, polygon};
use hvgraph::float_types::Real;
use hvgraph::index::ObstacleIndex;
use hvgraph::{Obstacle, VisibilityError};
use support::{approx_eq, polyline, pos, square};

fn triangle() -> Obstacle {
    Obstacle::new([(1.0, 1.0), (2.0, 1.0), (1.0, 2.0), (1.0, 1.0)]).unwrap()
}

#[test]
fn construction_detects_closed_rings() {
    let closed = triangle();
    assert!(closed.is_closed());
    assert_eq!(closed.len(), 3);
    assert!(closed.polygon().is_some());

    let open = polyline(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    assert!(!open.is_closed());
    assert!(open.polygon().is_none());

    // a ring needs three distinct coordinates
    let back_and_forth = polyline(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]);
    assert!(!back_and_forth.is_closed());
    assert_eq!(back_and_forth.len(), 2);
}

#[test]
fn construction_from_geo_types() {
    let poly: Polygon<Real> = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)];
    let obstacle = Obstacle::from_polygon(&poly).unwrap();
    assert!(obstacle.is_closed());
    assert_eq!(obstacle.len(), 4);

    let line: LineString<Real> = vec![(0.0, 0.0), (3.0, 0.0)].into();
    let obstacle = Obstacle::from_line_string(&line).unwrap();
    assert!(!obstacle.is_closed());
    assert_eq!(obstacle.coordinates(), &[pos(0.0, 0.0), pos(3.0, 0.0)]);

    let point = Obstacle::from_point(pos(5.0, 5.0)).unwrap();
    assert_eq!(point.len(), 1);
    assert_eq!(point.edges().count(), 0);
}

#[test]
fn construction_rejects_bad_input() {
    let empty: [(Real, Real); 0] = [];
    assert!(matches!(Obstacle::new(empty), Err(VisibilityError::EmptyObstacle)));
    assert!(matches!(
        Obstacle::new([(0.0, 0.0), (Real::NAN, 1.0)]),
        Err(VisibilityError::InvalidCoordinate(_))
    ));
    assert!(matches!(
        Obstacle::new([(0.0, 0.0), (Real::INFINITY, 1.0)]),
        Err(VisibilityError::InvalidCoordinate(_))
    ));
}

#[test]
fn envelope_and_candidate_test() {
    let obstacle = square(2.0, 3.0, 1.0);
    assert_eq!(obstacle.envelope().min(), geo::coord! { x: 2.0, y: 3.0 });
    assert_eq!(obstacle.envelope().max(), geo::coord! { x: 3.0, y: 4.0 });

    let near = geo::Rect::new(geo::coord! { x: 0.0, y: 0.0 }, geo::coord! { x: 2.5, y: 3.5 });
    let far = geo::Rect::new(geo::coord! { x: 0.0, y: 0.0 }, geo::coord! { x: 1.0, y: 1.0 });
    assert!(obstacle.can_intersect(&near));
    assert!(!obstacle.can_intersect(&far));

    let point = Obstacle::from_point(pos(1.0, 1.0)).unwrap();
    assert!(!point.can_intersect(&near));
}

#[test]
fn shadow_of_triangle_seen_from_origin() {
    let shadow = triangle().shadow_area(&pos(0.0, 0.0)).unwrap();
    assert!(approx_eq(shadow.from, 26.565051, 1e-5));
    assert!(approx_eq(shadow.to, 63.434949, 1e-5));
    assert!(approx_eq(shadow.distance, 5.0_f64.sqrt() as Real, 1e-9));

    // behind the triangle
    assert!(shadow.covers(45.0, 3.0));
    // in front of it
    assert!(!shadow.covers(45.0, 1.0));
    // beside it
    assert!(!shadow.covers(80.0, 3.0));
}

#[test]
fn shadow_of_triangle_wraps_north() {
    let shadow = triangle().shadow_area(&pos(1.5, 0.0)).unwrap();
    assert!(approx_eq(shadow.from, 333.434949, 1e-5));
    assert!(approx_eq(shadow.to, 26.565051, 1e-5));
    // farthest coordinate is the top corner
    assert!(approx_eq(shadow.distance, pos(1.5, 0.0).distance(&pos(1.0, 2.0)), 1e-9));
    assert!(approx_eq(shadow.span(), 53.130102, 1e-5));

    assert!(shadow.covers(0.0, 5.0));
    assert!(shadow.covers(350.0, 5.0));
    assert!(!shadow.covers(90.0, 5.0));
}

#[test]
fn no_shadow_when_source_touches_obstacle() {
    let obstacle = triangle();
    // own coordinate
    assert!(obstacle.shadow_area(&pos(1.0, 1.0)).is_none());
    // on an edge
    assert!(obstacle.shadow_area(&pos(1.5, 1.0)).is_none());
    // inside
    assert!(obstacle.shadow_area(&pos(1.2, 1.2)).is_none());
}

#[test]
fn no_shadow_from_open_chains() {
    let wall = polyline(&[(0.0, 1.0), (1.0, 1.0), (2.0, 1.0)]);
    assert!(wall.shadow_area(&pos(1.0, 0.0)).is_none());
    let point = Obstacle::from_point(pos(3.0, 3.0)).unwrap();
    assert!(point.shadow_area(&pos(0.0, 0.0)).is_none());
}

#[test]
fn segment_crossing_square_is_occluded() {
    let obstacle = square(0.0, 0.0, 1.0);
    assert!(obstacle.occludes_segment(pos(-1.0, 0.5), pos(2.0, 0.5)));
    assert!(obstacle.crosses_boundary(pos(-1.0, 0.5), pos(2.0, 0.5)));
    assert!(!obstacle.occludes_segment(pos(-1.0, -1.0), pos(2.0, -1.0)));
}

#[test]
fn grazing_segments_are_not_occluded() {
    let obstacle = square(0.0, 0.0, 1.0);
    // along the extension of a side
    assert!(!obstacle.occludes_segment(pos(-1.0, 0.0), pos(2.0, 0.0)));
    // touching a corner from outside
    assert!(!obstacle.occludes_segment(pos(-1.0, 1.0), pos(1.0, -1.0)));
    // ending on a corner
    assert!(!obstacle.occludes_segment(pos(-3.0, -2.0), pos(0.0, 0.0)));
}

#[test]
fn segment_through_open_chain_vertex() {
    // the chain continues on both sides of the line of sight
    let straight = polyline(&[(0.0, 1.0), (0.0, 0.0), (0.0, -1.0)]);
    assert!(straight.occludes_segment(pos(-1.0, 0.0), pos(1.0, 0.0)));
    assert!(!straight.crosses_boundary(pos(-1.0, 0.0), pos(1.0, 0.0)));

    // both edges leave on the same side
    let v = polyline(&[(-1.0, 1.0), (0.0, 0.0), (1.0, 1.0)]);
    assert!(!v.occludes_segment(pos(-1.0, 0.0), pos(1.0, 0.0)));
}

#[test]
fn diagonal_between_corners_runs_through_interior() {
    let obstacle = square(0.0, 0.0, 2.0);
    assert!(obstacle.occludes_segment(pos(0.0, 0.0), pos(2.0, 2.0)));
    assert!(obstacle.occludes_segment(pos(2.0, 0.0), pos(0.0, 2.0)));
    assert!(!obstacle.occludes_segment(pos(0.0, 0.0), pos(2.0, 0.0)));
}

#[test]
fn shared_sides_of_closed_obstacles_are_hidden() {
    let index: ObstacleIndex = [square(0.0, 0.0, 1.0), square(1.0, 0.0, 1.0)].into_iter().collect();
    assert!(index.is_shared_closed_edge(0, pos(1.0, 0.0), pos(1.0, 1.0)));
    assert!(index.edge_hidden(0, pos(1.0, 1.0), pos(1.0, 0.0)));
    assert!(!index.edge_hidden(0, pos(0.0, 0.0), pos(1.0, 0.0)));

    // a shared side blocks travel along it, an unshared one does not
    assert!(index.segment_blocked_by(0, pos(1.0, 0.0), pos(1.0, 1.0)));
    assert!(!index.segment_blocked_by(0, pos(0.0, 0.0), pos(0.0, 1.0)));
}

#[test]
fn open_edge_inside_closed_obstacle_is_hidden() {
    let index: ObstacleIndex = [square(0.0, 0.0, 4.0), polyline(&[(1.0, 1.0), (3.0, 3.0)])]
        .into_iter()
        .collect();
    assert!(index.edge_hidden(1, pos(1.0, 1.0), pos(3.0, 3.0)));
    assert_eq!(index.obstacles_at(&pos(1.0, 1.0)), &[1]);
    assert!(index.obstacles_at(&pos(9.0, 9.0)).is_empty());
}
