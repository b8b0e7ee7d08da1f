use hvgraph::VisibilityError;
use hvgraph::float_types::Real;
use hvgraph::index::CircularIntervalTree;

fn values<'a>(found: &[&hvgraph::index::CircularInterval<&'a str>]) -> Vec<&'a str> {
    found.iter().map(|interval| interval.value).collect()
}

#[test]
fn wrapping_interval_contains_north() {
    let mut tree = CircularIntervalTree::new();
    let id = tree.insert(350.0, 30.0, "wedge").unwrap();
    assert!(tree.get(id).unwrap().wraps());

    assert_eq!(values(&tree.query(360.0).unwrap()), ["wedge"]);
    assert_eq!(values(&tree.query(0.0).unwrap()), ["wedge"]);
    assert_eq!(values(&tree.query(20.0).unwrap()), ["wedge"]);
    assert_eq!(values(&tree.query(355.0).unwrap()), ["wedge"]);
    assert!(tree.query(31.0).unwrap().is_empty());
    assert!(tree.query(349.0).unwrap().is_empty());
}

#[test]
fn interval_ending_on_full_turn_touches_north() {
    let mut tree = CircularIntervalTree::new();
    let west = tree.insert(300.0, 360.0, "west").unwrap();
    tree.insert(0.0, 10.0, "east").unwrap();

    assert!(!tree.get(west).unwrap().wraps());
    assert_eq!(values(&tree.query(0.0).unwrap()), ["west", "east"]);
    assert_eq!(values(&tree.query(360.0).unwrap()), ["west", "east"]);
    assert_eq!(values(&tree.query(5.0).unwrap()), ["east"]);
}

#[test]
fn bounds_are_normalized() {
    let mut tree = CircularIntervalTree::new();
    let id = tree.insert(-20.0, 380.0, ()).unwrap();
    let interval = tree.get(id).unwrap();
    assert_eq!((interval.from, interval.to), (340.0, 20.0));
    assert_eq!(tree.query(10.0).unwrap().len(), 1);
    assert!(tree.query(180.0).unwrap().is_empty());
}

#[test]
fn range_query_returns_insertion_order() {
    let mut tree = CircularIntervalTree::new();
    tree.insert(200.0, 220.0, "c").unwrap();
    tree.insert(10.0, 40.0, "a").unwrap();
    tree.insert(340.0, 5.0, "b").unwrap();
    tree.insert(100.0, 120.0, "d").unwrap();

    assert_eq!(values(&tree.query_range(330.0, 15.0).unwrap()), ["a", "b"]);
    assert_eq!(values(&tree.query_range(210.0, 20.0).unwrap()), ["c", "a", "b"]);
    assert_eq!(values(&tree.query_range(40.0, 100.0).unwrap()), ["a", "d"]);
    assert!(tree.query_range(130.0, 190.0).unwrap().is_empty());
}

#[test]
fn full_turn_range_covers_circle() {
    let mut tree = CircularIntervalTree::new();
    tree.insert(100.0, 200.0, "south").unwrap();
    tree.insert(350.0, 10.0, "north").unwrap();
    tree.insert(300.0, 360.0, "west").unwrap();

    assert_eq!(values(&tree.query_range(0.0, 360.0).unwrap()), ["south", "north", "west"]);
    assert_eq!(values(&tree.query_range(90.0, 450.0).unwrap()), ["south", "north", "west"]);
    assert_eq!(values(&tree.query_range(-360.0, 720.0).unwrap()), ["south", "north", "west"]);
    // a single direction is not a full turn
    assert_eq!(values(&tree.query_range(360.0, 360.0).unwrap()), ["north", "west"]);
    assert_eq!(values(&tree.query_range(150.0, 150.0).unwrap()), ["south"]);
}

#[test]
fn removed_intervals_stop_matching() {
    let mut tree = CircularIntervalTree::new();
    let wrap = tree.insert(350.0, 30.0, 1).unwrap();
    let plain = tree.insert(0.0, 90.0, 2).unwrap();
    assert_eq!(tree.len(), 2);

    assert_eq!(tree.remove(wrap), Some(1));
    assert_eq!(tree.remove(wrap), None);
    assert_eq!(tree.len(), 1);
    assert!(tree.get(wrap).is_none());

    let found: Vec<i32> = tree.query(10.0).unwrap().iter().map(|i| i.value).collect();
    assert_eq!(found, [2]);
    assert!(tree.query(355.0).unwrap().is_empty());

    assert_eq!(tree.remove(plain), Some(2));
    assert!(tree.is_empty());
    assert_eq!(tree.iter().count(), 0);
}

#[test]
fn nan_bounds_are_rejected() {
    let mut tree: CircularIntervalTree<()> = CircularIntervalTree::default();
    assert!(matches!(
        tree.insert(Real::NAN, 10.0, ()),
        Err(VisibilityError::NotANumber("from"))
    ));
    assert!(matches!(
        tree.insert(10.0, Real::NAN, ()),
        Err(VisibilityError::NotANumber("to"))
    ));
    assert!(matches!(tree.query(Real::NAN), Err(VisibilityError::NotANumber(_))));
    assert!(tree.is_empty());
}
