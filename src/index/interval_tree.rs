//! Exact circular interval index.
//!
//! Intervals live on the circle `[0, 360]`. A wrapping interval (`from > to`) is
//! stored as the two pieces `[from, 360]` and `[0, to]`, so the backing R*-tree only
//! ever holds ordinary one-dimensional ranges. Each piece is a degenerate box on
//! the `y = 0` line, which lets `rstar` answer overlap queries exactly.

use crate::angle;
use crate::errors::VisibilityError;
use crate::float_types::{FULL_CIRCLE, Real};
use hashbrown::HashSet;
use rstar::{AABB, RTree, RTreeObject};

/// Handle returned by [`CircularIntervalTree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntervalId(usize);

/// A stored interval with its normalized bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularInterval<T> {
    pub id: IntervalId,
    pub from: Real,
    pub to: Real,
    pub value: T,
}

impl<T> CircularInterval<T> {
    pub fn wraps(&self) -> bool {
        self.from > self.to
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Piece {
    from: Real,
    to: Real,
    id: IntervalId,
}

impl RTreeObject for Piece {
    type Envelope = AABB<[Real; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.from, 0.0], [self.to, 0.0])
    }
}

fn pieces(from: Real, to: Real, id: IntervalId) -> [Option<Piece>; 2] {
    if from > to {
        [
            Some(Piece { from, to: FULL_CIRCLE, id }),
            Some(Piece { from: 0.0, to, id }),
        ]
    } else {
        [Some(Piece { from, to, id }), None]
    }
}

#[derive(Clone)]
pub struct CircularIntervalTree<T> {
    tree: RTree<Piece>,
    intervals: Vec<Option<CircularInterval<T>>>,
    live: usize,
}

impl<T> Default for CircularIntervalTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularIntervalTree<T> {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            intervals: Vec::new(),
            live: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.live
    }

    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Inserts the clockwise interval `[from, to]`. Both bounds are normalized into
    /// `[0, 360]`; `from > to` afterwards means the interval wraps through north.
    pub fn insert(&mut self, from: Real, to: Real, value: T) -> Result<IntervalId, VisibilityError> {
        if from.is_nan() {
            return Err(VisibilityError::NotANumber("from"));
        }
        if to.is_nan() {
            return Err(VisibilityError::NotANumber("to"));
        }
        let (from, to) = (angle::normalize(from), angle::normalize(to));
        let id = IntervalId(self.intervals.len());
        for piece in pieces(from, to, id).into_iter().flatten() {
            self.tree.insert(piece);
        }
        self.intervals.push(Some(CircularInterval { id, from, to, value }));
        self.live += 1;
        Ok(id)
    }

    pub fn get(&self, id: IntervalId) -> Option<&CircularInterval<T>> {
        self.intervals.get(id.0).and_then(Option::as_ref)
    }

    /// Removes an interval, returning its value.
    pub fn remove(&mut self, id: IntervalId) -> Option<T> {
        let interval = self.intervals.get_mut(id.0)?.take()?;
        for piece in pieces(interval.from, interval.to, id).into_iter().flatten() {
            self.tree.remove(&piece);
        }
        self.live -= 1;
        Some(interval.value)
    }

    /// Intervals containing the direction `at`. `360` and `0` are the same direction.
    pub fn query(&self, at: Real) -> Result<Vec<&CircularInterval<T>>, VisibilityError> {
        self.query_range(at, at)
    }

    /// Intervals overlapping the clockwise range `[from, to]`, in insertion order.
    /// A range spanning a full turn or more (`to - from >= 360`) covers the circle.
    pub fn query_range(&self, from: Real, to: Real) -> Result<Vec<&CircularInterval<T>>, VisibilityError> {
        if from.is_nan() {
            return Err(VisibilityError::NotANumber("from"));
        }
        if to.is_nan() {
            return Err(VisibilityError::NotANumber("to"));
        }
        let full_turn = to - from >= FULL_CIRCLE;
        let (from, to) = (angle::strict_normalize(from), angle::strict_normalize(to));

        let mut windows = vec![];
        if full_turn {
            windows.push((0.0, FULL_CIRCLE));
        } else if from > to {
            windows.push((from, FULL_CIRCLE));
            windows.push((0.0, to));
        } else {
            windows.push((from, to));
            if from == 0.0 {
                // pieces ending on the full turn also touch north
                windows.push((FULL_CIRCLE, FULL_CIRCLE));
            }
        }

        let mut ids: HashSet<IntervalId> = HashSet::new();
        for (lo, hi) in windows {
            let envelope = AABB::from_corners([lo, 0.0], [hi, 0.0]);
            ids.extend(
                self.tree
                    .locate_in_envelope_intersecting(&envelope)
                    .map(|piece| piece.id),
            );
        }

        let mut ids: Vec<IntervalId> = ids.into_iter().collect();
        ids.sort_unstable();
        Ok(ids.into_iter().filter_map(|id| self.get(id)).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CircularInterval<T>> {
        self.intervals.iter().flatten()
    }
}
