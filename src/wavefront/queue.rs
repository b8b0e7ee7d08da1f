use crate::graph::VertexId;
use crate::wavefront::VertexEvent;
use hashbrown::HashSet;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-queue of wavefront events.
///
/// [`pop_unsettled`](EventQueue::pop_unsettled) settles vertices as they come out,
/// so each vertex is returned once, with its smallest arrival distance.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<VertexEvent>>,
    settled: HashSet<VertexId>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: VertexEvent) {
        self.heap.push(Reverse(event));
    }

    /// The nearest event, settled or not.
    pub fn pop(&mut self) -> Option<VertexEvent> {
        self.heap.pop().map(|Reverse(event)| event)
    }

    pub fn peek(&self) -> Option<&VertexEvent> {
        self.heap.peek().map(|Reverse(event)| event)
    }

    /// The nearest event for a vertex not settled yet; settles that vertex.
    pub fn pop_unsettled(&mut self) -> Option<VertexEvent> {
        while let Some(Reverse(event)) = self.heap.pop() {
            if self.settled.insert(event.vertex) {
                return Some(event);
            }
        }
        None
    }

    pub fn is_settled(&self, vertex: VertexId) -> bool {
        self.settled.contains(&vertex)
    }

    pub fn settled_count(&self) -> usize {
        self.settled.len()
    }

    /// Pending events, including stale ones for settled vertices.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
