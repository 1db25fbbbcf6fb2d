//! Lattice graph with erodable edges.
//!
//! ## Edge Layout
//!
//! An N×N grid has `2·N·(N−1)` unit edges. Ids are assigned once at
//! construction and never change:
//! - `0..N·(N−1)`: horizontal edges, row by row (`y` outer, `x` inner)
//! - `N·(N−1)..`: vertical edges, column by column (`x` outer, `y` inner)
//!
//! Only the `active` flag of an edge ever changes, and only from active to
//! inactive. The edge list is an `im::Vector`, so cloning a graph for a
//! snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, IndexPicker, Position};

/// Stable edge identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

impl EdgeId {
    /// Get the raw index into the edge list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Edge({})", self.0)
    }
}

/// An unordered unit edge between two lattice-adjacent cells.
///
/// `a` is always the smaller endpoint (left or upper cell).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub a: Position,
    pub b: Position,
    pub active: bool,
}

impl Edge {
    /// Does this edge connect `p` and `q` (in either order)?
    #[must_use]
    pub fn joins(&self, p: Position, q: Position) -> bool {
        (self.a == p && self.b == q) || (self.a == q && self.b == p)
    }

    /// Neither endpoint lies on the outer border of a `size`×`size` grid.
    #[must_use]
    pub fn is_interior(&self, size: i32) -> bool {
        let inner = |p: Position| p.x > 0 && p.x < size - 1 && p.y > 0 && p.y < size - 1;
        inner(self.a) && inner(self.b)
    }
}

/// N×N lattice with per-edge activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGraph {
    size: i32,
    edges: Vector<Edge>,
    active_count: usize,
}

impl GridGraph {
    /// Build the full lattice with every edge active.
    ///
    /// A `size` below 1 produces an empty graph with no cells.
    #[must_use]
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        let mut edges = Vector::new();
        let mut next_id = 0u32;

        let mut push = |a: Position, b: Position| {
            edges.push_back(Edge {
                id: EdgeId(next_id),
                a,
                b,
                active: true,
            });
            next_id += 1;
        };

        // Horizontal edges
        for y in 0..size {
            for x in 0..size - 1 {
                push(Position::new(x, y), Position::new(x + 1, y));
            }
        }

        // Vertical edges
        for x in 0..size {
            for y in 0..size - 1 {
                push(Position::new(x, y), Position::new(x, y + 1));
            }
        }

        let active_count = edges.len();
        Self {
            size,
            edges,
            active_count,
        }
    }

    /// Lattice width and height.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Is `pos` inside the grid?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }

    /// Every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Position::new(x, y)))
    }

    /// The four lattice corners.
    #[must_use]
    pub fn corners(&self) -> [Position; 4] {
        let last = self.size - 1;
        [
            Position::new(0, 0),
            Position::new(0, last),
            Position::new(last, 0),
            Position::new(last, last),
        ]
    }

    /// Is `pos` one of the four corners?
    #[must_use]
    pub fn is_corner(&self, pos: Position) -> bool {
        let last = self.size - 1;
        (pos.x == 0 || pos.x == last) && (pos.y == 0 || pos.y == last)
    }

    // === Edges ===

    /// All edges, active or not, in id order.
    #[must_use]
    pub fn edges(&self) -> &Vector<Edge> {
        &self.edges
    }

    /// Look up an edge by id.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Total number of edges (active or not).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges still active.
    #[must_use]
    pub fn active_edge_count(&self) -> usize {
        self.active_count
    }

    /// Id of the edge between two cells, if they are in range and adjacent.
    #[must_use]
    pub fn edge_between(&self, p: Position, q: Position) -> Option<EdgeId> {
        if !self.contains(p) || !self.contains(q) || p.manhattan(q) != 1 {
            return None;
        }

        let span = self.size - 1;
        let lo = p.min(q);
        let raw = if p.y == q.y {
            lo.y * span + lo.x
        } else {
            self.size * span + lo.x * span + lo.y
        };
        Some(EdgeId(raw as u32))
    }

    /// True iff an edge between `p` and `q` exists and is active.
    #[must_use]
    pub fn is_adjacent_via_active_edge(&self, p: Position, q: Position) -> bool {
        self.edge_between(p, q)
            .and_then(|id| self.edge(id))
            .is_some_and(|e| e.active)
    }

    // === Neighbors ===

    /// Moves available from `pos`: each direction with an active edge,
    /// in `Direction::ALL` order.
    #[must_use]
    pub fn moves(&self, pos: Position) -> SmallVec<[(Direction, Position); 4]> {
        Direction::ALL
            .into_iter()
            .map(|d| (d, pos.step(d)))
            .filter(|&(_, next)| self.is_adjacent_via_active_edge(pos, next))
            .collect()
    }

    /// Cells reachable from `pos` in one step, in `Direction::ALL` order.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> SmallVec<[Position; 4]> {
        self.moves(pos).into_iter().map(|(_, next)| next).collect()
    }

    /// Number of active edges at `pos`.
    #[must_use]
    pub fn degree(&self, pos: Position) -> usize {
        self.moves(pos).len()
    }

    // === Erosion ===

    /// Deactivate an edge. Returns true if it was active.
    pub fn deactivate(&mut self, id: EdgeId) -> bool {
        match self.edges.get_mut(id.index()) {
            Some(edge) if edge.active => {
                edge.active = false;
                self.active_count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Deactivate the edge between two cells. Returns true if it was active.
    pub fn deactivate_between(&mut self, p: Position, q: Position) -> bool {
        match self.edge_between(p, q) {
            Some(id) => self.deactivate(id),
            None => false,
        }
    }

    /// Deactivate every edge touching `pos`. Returns how many were active.
    pub fn isolate(&mut self, pos: Position) -> usize {
        let incident: SmallVec<[Position; 4]> = self.neighbors(pos);
        incident
            .into_iter()
            .filter(|&n| self.deactivate_between(pos, n))
            .count()
    }

    /// Deactivate up to `count` active interior edges, chosen uniformly
    /// without replacement.
    ///
    /// Returns the number removed, which is lower than `count` only when the
    /// grid runs out of interior edges.
    pub fn remove_interior_edges<P: IndexPicker + ?Sized>(
        &mut self,
        count: usize,
        picker: &mut P,
    ) -> usize {
        let mut candidates: Vec<EdgeId> = self
            .edges
            .iter()
            .filter(|e| e.active && e.is_interior(self.size))
            .map(|e| e.id)
            .collect();

        let mut removed = 0;
        while removed < count && !candidates.is_empty() {
            let idx = pick_clamped(picker, candidates.len());
            let id = candidates.remove(idx);
            if self.deactivate(id) {
                removed += 1;
            }
        }
        removed
    }

    /// Deactivate one active edge chosen uniformly among those for which
    /// `exclude` returns false.
    ///
    /// Returns the removed edge, or `None` when no edge is eligible.
    pub fn remove_random_active_edge<P, F>(&mut self, picker: &mut P, exclude: F) -> Option<EdgeId>
    where
        P: IndexPicker + ?Sized,
        F: Fn(&Edge) -> bool,
    {
        let eligible: Vec<EdgeId> = self
            .edges
            .iter()
            .filter(|e| e.active && !exclude(*e))
            .map(|e| e.id)
            .collect();

        if eligible.is_empty() {
            return None;
        }

        let id = eligible[pick_clamped(picker, eligible.len())];
        self.deactivate(id);
        Some(id)
    }
}

fn pick_clamped<P: IndexPicker + ?Sized>(picker: &mut P, len: usize) -> usize {
    picker.pick_index(len).min(len - 1)
}
