//! Breadth-first path search over active edges.
//!
//! Searches run from scratch on every call; nothing is cached across edge
//! removals. Neighbors are expanded in `Direction::ALL` order, so among
//! equal-length paths the same one is always returned.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use super::grid::GridGraph;
use crate::core::{Direction, Position};

/// A shortest path, `start` and `end` inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<Position>,
}

impl Path {
    /// Cells on the path, in order from start to end.
    #[must_use]
    pub fn nodes(&self) -> &[Position] {
        &self.nodes
    }

    /// Number of cells on the path (steps + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a path holds at least its start.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of steps (edges) on the path.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.nodes[0]
    }

    #[must_use]
    pub fn end(&self) -> Position {
        self.nodes[self.nodes.len() - 1]
    }

    /// Direction from the end cell back toward the cell before it.
    ///
    /// `None` for a single-cell path.
    #[must_use]
    pub fn direction_back_from_end(&self) -> Option<Direction> {
        match self.nodes.as_slice() {
            [.., before, end] => end.direction_to(*before),
            _ => None,
        }
    }
}

/// Shortest path from `start` to `end` over active edges.
///
/// Returns `None` when `end` is unreachable or either endpoint lies outside
/// the grid. A path from a cell to itself has one node.
#[must_use]
pub fn shortest_path(graph: &GridGraph, start: Position, end: Position) -> Option<Path> {
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }
    if start == end {
        return Some(Path { nodes: vec![start] });
    }

    // Parent of every discovered cell; the start maps to itself.
    let mut parents: FxHashMap<Position, Position> = FxHashMap::default();
    parents.insert(start, start);

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in graph.neighbors(current) {
            if parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, current);

            if next == end {
                return Some(Path {
                    nodes: unwind(&parents, start, end),
                });
            }
            queue.push_back(next);
        }
    }

    None
}

/// Is `end` reachable from `start` over active edges?
#[must_use]
pub fn reachable(graph: &GridGraph, start: Position, end: Position) -> bool {
    shortest_path(graph, start, end).is_some()
}

fn unwind(parents: &FxHashMap<Position, Position>, start: Position, end: Position) -> Vec<Position> {
    let mut nodes = vec![end];
    let mut cursor = end;
    while cursor != start {
        cursor = parents[&cursor];
        nodes.push(cursor);
    }
    nodes.reverse();
    nodes
}
