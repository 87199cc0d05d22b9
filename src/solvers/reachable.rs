//! Reachability over the board's path-neighbor relation.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::board::graph::MazeGraph;
use crate::core::location::Location;

/// A location reached from one of several sources, back-linked by the index
/// of that source so solver paths can be reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachableNode {
    pub parent_source_index: usize,
    pub reached_location: Location,
}

/// All locations connected to `source`, in BFS discovery order.
/// The source itself comes first.
pub fn reachable_locations(graph: &MazeGraph, source: Location) -> Vec<Location> {
    let mut visited: FxHashSet<Location> = FxHashSet::default();
    let mut queue: VecDeque<Location> = VecDeque::new();
    let mut order: Vec<Location> = Vec::new();
    visited.insert(source);
    queue.push_back(source);
    while let Some(location) = queue.pop_front() {
        order.push(location);
        for neighbor in graph.neighbors(location) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    order
}

/// The union of the sources' reachability sets. Each location appears once,
/// attributed to the source that reached it first; sources are expanded in
/// order, so earlier indices win ties. The order of the result is part of
/// the solver contract.
pub fn multi_source_reachable_locations(
    graph: &MazeGraph,
    sources: &[Location],
) -> Vec<ReachableNode> {
    let mut visited: FxHashSet<Location> = FxHashSet::default();
    let mut result: Vec<ReachableNode> = Vec::new();
    let mut queue: VecDeque<Location> = VecDeque::new();
    for (parent_source_index, &source) in sources.iter().enumerate() {
        if !visited.insert(source) {
            continue;
        }
        result.push(ReachableNode {
            parent_source_index,
            reached_location: source,
        });
        queue.push_back(source);
        while let Some(location) = queue.pop_front() {
            for neighbor in graph.neighbors(location) {
                if visited.insert(neighbor) {
                    result.push(ReachableNode {
                        parent_source_index,
                        reached_location: neighbor,
                    });
                    queue.push_back(neighbor);
                }
            }
        }
    }
    result
}
