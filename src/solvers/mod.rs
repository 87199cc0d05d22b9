//! Solvers over the labyrinth board.
//!
//! - [`reachable`]: single- and multi-source reachability.
//! - [`exhaustive`]: breadth-first search for the shortest shift-and-move
//!   plan of a single player.
//! - [`minimax`]: iterative-deepening negamax for the two-player variant.
//! - [`evaluators`]: position scoring capabilities for the minimax solver.
//!
//! Both solvers consume a [`SolverInstance`] and a [`SearchControl`]. The
//! control is the only cross-thread surface: a caller may share it (e.g.
//! behind an `Arc`) with a watchdog that calls [`SearchControl::abort`] while
//! the solve runs on another thread.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::board::graph::{MazeGraph, NodeId};
use crate::core::location::Location;
use crate::core::outpaths::{OutPaths, RotationDegree};

pub mod evaluators;
pub mod exhaustive;
pub mod minimax;
pub mod reachable;

/// Insertion of the leftover at a border location, rotated before insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAction {
    pub location: Location,
    pub rotation: RotationDegree,
}

/// One full turn: a shift followed by a move along connected paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAction {
    pub shift: ShiftAction,
    pub move_location: Location,
}

/// Well-known "no action found" value.
pub const ERROR_PLAYER_ACTION: PlayerAction = PlayerAction {
    shift: ShiftAction {
        location: Location::NONE,
        rotation: RotationDegree::D0,
    },
    move_location: Location::NONE,
};

/// Everything a solver needs to know about the position to solve.
#[derive(Debug, Clone)]
pub struct SolverInstance {
    pub graph: MazeGraph,
    pub player_location: Location,
    /// Only meaningful for the minimax solver; `Location::NONE` otherwise.
    pub opponent_location: Location,
    pub objective_id: NodeId,
    /// Shift whose opposing shift is forbidden this turn, or `Location::NONE`.
    pub previous_shift_location: Location,
}

impl SolverInstance {
    /// Refuses instances the solvers would otherwise turn into undefined
    /// behavior: off-board players, unknown objectives, non-border shift
    /// locations.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.graph.is_inside(self.player_location) {
            return Err(SolverError::InvalidInstance {
                reason: format!("player location {} is outside the board", self.player_location),
            });
        }
        if self.objective_id as usize >= self.graph.number_of_nodes() {
            return Err(SolverError::InvalidInstance {
                reason: format!("objective id {} does not name a node", self.objective_id),
            });
        }
        if self.previous_shift_location != Location::NONE
            && !self
                .graph
                .shift_locations()
                .contains(&self.previous_shift_location)
        {
            return Err(SolverError::InvalidInstance {
                reason: format!(
                    "previous shift location {} is not a shift location of the board",
                    self.previous_shift_location
                ),
            });
        }
        let border = self.graph.extent() - 1;
        for &location in self.graph.shift_locations() {
            let on_border = location.row == 0
                || location.column == 0
                || location.row == border
                || location.column == border;
            if !self.graph.is_inside(location) || !on_border {
                return Err(SolverError::InvalidInstance {
                    reason: format!("shift location {location} is not on the border"),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum SolverError {
    InvalidInstance { reason: String },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InvalidInstance { reason } => {
                write!(f, "invalid solver instance: {reason}")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Snapshot of an iterative-deepening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatus {
    pub current_depth: usize,
    pub terminal: bool,
}

/// Cooperative control shared between one running solve and its caller.
///
/// The abort flag is monotonic per solve: a solve entry re-arms it, only the
/// caller sets it afterwards. The deepening status is packed into a single
/// word so a concurrent reader never observes a torn (depth, terminal) pair.
#[derive(Debug, Default)]
pub struct SearchControl {
    aborted: AtomicBool,
    status: AtomicU64,
}

impl SearchControl {
    pub fn new() -> SearchControl {
        SearchControl::default()
    }

    /// Signals the solve using this control to stop at its next yield point.
    pub fn abort(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Relaxed)
    }

    pub fn status(&self) -> SearchStatus {
        let packed = self.status.load(Ordering::Relaxed);
        SearchStatus {
            current_depth: (packed >> 1) as usize,
            terminal: packed & 1 != 0,
        }
    }

    pub(crate) fn reset(&self) {
        self.aborted.store(false, Ordering::Relaxed);
        self.status.store(0, Ordering::Relaxed);
    }

    pub(crate) fn publish_status(&self, current_depth: usize, terminal: bool) {
        let packed = (current_depth as u64) << 1 | terminal as u64;
        self.status.store(packed, Ordering::Relaxed);
    }
}

/// The rotations producing distinct boards when inserting a tile with these
/// openings: straight tiles repeat after a half turn, every other shape needs
/// all four.
pub(crate) fn distinct_rotations(out_paths: OutPaths) -> &'static [RotationDegree] {
    const HALF_TURN: [RotationDegree; 2] = [RotationDegree::D0, RotationDegree::D90];
    const FULL_TURN: [RotationDegree; 4] = RotationDegree::ALL;
    let north_south = OutPaths::NORTH | OutPaths::SOUTH;
    let east_west = OutPaths::EAST | OutPaths::WEST;
    if out_paths == north_south || out_paths == east_west {
        &HALF_TURN
    } else {
        &FULL_TURN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_tiles_need_only_two_rotations() {
        assert_eq!(
            distinct_rotations(OutPaths::NORTH | OutPaths::SOUTH).len(),
            2
        );
        assert_eq!(distinct_rotations(OutPaths::EAST | OutPaths::WEST).len(), 2);
        let corner = OutPaths::NORTH | OutPaths::EAST;
        assert_eq!(distinct_rotations(corner).len(), 4);
        let junction = OutPaths::NORTH | OutPaths::EAST | OutPaths::SOUTH;
        assert_eq!(distinct_rotations(junction).len(), 4);
    }

    #[test]
    fn status_packs_depth_and_terminal() {
        let control = SearchControl::new();
        assert_eq!(
            control.status(),
            SearchStatus {
                current_depth: 0,
                terminal: false
            }
        );
        control.publish_status(3, true);
        assert_eq!(
            control.status(),
            SearchStatus {
                current_depth: 3,
                terminal: true
            }
        );
    }
}
