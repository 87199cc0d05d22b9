//! Position evaluators for the minimax solver.
//!
//! An [`Evaluator`] scores a game-tree node from the viewpoint of the player
//! about to move. `is_terminal` may be set only for true end-of-game
//! positions; the search relies on it to cut off and to stop deepening.

use std::ops::Neg;

use serde::{Deserialize, Serialize};

use crate::board::graph::NodeId;
use crate::solvers::minimax::GameTreeNode;
use crate::solvers::reachable::reachable_locations;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub value: i32,
    pub is_terminal: bool,
}

impl Evaluation {
    #[inline]
    pub const fn new(value: i32) -> Evaluation {
        Evaluation {
            value,
            is_terminal: false,
        }
    }

    #[inline]
    pub const fn terminal(value: i32) -> Evaluation {
        Evaluation {
            value,
            is_terminal: true,
        }
    }
}

impl Neg for Evaluation {
    type Output = Evaluation;

    #[inline]
    fn neg(self) -> Evaluation {
        Evaluation {
            value: -self.value,
            is_terminal: self.is_terminal,
        }
    }
}

/// Capability scoring a node's (graph, player, opponent) triple.
///
/// Implementations must be referentially transparent on that triple.
pub trait Evaluator {
    fn evaluate(&self, node: &GameTreeNode<'_>) -> Evaluation;
}

/// Detects finished games: the opponent made the last move and now stands on
/// the objective tile. Everything else scores zero.
#[derive(Debug, Clone, Copy)]
pub struct WinEvaluator {
    objective_id: NodeId,
}

impl WinEvaluator {
    pub fn new(objective_id: NodeId) -> WinEvaluator {
        WinEvaluator { objective_id }
    }
}

impl Evaluator for WinEvaluator {
    fn evaluate(&self, node: &GameTreeNode<'_>) -> Evaluation {
        if node.graph.node(node.opponent_location).node_id == self.objective_id {
            Evaluation::terminal(-1)
        } else {
            Evaluation::new(0)
        }
    }
}

/// Heuristic: how much more of the board the player to move can reach than
/// the opponent. Never terminal; antisymmetric under swapping the players.
#[derive(Debug, Clone, Copy)]
pub struct ReachableLocationsEvaluator;

impl Evaluator for ReachableLocationsEvaluator {
    fn evaluate(&self, node: &GameTreeNode<'_>) -> Evaluation {
        let player = reachable_locations(node.graph, node.player_location).len() as i32;
        let opponent = reachable_locations(node.graph, node.opponent_location).len() as i32;
        Evaluation::new(player - opponent)
    }
}
