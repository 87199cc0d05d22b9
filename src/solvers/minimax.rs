//! Depth-limited negamax with iterative deepening for the two-player game.
//!
//! The recursion works on a single board: each candidate shift is applied in
//! place, candidate rotations are tried by overwriting just the inserted
//! tile's orientation, and the shift is undone by shifting at the opposing
//! location with the rotation that was pushed out. Child nodes swap the
//! player roles, so the evaluator always scores from the viewpoint of the
//! player about to move.

use crate::board::graph::{opposing_shift_location, translate_location_by_shift, MazeGraph};
use crate::core::location::Location;
use crate::core::outpaths::RotationDegree;
use crate::solvers::evaluators::{Evaluation, Evaluator};
use crate::solvers::reachable::reachable_locations;
use crate::solvers::{
    distinct_rotations, PlayerAction, SearchControl, ShiftAction, SolverError, SolverInstance,
    ERROR_PLAYER_ACTION,
};

/// Strictly larger than any non-terminal evaluator value.
pub const INFINITY: Evaluation = Evaluation::new(10000);

/// A view of one game-tree node. The acting player is `player_location`;
/// the roles swap at every ply.
#[derive(Debug, Clone, Copy)]
pub struct GameTreeNode<'g> {
    pub graph: &'g MazeGraph,
    pub player_location: Location,
    pub opponent_location: Location,
    pub previous_shift_location: Location,
}

/// Best action found for the acting player, with its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxResult {
    pub player_action: PlayerAction,
    pub evaluation: Evaluation,
}

/// Encapsulates one negamax run; keeps the depth-0 best action between
/// consecutive runs so iterative deepening can reuse the runner.
struct MinimaxRunner<'e> {
    evaluator: &'e dyn Evaluator,
    max_depth: usize,
    best_action: PlayerAction,
}

impl<'e> MinimaxRunner<'e> {
    fn new(evaluator: &'e dyn Evaluator, max_depth: usize) -> MinimaxRunner<'e> {
        MinimaxRunner {
            evaluator,
            max_depth,
            best_action: ERROR_PLAYER_ACTION,
        }
    }

    fn run(&mut self, instance: &SolverInstance, control: &SearchControl) -> MinimaxResult {
        let mut graph = instance.graph.clone();
        let evaluation = self.negamax(
            &mut graph,
            instance.player_location,
            instance.opponent_location,
            instance.previous_shift_location,
            0,
            control,
        );
        MinimaxResult {
            player_action: self.best_action,
            evaluation,
        }
    }

    fn negamax(
        &mut self,
        graph: &mut MazeGraph,
        player_location: Location,
        opponent_location: Location,
        previous_shift_location: Location,
        depth: usize,
        control: &SearchControl,
    ) -> Evaluation {
        let evaluation = self.evaluator.evaluate(&GameTreeNode {
            graph,
            player_location,
            opponent_location,
            previous_shift_location,
        });
        if depth == self.max_depth || evaluation.is_terminal {
            return evaluation;
        }
        let extent = graph.extent();
        let invalid_shift_location = opposing_shift_location(previous_shift_location, extent);
        let entry_leftover_rotation = graph.leftover().rotation;
        let shift_locations: Vec<Location> = graph.shift_locations().to_vec();
        let mut best_value = -INFINITY;
        for shift_location in shift_locations {
            if shift_location == invalid_shift_location {
                continue;
            }
            graph.shift(shift_location, RotationDegree::D0);
            let pushed_out_rotation = graph.leftover().rotation;
            let shifted_player =
                translate_location_by_shift(player_location, shift_location, extent);
            let shifted_opponent =
                translate_location_by_shift(opponent_location, shift_location, extent);
            let rotations = distinct_rotations(graph.node(shift_location).out_paths);
            let mut aborted = false;
            for &rotation in rotations {
                graph.node_mut(shift_location).rotation = rotation;
                for move_location in reachable_locations(graph, shifted_player) {
                    let value = -self.negamax(
                        graph,
                        shifted_opponent,
                        move_location,
                        shift_location,
                        depth + 1,
                        control,
                    );
                    if value.value > best_value.value {
                        best_value = value;
                        if depth == 0 {
                            self.best_action = PlayerAction {
                                shift: ShiftAction {
                                    location: shift_location,
                                    rotation,
                                },
                                move_location,
                            };
                        }
                    }
                    if control.is_aborted() {
                        aborted = true;
                        break;
                    }
                }
                if aborted {
                    break;
                }
            }
            graph.shift(
                opposing_shift_location(shift_location, extent),
                pushed_out_rotation,
            );
            if aborted {
                break;
            }
        }
        // The rotation loop left the old leftover re-oriented; put it back so
        // the board is byte-identical to the state at entry.
        graph.leftover_mut().rotation = entry_leftover_rotation;
        best_value
    }
}

fn validate_two_player(instance: &SolverInstance) -> Result<(), SolverError> {
    instance.validate()?;
    if !instance.graph.is_inside(instance.opponent_location) {
        return Err(SolverError::InvalidInstance {
            reason: format!(
                "opponent location {} is outside the board",
                instance.opponent_location
            ),
        });
    }
    Ok(())
}

/// One negamax run at a fixed depth.
pub fn find_best_action(
    instance: &SolverInstance,
    evaluator: &dyn Evaluator,
    max_depth: usize,
    control: &SearchControl,
) -> Result<MinimaxResult, SolverError> {
    validate_two_player(instance)?;
    control.reset();
    let mut runner = MinimaxRunner::new(evaluator, max_depth);
    Ok(runner.run(instance, control))
}

/// Runs negamax with increasing depths until the stored result is terminal
/// or the control is aborted, publishing (depth, terminal) after each
/// completed depth.
///
/// An abort during depth 1 still accepts that depth's best-so-far action, so
/// the caller always gets a move once any child was examined. With an
/// evaluator that never reports terminal positions, this only returns after
/// an abort.
pub fn iterate_minimax(
    instance: &SolverInstance,
    evaluator: &dyn Evaluator,
    control: &SearchControl,
) -> Result<PlayerAction, SolverError> {
    validate_two_player(instance)?;
    control.reset();
    let mut result = MinimaxResult {
        player_action: ERROR_PLAYER_ACTION,
        evaluation: -INFINITY,
    };
    let mut runner = MinimaxRunner::new(evaluator, 0);
    let mut max_depth = 0;
    loop {
        max_depth += 1;
        runner.max_depth = max_depth;
        let new_result = runner.run(instance, control);
        if !control.is_aborted() || max_depth == 1 {
            result = new_result;
        }
        control.publish_status(max_depth, result.evaluation.is_terminal);
        if result.evaluation.is_terminal || control.is_aborted() {
            return Ok(result.player_action);
        }
    }
}
