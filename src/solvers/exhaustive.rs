//! Exhaustive breadth-first search for the shortest shift-and-move plan.
//!
//! The search expands a tree of game states. Each state is reached from its
//! parent by one shift action and carries the set of locations the player can
//! then occupy. Reached locations remember the index of their source in the
//! parent state, so once a state holds the objective the full action sequence
//! falls out of walking the parent links.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::board::graph::{opposing_shift_location, translate_location_by_shift, MazeGraph};
use crate::core::location::Location;
use crate::core::outpaths::RotationDegree;
use crate::solvers::reachable::{multi_source_reachable_locations, ReachableNode};
use crate::solvers::{
    distinct_rotations, PlayerAction, SearchControl, ShiftAction, SolverError, SolverInstance,
};

struct GameStateNode {
    parent: Option<Rc<GameStateNode>>,
    shift: ShiftAction,
    reached_nodes: Vec<ReachableNode>,
}

/// Rebuilds the board a state describes by replaying its shift history onto
/// the base graph, root first.
fn create_graph_from_state(base_graph: &MazeGraph, state: &Rc<GameStateNode>) -> MazeGraph {
    let mut shifts: Vec<ShiftAction> = Vec::new();
    let mut current = state;
    while let Some(parent) = &current.parent {
        shifts.push(current.shift);
        current = parent;
    }
    let mut graph = base_graph.clone();
    for shift in shifts.iter().rev() {
        graph.shift(shift.location, shift.rotation);
    }
    graph
}

fn reconstruct_actions(state: &Rc<GameStateNode>, reachable_index: usize) -> Vec<PlayerAction> {
    let mut actions: Vec<PlayerAction> = Vec::new();
    let mut current = state;
    let mut index = reachable_index;
    while let Some(parent) = &current.parent {
        let reached = current.reached_nodes[index];
        actions.push(PlayerAction {
            shift: current.shift,
            move_location: reached.reached_location,
        });
        index = reached.parent_source_index;
        current = parent;
    }
    actions.reverse();
    actions
}

/// The shortest action sequence bringing the player onto the objective tile,
/// measured in shift actions. Empty if the state space is exhausted without
/// a solution or the control is aborted first.
///
/// A player already standing on the objective still gets a one-action plan:
/// the game rules require a shift per turn, so the root state is never
/// goal-tested.
pub fn find_best_actions(
    instance: &SolverInstance,
    control: &SearchControl,
) -> Result<Vec<PlayerAction>, SolverError> {
    instance.validate()?;
    control.reset();
    let objective_id = instance.objective_id;
    let mut state_queue: VecDeque<Rc<GameStateNode>> = VecDeque::new();
    state_queue.push_back(Rc::new(GameStateNode {
        parent: None,
        shift: ShiftAction {
            location: instance.previous_shift_location,
            rotation: RotationDegree::D0,
        },
        reached_nodes: vec![ReachableNode {
            parent_source_index: 0,
            reached_location: instance.player_location,
        }],
    }));
    while let Some(current_state) = state_queue.pop_front() {
        if control.is_aborted() {
            break;
        }
        let current_graph = create_graph_from_state(&instance.graph, &current_state);
        let extent = current_graph.extent();
        let invalid_shift_location =
            opposing_shift_location(current_state.shift.location, extent);
        let rotations = distinct_rotations(current_graph.leftover().out_paths);
        for &shift_location in current_graph.shift_locations() {
            if shift_location == invalid_shift_location {
                continue;
            }
            for &rotation in rotations {
                let shift = ShiftAction {
                    location: shift_location,
                    rotation,
                };
                let mut shifted_graph = current_graph.clone();
                shifted_graph.shift(shift.location, shift.rotation);
                let sources: Vec<Location> = current_state
                    .reached_nodes
                    .iter()
                    .map(|reached| {
                        translate_location_by_shift(
                            reached.reached_location,
                            shift_location,
                            extent,
                        )
                    })
                    .collect();
                let reached_nodes = multi_source_reachable_locations(&shifted_graph, &sources);
                let new_state = Rc::new(GameStateNode {
                    parent: Some(Rc::clone(&current_state)),
                    shift,
                    reached_nodes,
                });
                let found_objective = new_state.reached_nodes.iter().position(|reached| {
                    shifted_graph.node(reached.reached_location).node_id == objective_id
                });
                if let Some(reachable_index) = found_objective {
                    return Ok(reconstruct_actions(&new_state, reachable_index));
                }
                state_queue.push_back(new_state);
            }
        }
    }
    Ok(Vec::new())
}
