use labyrinth_solvers::board::builder::TextGraphBuilder;
use labyrinth_solvers::board::graph::MazeGraph;
use labyrinth_solvers::core::location::Location;
use labyrinth_solvers::core::outpaths::RotationDegree;
use labyrinth_solvers::solvers::exhaustive::find_best_actions;
use labyrinth_solvers::solvers::{SearchControl, SolverInstance};

/// Nine north-south straights: every column is a corridor.
fn corridor_board() -> MazeGraph {
    let maze = ["#.##.##.#"; 9];
    TextGraphBuilder::new(&maze)
        .with_standard_shift_locations()
        .build()
}

#[test]
fn straight_corridor_needs_a_single_turn() {
    let instance = SolverInstance {
        graph: corridor_board(),
        player_location: Location::new(2, 1),
        opponent_location: Location::NONE,
        objective_id: 1,
        previous_shift_location: Location::NONE,
    };
    let control = SearchControl::new();
    let actions = find_best_actions(&instance, &control).unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].move_location, Location::new(0, 1));
    // The first enumerated shift that leaves the column-1 corridor intact.
    assert_eq!(actions[0].shift.location, Location::new(1, 0));
    assert_eq!(actions[0].shift.rotation, RotationDegree::D0);
}

#[test]
fn opposing_of_previous_shift_is_never_played() {
    let instance = SolverInstance {
        graph: corridor_board(),
        player_location: Location::new(2, 1),
        opponent_location: Location::NONE,
        objective_id: 1,
        // Forbids (1,0), the shift the unconstrained search would pick.
        previous_shift_location: Location::new(1, 2),
    };
    let control = SearchControl::new();
    let actions = find_best_actions(&instance, &control).unwrap();
    assert_eq!(actions.len(), 1);
    assert_ne!(actions[0].shift.location, Location::new(1, 0));
    assert_eq!(actions[0].shift.location, Location::new(1, 2));
    assert_eq!(actions[0].move_location, Location::new(0, 1));
}

#[test]
fn player_on_objective_still_shifts_once() {
    // The rules demand a shift per turn, so even a player standing on the
    // objective gets a one-action plan.
    let instance = SolverInstance {
        graph: corridor_board(),
        player_location: Location::new(0, 1),
        opponent_location: Location::NONE,
        objective_id: 1,
        previous_shift_location: Location::NONE,
    };
    let control = SearchControl::new();
    let actions = find_best_actions(&instance, &control).unwrap();
    assert_eq!(actions.len(), 1);
    // The first shift drags both the player and the objective tile to (1,1).
    assert_eq!(actions[0].shift.location, Location::new(0, 1));
    assert_eq!(actions[0].shift.rotation, RotationDegree::D0);
    assert_eq!(actions[0].move_location, Location::new(1, 1));
}

#[test]
fn invalid_instances_are_refused() {
    let graph = corridor_board();
    let off_board = SolverInstance {
        graph: graph.clone(),
        player_location: Location::new(3, 1),
        opponent_location: Location::NONE,
        objective_id: 1,
        previous_shift_location: Location::NONE,
    };
    let control = SearchControl::new();
    assert!(find_best_actions(&off_board, &control).is_err());

    let bad_previous_shift = SolverInstance {
        graph,
        player_location: Location::new(2, 1),
        opponent_location: Location::NONE,
        objective_id: 1,
        previous_shift_location: Location::new(1, 1),
    };
    assert!(find_best_actions(&bad_previous_shift, &control).is_err());
}
