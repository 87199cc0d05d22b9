use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use labyrinth_solvers::board::graph::{
    opposing_shift_location, translate_location_by_shift, MazeGraph, Node,
};
use labyrinth_solvers::core::location::Location;
use labyrinth_solvers::core::outpaths::{OutPaths, RotationDegree};

/// A 5x5 board with varied openings and orientations. Inserting overwrites
/// the leftover's orientation, so callers align it with the rotation they
/// are about to shift with.
fn board_5x5(leftover_rotation: RotationDegree) -> MazeGraph {
    let mut nodes: Vec<Node> = (0..25u16)
        .map(|id| Node {
            node_id: id,
            out_paths: OutPaths::from_raw((id % 15 + 1) as u8),
            rotation: RotationDegree::from_quarter_turns(id as u8),
        })
        .collect();
    nodes.push(Node {
        node_id: 25,
        out_paths: OutPaths::NORTH | OutPaths::EAST,
        rotation: leftover_rotation,
    });
    MazeGraph::from_nodes(nodes)
}

#[test]
fn opposing_shift_restores_the_board() {
    let original = board_5x5(RotationDegree::D90);
    let mut graph = original.clone();
    graph.shift(Location::new(0, 1), RotationDegree::D90);
    let pushed_out_rotation = graph.leftover().rotation;
    graph.shift(Location::new(4, 1), pushed_out_rotation);
    assert_eq!(graph, original);
}

#[test]
fn random_shifts_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let rotation = RotationDegree::from_quarter_turns(rng.gen_range(0..4));
        let mut nodes: Vec<Node> = (0..50u16)
            .map(|id| Node {
                node_id: id,
                out_paths: OutPaths::from_raw(rng.gen_range(0..16)),
                rotation: RotationDegree::from_quarter_turns(rng.gen_range(0..4)),
            })
            .collect();
        nodes[49].rotation = rotation;
        let original = MazeGraph::from_nodes(nodes);

        let in_line_position = [1i16, 3, 5][rng.gen_range(0..3)];
        let shift_location = match rng.gen_range(0..4) {
            0 => Location::new(0, in_line_position),
            1 => Location::new(6, in_line_position),
            2 => Location::new(in_line_position, 0),
            _ => Location::new(in_line_position, 6),
        };

        let mut graph = original.clone();
        graph.shift(shift_location, rotation);
        let pushed_out_rotation = graph.leftover().rotation;
        graph.shift(
            opposing_shift_location(shift_location, 7),
            pushed_out_rotation,
        );
        assert_eq!(graph, original);
    }
}

#[test]
fn pieces_on_the_shifted_line_advance_and_wrap() {
    // Inserting at (0,1) pushes column 1 downward.
    assert_eq!(
        translate_location_by_shift(Location::new(0, 1), Location::new(0, 1), 5),
        Location::new(1, 1)
    );
    assert_eq!(
        translate_location_by_shift(Location::new(4, 1), Location::new(0, 1), 5),
        Location::new(0, 1)
    );
    // Inserting at (4,1) pushes column 1 upward.
    assert_eq!(
        translate_location_by_shift(Location::new(4, 1), Location::new(4, 1), 5),
        Location::new(3, 1)
    );
    assert_eq!(
        translate_location_by_shift(Location::new(0, 1), Location::new(4, 1), 5),
        Location::new(4, 1)
    );
    // Pieces off the shifted line stay put.
    assert_eq!(
        translate_location_by_shift(Location::new(2, 2), Location::new(0, 1), 5),
        Location::new(2, 2)
    );
    // Row shifts wrap along the column axis.
    assert_eq!(
        translate_location_by_shift(Location::new(1, 4), Location::new(1, 0), 5),
        Location::new(1, 0)
    );
}
