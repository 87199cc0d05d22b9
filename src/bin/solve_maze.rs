use std::fs;
use std::process::exit;

use labyrinth_solvers::board::builder::TextGraphBuilder;
use labyrinth_solvers::core::location::Location;
use labyrinth_solvers::solvers::exhaustive::find_best_actions;
use labyrinth_solvers::solvers::{SearchControl, SolverInstance};

const USAGE: &str = "Usage: solve_maze <maze-file> <player-row> <player-column> <objective-id>

The maze file renders each cell as a 3x3 character block: corners '#',
mid-edge '.' where the cell opens to that side. Prints the shortest
shift-and-move plan as JSON.";

fn parse_or_usage<T: std::str::FromStr>(argument: &str) -> T {
    argument.parse().unwrap_or_else(|_| {
        eprintln!("Cannot parse argument '{argument}'.\n\n{USAGE}");
        exit(2);
    })
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        eprintln!("{USAGE}");
        exit(2);
    }

    let text = fs::read_to_string(&args[1]).unwrap_or_else(|error| {
        eprintln!("Cannot read maze file '{}': {error}", args[1]);
        exit(2);
    });
    let lines: Vec<&str> = text.lines().collect();
    let graph = TextGraphBuilder::new(&lines)
        .with_standard_shift_locations()
        .build();

    let instance = SolverInstance {
        graph,
        player_location: Location::new(parse_or_usage(&args[2]), parse_or_usage(&args[3])),
        opponent_location: Location::NONE,
        objective_id: parse_or_usage(&args[4]),
        previous_shift_location: Location::NONE,
    };

    let control = SearchControl::new();
    match find_best_actions(&instance, &control) {
        Ok(actions) => {
            if actions.is_empty() {
                eprintln!("No solution.");
                exit(1);
            }
            println!("{}", serde_json::to_string_pretty(&actions).unwrap());
        }
        Err(error) => {
            eprintln!("{error}");
            exit(2);
        }
    }
}
