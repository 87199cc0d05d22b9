//! # labyrinth_solvers
//!
//! The AI core of a shift-and-move labyrinth board game: square tiles with
//! path openings sit on a grid, a loose *leftover* tile is inserted at a
//! border cell to shift that row or column by one, and a piece then walks
//! along connected paths toward an objective tile.
//!
//! ## Architecture
//!
//! The codebase is structured as layered components:
//!
//! - [`core`]: allocation-free primitives ([`core::location::Location`],
//!   the four-bit [`core::outpaths::OutPaths`] opening set and quarter-turn
//!   rotations).
//! - [`board`]: the [`board::graph::MazeGraph`] board model — rotation-aware
//!   connectivity, the shift mutation with wrap-around piece translation,
//!   and the programmatic/text builders.
//! - [`solvers`]: reachability plus the two searches:
//!   - **Exhaustive** ([`solvers::exhaustive`]) — breadth-first search for
//!     the shortest (shift, move) sequence of a single player.
//!   - **Minimax** ([`solvers::minimax`]) — iterative-deepening negamax for
//!     the two-player variant, scored by pluggable
//!     [`solvers::evaluators::Evaluator`]s.
//!
//! Solves are single-threaded and cooperative: a shared
//! [`solvers::SearchControl`] carries the abort flag and, for iterative
//! deepening, the (depth, terminal) status readable from other threads.
//!
//! ## Quick start
//!
//! ```
//! use labyrinth_solvers::board::builder::TextGraphBuilder;
//! use labyrinth_solvers::core::location::Location;
//! use labyrinth_solvers::solvers::exhaustive::find_best_actions;
//! use labyrinth_solvers::solvers::{SearchControl, SolverInstance};
//!
//! // A 3x3 board of north-south corridors; each cell is a 3x3 text block.
//! let maze = [
//!     "#.##.##.#", "#.##.##.#", "#.##.##.#",
//!     "#.##.##.#", "#.##.##.#", "#.##.##.#",
//!     "#.##.##.#", "#.##.##.#", "#.##.##.#",
//! ];
//! let graph = TextGraphBuilder::new(&maze)
//!     .with_standard_shift_locations()
//!     .build();
//! let instance = SolverInstance {
//!     graph,
//!     player_location: Location::new(2, 1),
//!     opponent_location: Location::NONE,
//!     objective_id: 1,
//!     previous_shift_location: Location::NONE,
//! };
//! let control = SearchControl::new();
//! let actions = find_best_actions(&instance, &control).unwrap();
//! assert_eq!(actions.len(), 1);
//! assert_eq!(actions[0].move_location, Location::new(0, 1));
//! ```

pub mod board;
pub mod core;
pub mod solvers;
