//! Builders turning out-path descriptions into [`MazeGraph`]s.
//!
//! [`GraphBuilder`] is the programmatic variant used by tests and by input
//! parsers; [`TextGraphBuilder`] parses a maze drawn as 3x3 character blocks.

use crate::board::graph::{ExtentType, MazeGraph};
use crate::core::location::Location;
use crate::core::outpaths::OutPaths;

/// Accumulates per-cell openings and constructs the board.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    extent: ExtentType,
    out_paths: Vec<OutPaths>,
    leftover_out_paths: OutPaths,
    standard_shift_locations: bool,
}

impl GraphBuilder {
    pub fn new(extent: ExtentType) -> GraphBuilder {
        GraphBuilder {
            extent,
            out_paths: vec![OutPaths::NONE; extent as usize * extent as usize],
            leftover_out_paths: OutPaths::NONE,
            standard_shift_locations: false,
        }
    }

    /// Adds openings to the cell at `location`.
    pub fn add_out_paths(&mut self, location: Location, out_paths: OutPaths) {
        let index = location.row as usize * self.extent as usize + location.column as usize;
        self.out_paths[index] = self.out_paths[index] | out_paths;
    }

    /// Places insertion locations at every border cell with an odd in-line
    /// index. Requires an odd extent of at least 3.
    pub fn with_standard_shift_locations(mut self) -> GraphBuilder {
        assert!(
            self.extent >= 3 && self.extent % 2 == 1,
            "standard shift locations need an odd extent of at least 3"
        );
        self.standard_shift_locations = true;
        self
    }

    pub fn with_leftover_out_paths(mut self, out_paths: OutPaths) -> GraphBuilder {
        self.leftover_out_paths = self.leftover_out_paths | out_paths;
        self
    }

    pub fn build(&self) -> MazeGraph {
        let mut graph = MazeGraph::new(self.extent);
        for row in 0..self.extent {
            for column in 0..self.extent {
                let location = Location::new(row, column);
                let index = row as usize * self.extent as usize + column as usize;
                graph.set_out_paths(location, self.out_paths[index]);
            }
        }
        graph.set_leftover_out_paths(self.leftover_out_paths);
        if self.standard_shift_locations {
            let border = self.extent - 1;
            for position in (1..self.extent).step_by(2) {
                graph.add_shift_location(Location::new(0, position));
                graph.add_shift_location(Location::new(border, position));
                graph.add_shift_location(Location::new(position, 0));
                graph.add_shift_location(Location::new(position, border));
            }
        }
        graph
    }
}

/// Parses a maze drawn as one 3x3 character block per cell.
///
/// Cell `(r, c)` occupies text rows `3r..3r+2` and columns `3c..3c+2`;
/// a `.` at a mid-edge character marks an opening on that side.
#[derive(Debug, Clone)]
pub struct TextGraphBuilder {
    lines: Vec<String>,
    leftover_out_paths: OutPaths,
    standard_shift_locations: bool,
}

const LINES_PER_NODE: usize = 3;

impl TextGraphBuilder {
    pub fn new(lines: &[&str]) -> TextGraphBuilder {
        TextGraphBuilder {
            lines: lines.iter().map(|line| (*line).to_string()).collect(),
            leftover_out_paths: OutPaths::NONE,
            standard_shift_locations: false,
        }
    }

    pub fn with_standard_shift_locations(mut self) -> TextGraphBuilder {
        self.standard_shift_locations = true;
        self
    }

    pub fn with_leftover_out_paths(mut self, out_paths: OutPaths) -> TextGraphBuilder {
        self.leftover_out_paths = self.leftover_out_paths | out_paths;
        self
    }

    pub fn build(&self) -> MazeGraph {
        let extent = (self.lines.len() / LINES_PER_NODE) as ExtentType;
        let mut builder = GraphBuilder::new(extent);
        if self.standard_shift_locations {
            builder = builder.with_standard_shift_locations();
        }
        builder = builder.with_leftover_out_paths(self.leftover_out_paths);
        for row in 0..extent as usize {
            for column in 0..extent as usize {
                let location = Location::new(row as i16, column as i16);
                if self.is_open(row * 3, column * 3 + 1) {
                    builder.add_out_paths(location, OutPaths::NORTH);
                }
                if self.is_open(row * 3 + 1, column * 3 + 2) {
                    builder.add_out_paths(location, OutPaths::EAST);
                }
                if self.is_open(row * 3 + 2, column * 3 + 1) {
                    builder.add_out_paths(location, OutPaths::SOUTH);
                }
                if self.is_open(row * 3 + 1, column * 3) {
                    builder.add_out_paths(location, OutPaths::WEST);
                }
            }
        }
        builder.build()
    }

    fn is_open(&self, text_row: usize, text_column: usize) -> bool {
        self.lines[text_row].as_bytes().get(text_column) == Some(&b'.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::outpaths::OutPaths;

    #[test]
    fn standard_shift_locations_in_builder_order() {
        let graph = GraphBuilder::new(3).with_standard_shift_locations().build();
        assert_eq!(
            graph.shift_locations(),
            &[
                Location::new(0, 1),
                Location::new(2, 1),
                Location::new(1, 0),
                Location::new(1, 2),
            ]
        );
    }

    #[test]
    fn text_builder_reads_mid_edge_openings() {
        let maze = [
            "#########", //
            "#....##.#", // (0,0) opens east, (0,1) opens west
            "####.####", // (0,1) opens south
            "####.####", // (1,1) opens north
            "#.##....#", // (1,1) opens east, (1,2) opens west
            "#########",
            "#########",
            "#.##.##.#",
            "#########",
        ];
        let graph = TextGraphBuilder::new(&maze).build();
        assert!(graph.node(Location::new(0, 0)).has_out_path(OutPaths::EAST));
        assert!(!graph
            .node(Location::new(0, 0))
            .has_out_path(OutPaths::NORTH));
        assert!(graph.node(Location::new(0, 1)).has_out_path(OutPaths::WEST));
        assert!(graph
            .node(Location::new(0, 1))
            .has_out_path(OutPaths::SOUTH));
        assert!(graph
            .node(Location::new(1, 1))
            .has_out_path(OutPaths::NORTH));
        assert!(graph.node(Location::new(1, 1)).has_out_path(OutPaths::EAST));
        assert!(graph.node(Location::new(1, 2)).has_out_path(OutPaths::WEST));
        for direction in OutPaths::CARDINAL {
            assert!(!graph.node(Location::new(2, 1)).has_out_path(direction));
        }
    }
}
