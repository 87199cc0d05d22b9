//! The maze board: a square grid of path tiles plus one loose leftover tile.
//!
//! The only mutating operation is [`MazeGraph::shift`], which slides a border
//! row or column by one cell, inserts the leftover at the pushed-in end and
//! makes the pushed-out tile the new leftover. Everything else is a pure query.

use std::fmt;

use crate::core::location::{IndexType, Location, Offset};
use crate::core::outpaths::{OutPaths, RotationDegree};

/// Stable identifier of a tile, unique per board.
pub type NodeId = u16;

/// Board side length.
pub type ExtentType = IndexType;

/// One tile: a fixed opening set plus a variable orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Node {
    pub node_id: NodeId,
    pub out_paths: OutPaths,
    pub rotation: RotationDegree,
}

impl Node {
    /// True if the tile, in its current orientation, opens toward `out_path`.
    #[inline]
    pub fn has_out_path(&self, out_path: OutPaths) -> bool {
        self.out_paths
            .contains(out_path.rotated(self.rotation.inverse()))
    }
}

fn offset_from_out_path(out_path: OutPaths) -> Offset {
    match out_path {
        OutPaths::NORTH => Offset::new(-1, 0),
        OutPaths::EAST => Offset::new(0, 1),
        OutPaths::SOUTH => Offset::new(1, 0),
        OutPaths::WEST => Offset::new(0, -1),
        _ => Offset::new(0, 0),
    }
}

fn integer_square_root(number: usize) -> usize {
    let mut root = 0;
    while root * root <= number {
        root += 1;
    }
    root - 1
}

/// A square grid of [`Node`]s plus exactly one leftover node, together with
/// the ordered list of border locations where the leftover may be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGraph {
    extent: ExtentType,
    node_matrix: Vec<Node>,
    leftover: Node,
    shift_locations: Vec<Location>,
}

impl MazeGraph {
    /// An empty board of the given extent. Node ids are assigned row-major,
    /// the leftover gets id `extent * extent`.
    pub fn new(extent: ExtentType) -> MazeGraph {
        let size = extent as usize * extent as usize;
        let mut node_matrix = vec![Node::default(); size];
        for (node_id, node) in node_matrix.iter_mut().enumerate() {
            node.node_id = node_id as NodeId;
        }
        MazeGraph {
            extent,
            node_matrix,
            leftover: Node {
                node_id: size as NodeId,
                ..Node::default()
            },
            shift_locations: Vec::new(),
        }
    }

    /// A board from `extent * extent + 1` nodes in row-major order; the last
    /// entry becomes the leftover.
    pub fn from_nodes(mut nodes: Vec<Node>) -> MazeGraph {
        assert!(!nodes.is_empty(), "a board needs at least the leftover node");
        let extent = integer_square_root(nodes.len() - 1) as ExtentType;
        assert_eq!(
            (extent as usize * extent as usize) + 1,
            nodes.len(),
            "node count must be a square plus one leftover"
        );
        let leftover = nodes.pop().unwrap_or_default();
        MazeGraph {
            extent,
            node_matrix: nodes,
            leftover,
            shift_locations: Vec::new(),
        }
    }

    #[inline]
    pub fn extent(&self) -> ExtentType {
        self.extent
    }

    /// Grid nodes plus the leftover.
    #[inline]
    pub fn number_of_nodes(&self) -> usize {
        self.node_matrix.len() + 1
    }

    #[inline]
    pub fn is_inside(&self, location: Location) -> bool {
        location.row >= 0
            && location.column >= 0
            && location.row < self.extent
            && location.column < self.extent
    }

    #[inline]
    fn index(&self, location: Location) -> usize {
        debug_assert!(self.is_inside(location));
        location.row as usize * self.extent as usize + location.column as usize
    }

    #[inline]
    pub fn node(&self, location: Location) -> &Node {
        &self.node_matrix[self.index(location)]
    }

    #[inline]
    pub fn node_mut(&mut self, location: Location) -> &mut Node {
        let index = self.index(location);
        &mut self.node_matrix[index]
    }

    #[inline]
    pub fn leftover(&self) -> &Node {
        &self.leftover
    }

    #[inline]
    pub fn leftover_mut(&mut self) -> &mut Node {
        &mut self.leftover
    }

    pub fn set_out_paths(&mut self, location: Location, out_paths: OutPaths) {
        self.node_mut(location).out_paths = out_paths;
    }

    pub fn set_leftover_out_paths(&mut self, out_paths: OutPaths) {
        self.leftover.out_paths = out_paths;
    }

    /// Registers a border location for shifting; duplicates are ignored.
    pub fn add_shift_location(&mut self, location: Location) {
        if !self.shift_locations.contains(&location) {
            self.shift_locations.push(location);
        }
    }

    /// The ordered list of valid insertion locations.
    #[inline]
    pub fn shift_locations(&self) -> &[Location] {
        &self.shift_locations
    }

    /// The grid location holding `node_id`, or `leftover_location` if the
    /// node is the current leftover.
    pub fn location_of(&self, node_id: NodeId, leftover_location: Location) -> Location {
        for row in 0..self.extent {
            for column in 0..self.extent {
                let location = Location::new(row, column);
                if self.node(location).node_id == node_id {
                    return location;
                }
            }
        }
        leftover_location
    }

    /// The locations connected to `location` by matching openings, in
    /// N, E, S, W order. The order is part of the contract.
    pub fn neighbors(&self, location: Location) -> Neighbors<'_> {
        Neighbors {
            graph: self,
            location,
            node: *self.node(location),
            direction_index: 0,
        }
    }

    /// Slides the row or column starting at `location` one cell inward,
    /// inserts the leftover there with its rotation overwritten to
    /// `leftover_rotation`, and makes the pushed-out tile the new leftover
    /// (keeping that tile's own rotation).
    pub fn shift(&mut self, location: Location, leftover_rotation: RotationDegree) {
        let offset = offset_by_shift_location(location, self.extent);
        let mut to_location = opposing_shift_location(location, self.extent);
        let pushed_out = *self.node(to_location);
        for _ in 0..self.extent - 1 {
            let from_location = to_location - offset;
            *self.node_mut(to_location) = *self.node(from_location);
            to_location = from_location;
        }
        self.leftover.rotation = leftover_rotation;
        *self.node_mut(to_location) = self.leftover;
        self.leftover = pushed_out;
    }
}

/// Iterator over the connected neighbors of one location.
pub struct Neighbors<'a> {
    graph: &'a MazeGraph,
    location: Location,
    node: Node,
    direction_index: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        while self.direction_index < OutPaths::CARDINAL.len() {
            let direction = OutPaths::CARDINAL[self.direction_index];
            self.direction_index += 1;
            if !self.node.has_out_path(direction) {
                continue;
            }
            let target = self.location + offset_from_out_path(direction);
            if self.graph.is_inside(target)
                && self.graph.node(target).has_out_path(direction.mirrored())
            {
                return Some(target);
            }
        }
        None
    }
}

/// The border location whose shift exactly undoes a shift at `location`.
/// Interior and sentinel locations are returned unchanged.
pub fn opposing_shift_location(location: Location, extent: ExtentType) -> Location {
    let border = extent - 1;
    if location.column == 0 {
        Location::new(location.row, border)
    } else if location.row == 0 {
        Location::new(border, location.column)
    } else if location.column == border {
        Location::new(location.row, 0)
    } else if location.row == border {
        Location::new(0, location.column)
    } else {
        location
    }
}

/// Where a piece at `location` ends up after a shift inserted at
/// `shift_location`: pieces on the shifted line advance by the inward offset,
/// wrapping modulo `extent`; pieces off the line stay put.
pub fn translate_location_by_shift(
    location: Location,
    shift_location: Location,
    extent: ExtentType,
) -> Location {
    let offset = offset_by_shift_location(shift_location, extent);
    if offset.row_offset != 0 {
        if location.column == shift_location.column {
            let row = (location.row + offset.row_offset + extent) % extent;
            return Location::new(row, location.column);
        }
    } else if location.row == shift_location.row {
        let column = (location.column + offset.column_offset + extent) % extent;
        return Location::new(location.row, column);
    }
    location
}

/// The inward unit offset of a shift inserted at `shift_location`.
pub fn offset_by_shift_location(shift_location: Location, extent: ExtentType) -> Offset {
    if shift_location.row == 0 {
        Offset::new(1, 0)
    } else if shift_location.row == extent - 1 {
        Offset::new(-1, 0)
    } else if shift_location.column == 0 {
        Offset::new(0, 1)
    } else if shift_location.column == extent - 1 {
        Offset::new(0, -1)
    } else {
        Offset::new(0, 0)
    }
}

impl fmt::Display for MazeGraph {
    /// Renders the board in the same 3x3-block format the text builder
    /// parses: corners `#`, mid-edges `.` when open, center `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.extent as usize * 3;
        for row in 0..self.extent {
            let mut lines = [vec!['#'; width], vec!['#'; width], vec!['#'; width]];
            for column in 0..self.extent {
                let node = self.node(Location::new(row, column));
                let base = column as usize * 3;
                lines[1][base + 1] = '.';
                if node.has_out_path(OutPaths::NORTH) {
                    lines[0][base + 1] = '.';
                }
                if node.has_out_path(OutPaths::EAST) {
                    lines[1][base + 2] = '.';
                }
                if node.has_out_path(OutPaths::SOUTH) {
                    lines[2][base + 1] = '.';
                }
                if node.has_out_path(OutPaths::WEST) {
                    lines[1][base] = '.';
                }
            }
            for line in &lines {
                writeln!(f, "{}", line.iter().collect::<String>())?;
            }
        }
        Ok(())
    }
}
