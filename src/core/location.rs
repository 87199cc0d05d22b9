use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// Index type for board rows and columns.
///
/// Signed so that off-board sentinels (negative coordinates) stay representable.
pub type IndexType = i16;

/// A board location `(row, column)`. Row 0 is the top row, column 0 the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub row: IndexType,
    pub column: IndexType,
}

/// A translation applied to a [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub row_offset: IndexType,
    pub column_offset: IndexType,
}

impl Location {
    /// Off-board sentinel, e.g. "no previous shift".
    pub const NONE: Location = Location { row: -1, column: -1 };

    #[inline]
    pub const fn new(row: IndexType, column: IndexType) -> Self {
        Self { row, column }
    }
}

impl Offset {
    #[inline]
    pub const fn new(row_offset: IndexType, column_offset: IndexType) -> Self {
        Self {
            row_offset,
            column_offset,
        }
    }
}

impl Add<Offset> for Location {
    type Output = Location;

    #[inline]
    fn add(self, rhs: Offset) -> Location {
        Location::new(self.row + rhs.row_offset, self.column + rhs.column_offset)
    }
}

impl AddAssign<Offset> for Location {
    #[inline]
    fn add_assign(&mut self, rhs: Offset) {
        self.row += rhs.row_offset;
        self.column += rhs.column_offset;
    }
}

impl Sub<Offset> for Location {
    type Output = Location;

    #[inline]
    fn sub(self, rhs: Offset) -> Location {
        Location::new(self.row - rhs.row_offset, self.column - rhs.column_offset)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
