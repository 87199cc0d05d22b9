use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// The path openings of a tile, packed into the low four bits of a `u8`.
///
/// Bit positions are North=0, East=1, South=2, West=3. Single-bit values double
/// as directions, so `OutPaths::NORTH` is both "the set {North}" and "the
/// direction North". Rotating a tile cycles the nibble; the value never leaves
/// the low four bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OutPaths(u8);

impl OutPaths {
    pub const NONE: OutPaths = OutPaths(0);
    pub const NORTH: OutPaths = OutPaths(1);
    pub const EAST: OutPaths = OutPaths(1 << 1);
    pub const SOUTH: OutPaths = OutPaths(1 << 2);
    pub const WEST: OutPaths = OutPaths(1 << 3);

    /// The four directions in neighbor-iteration order.
    pub const CARDINAL: [OutPaths; 4] = [Self::NORTH, Self::EAST, Self::SOUTH, Self::WEST];

    /// Raw packed representation (low nibble).
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Construct from a raw nibble; bits outside the low four are dropped.
    #[inline]
    pub const fn from_raw(raw: u8) -> OutPaths {
        OutPaths(raw & 0xf)
    }

    /// True if any opening of `other` is also an opening of `self`.
    #[inline]
    pub const fn contains(self, other: OutPaths) -> bool {
        self.0 & other.0 != 0
    }

    /// Cyclic left shift of the nibble by the rotation's quarter-turn count.
    #[inline]
    pub const fn rotated(self, rotation: RotationDegree) -> OutPaths {
        let turns = rotation.quarter_turns();
        OutPaths((self.0 << turns | self.0 >> (4 - turns)) & 0xf)
    }

    /// The opposite opening set; for a single direction, the direction a
    /// neighboring tile must open to connect back.
    #[inline]
    pub const fn mirrored(self) -> OutPaths {
        self.rotated(RotationDegree::D180)
    }
}

impl BitOr for OutPaths {
    type Output = OutPaths;

    #[inline]
    fn bitor(self, rhs: OutPaths) -> OutPaths {
        OutPaths(self.0 | rhs.0)
    }
}

/// A tile orientation in quarter turns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum RotationDegree {
    #[default]
    D0 = 0,
    D90 = 1,
    D180 = 2,
    D270 = 3,
}

impl RotationDegree {
    /// All rotations in increasing order.
    pub const ALL: [RotationDegree; 4] = [
        RotationDegree::D0,
        RotationDegree::D90,
        RotationDegree::D180,
        RotationDegree::D270,
    ];

    #[inline]
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_quarter_turns(turns: u8) -> RotationDegree {
        match turns & 3 {
            0 => RotationDegree::D0,
            1 => RotationDegree::D90,
            2 => RotationDegree::D180,
            _ => RotationDegree::D270,
        }
    }

    /// The next rotation, wrapping 270° back to 0°.
    #[inline]
    pub const fn next(self) -> RotationDegree {
        RotationDegree::from_quarter_turns(self.quarter_turns() + 1)
    }

    /// The rotation that undoes `self`.
    #[inline]
    pub const fn inverse(self) -> RotationDegree {
        RotationDegree::from_quarter_turns(4 - self.quarter_turns())
    }

    #[inline]
    pub const fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }
}

impl fmt::Display for RotationDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_compose_additively() {
        for raw in 0..16u8 {
            let paths = OutPaths::from_raw(raw);
            for a in RotationDegree::ALL {
                for b in RotationDegree::ALL {
                    let combined =
                        RotationDegree::from_quarter_turns(a.quarter_turns() + b.quarter_turns());
                    assert_eq!(paths.rotated(a).rotated(b), paths.rotated(combined));
                }
            }
        }
    }

    #[test]
    fn mirror_is_an_involution() {
        for direction in OutPaths::CARDINAL {
            assert_eq!(direction.mirrored().mirrored(), direction);
        }
        assert_eq!(OutPaths::NORTH.mirrored(), OutPaths::SOUTH);
        assert_eq!(OutPaths::EAST.mirrored(), OutPaths::WEST);
    }

    #[test]
    fn rotation_cycles_the_nibble() {
        let corner = OutPaths::NORTH | OutPaths::EAST;
        assert_eq!(
            corner.rotated(RotationDegree::D90),
            OutPaths::EAST | OutPaths::SOUTH
        );
        assert_eq!(
            corner.rotated(RotationDegree::D270),
            OutPaths::WEST | OutPaths::NORTH
        );
        let straight = OutPaths::NORTH | OutPaths::SOUTH;
        assert_eq!(straight.rotated(RotationDegree::D180), straight);
    }

    #[test]
    fn inverse_undoes_a_rotation() {
        for rotation in RotationDegree::ALL {
            for raw in 0..16u8 {
                let paths = OutPaths::from_raw(raw);
                assert_eq!(paths.rotated(rotation).rotated(rotation.inverse()), paths);
            }
        }
    }
}
