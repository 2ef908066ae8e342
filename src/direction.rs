//! Direction algebra for oriented tiles.
//!
//! Map space uses screen coordinates: `y` grows downward, so [`Direction::Top`] is `y - 1`.
//! Rotations are clockwise and always a multiple of 90 degrees.

use std::ops::Neg;

use glam::IVec3;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::MapError;

/// One of the four compass sides of a tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

/// All directions in canonical (clockwise from top) order.
///
/// This is also the iteration order of every path table.
pub const DIRECTIONS: [Direction; 4] = [Direction::Top, Direction::Right, Direction::Bottom, Direction::Left];

impl Direction {
    /// Position of this direction in [`DIRECTIONS`].
    pub const fn ordinal(self) -> u8 {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }

    const fn from_ordinal(ordinal: u8) -> Direction {
        DIRECTIONS[(ordinal % 4) as usize]
    }

    /// The direction 180 degrees away.
    pub const fn opposite(self) -> Direction {
        self.rotate(Rotation::R180)
    }

    /// Rotates clockwise by `rotation`.
    pub const fn rotate(self, rotation: Rotation) -> Direction {
        Direction::from_ordinal(self.ordinal() + rotation.steps())
    }

    /// Unit offset of a neighbouring cell on the same level.
    pub fn as_ivec3(self) -> IVec3 {
        self.into()
    }

    /// Angle encoding used by the evacuation markers: top 0, right 90, bottom 180, left 270.
    pub const fn angle(self) -> u16 {
        self.ordinal() as u16 * 90
    }

    /// Inverse of [`Direction::angle`].
    pub fn from_angle(angle: i32) -> Option<Direction> {
        match angle {
            0 => Some(Direction::Top),
            90 => Some(Direction::Right),
            180 => Some(Direction::Bottom),
            270 => Some(Direction::Left),
            _ => None,
        }
    }
}

impl From<Direction> for IVec3 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Top => -IVec3::Y,
            Direction::Right => IVec3::X,
            Direction::Bottom => IVec3::Y,
            Direction::Left => -IVec3::X,
        }
    }
}

/// A clockwise right-angle rotation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Number of quarter turns.
    pub const fn steps(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    pub const fn degrees(self) -> i32 {
        self.steps() as i32 * 90
    }

    /// Normalizes any multiple of 90 degrees (negative values included) into a rotation.
    ///
    /// `90` and `-270` describe the same physical rotation and produce the same value.
    pub fn from_degrees(degrees: i32) -> Result<Rotation, MapError> {
        if degrees % 90 != 0 {
            return Err(MapError::InvalidRotation(degrees));
        }
        Ok(match degrees.rem_euclid(360) / 90 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        })
    }
}

impl Neg for Rotation {
    type Output = Rotation;

    fn neg(self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R0,
            Rotation::R90 => Rotation::R270,
            Rotation::R180 => Rotation::R180,
            Rotation::R270 => Rotation::R90,
        }
    }
}

/// Strict conversion for placed tiles: only `0`, `90`, `180` and `270` are accepted.
impl TryFrom<i32> for Rotation {
    type Error = MapError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            _ => Err(MapError::InvalidRotation(degrees)),
        }
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}
