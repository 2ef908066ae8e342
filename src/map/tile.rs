use std::sync::Arc;

use glam::IVec3;
use smallvec::SmallVec;

use crate::catalog::TileType;
use crate::direction::{Direction, Rotation};

/// Scoring props placed on a tile. Carried through route resolution untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileItems {
    pub obstacles: u32,
    pub speedbumps: u32,
    pub ramp_points: bool,
}

/// One cell of a map: a catalog tile type placed at a coordinate with a rotation.
#[derive(Debug, Clone)]
pub struct PlacedTile {
    pub position: IVec3,
    pub tile_type: Arc<TileType>,
    pub rotation: Rotation,
    /// Exit side that also climbs one level.
    pub level_up: Option<Direction>,
    /// Exit side that also descends one level.
    pub level_down: Option<Direction>,
    pub checkpoint: bool,
    pub items: TileItems,

    /// Step numbers at which the route visits this tile.
    pub index: SmallVec<[u32; 2]>,
    /// Coordinates the route moves to from this tile.
    pub next: SmallVec<[IVec3; 2]>,
    /// Exit side taken on each visit.
    pub next_dir: SmallVec<[Direction; 2]>,
    /// Side of this evacuation tile the robot enters through.
    pub evac_entrance: Option<Direction>,
    /// Side of this evacuation tile the robot leaves through on restart.
    pub evac_exit: Option<Direction>,
}

impl PlacedTile {
    pub fn new(position: IVec3, tile_type: Arc<TileType>, rotation: Rotation) -> Self {
        PlacedTile {
            position,
            tile_type,
            rotation,
            level_up: None,
            level_down: None,
            checkpoint: false,
            items: TileItems::default(),
            index: SmallVec::new(),
            next: SmallVec::new(),
            next_dir: SmallVec::new(),
            evac_entrance: None,
            evac_exit: None,
        }
    }

    pub fn with_checkpoint(mut self, checkpoint: bool) -> Self {
        self.checkpoint = checkpoint;
        self
    }

    pub fn with_level_up(mut self, exit: Direction) -> Self {
        self.level_up = Some(exit);
        self
    }

    pub fn with_level_down(mut self, exit: Direction) -> Self {
        self.level_down = Some(exit);
        self
    }

    pub fn with_items(mut self, items: TileItems) -> Self {
        self.items = items;
        self
    }

    /// Exit side, in map space, for a robot entering from `entry` (also map space).
    ///
    /// The entry is turned back into the tile's own frame, looked up in the catalog path table,
    /// and the result turned forward again. `None` means the tile cannot be entered from that side.
    pub fn exit_for(&self, entry: Direction) -> Option<Direction> {
        self.tile_type
            .paths
            .exit(entry.rotate(-self.rotation))
            .map(|exit| exit.rotate(self.rotation))
    }

    /// Path-table entry sides rotated into map space, in canonical order of the unrotated table.
    pub fn entry_sides(&self) -> impl Iterator<Item = Direction> + '_ {
        self.tile_type
            .paths
            .entries()
            .map(|(entry, _)| entry.rotate(self.rotation))
    }

    /// Coordinate reached by leaving through `exit`, including any level change.
    pub fn neighbor(&self, exit: Direction) -> IVec3 {
        let mut target = self.position + exit.as_ivec3();
        if self.level_up == Some(exit) {
            target.z += 1;
        } else if self.level_down == Some(exit) {
            target.z -= 1;
        }
        target
    }

    /// Coordinate adjacent through `side` on the same level, ignoring level changes.
    pub fn adjacent(&self, side: Direction) -> IVec3 {
        self.position + side.as_ivec3()
    }

    pub fn is_terminal(&self) -> bool {
        self.tile_type.is_terminal()
    }

    pub fn is_evacuation(&self) -> bool {
        self.tile_type.is_evacuation()
    }

    /// Clears every field written by route resolution.
    pub fn reset_route(&mut self) {
        self.index.clear();
        self.next.clear();
        self.next_dir.clear();
        self.evac_entrance = None;
        self.evac_exit = None;
    }
}
