//! Choosing the side a robot enters a start tile from.

use smallvec::SmallVec;
use tracing::warn;

use super::RouteWarning;
use crate::direction::Direction;
use crate::error::RouteError;
use crate::map::{PlacedTile, TileRegistry};

/// Entry sides of `tiles[index]` whose exit leads onto another tile, in path-table order.
pub fn viable_entries(tiles: &[PlacedTile], registry: &TileRegistry, index: usize) -> SmallVec<[Direction; 4]> {
    let tile = &tiles[index];
    tile.entry_sides()
        .filter(|&side| {
            tile.exit_for(side)
                .is_some_and(|exit| registry.contains(tile.neighbor(exit)))
        })
        .collect()
}

/// Picks the entry side for the first step of a route.
///
/// The first viable side wins. When several are viable the choice depends on path-table order,
/// so an [`RouteWarning::AmbiguousStart`] is reported. When none is, the first side of the table
/// is used and the route halts at the edge of the map.
pub fn initial_entry(
    tiles: &[PlacedTile],
    registry: &TileRegistry,
    index: usize,
    warnings: &mut Vec<RouteWarning>,
) -> Result<Direction, RouteError> {
    let tile = &tiles[index];
    let candidates = viable_entries(tiles, registry, index);

    if candidates.len() > 1 {
        warn!(position = %tile.position, ?candidates, "Start tile can be entered from more than one side");
        warnings.push(RouteWarning::AmbiguousStart {
            position: tile.position,
            candidates: candidates.clone(),
        });
    }

    if let Some(&entry) = candidates.first() {
        return Ok(entry);
    }

    let fallback = tile
        .entry_sides()
        .next()
        .ok_or(RouteError::StartTileNotRoutable(tile.position))?;
    warn!(position = %tile.position, entry = %fallback, "No side of the start tile leads onto the map");
    warnings.push(RouteWarning::NoViableStart { position: tile.position });
    Ok(fallback)
}

/// Picks the entry side for the tile the route resumes on after reaching the evacuation area.
///
/// The robot comes back out of the evacuation area, so the entry is the first side facing an
/// evacuation tile on the same level; that evacuation tile gets its exit marker. Without one
/// there is no way in: `None` makes the second start tile a dead end and the route halts there.
pub fn restart_entry(
    tiles: &mut [PlacedTile],
    registry: &TileRegistry,
    index: usize,
    warnings: &mut Vec<RouteWarning>,
) -> Option<Direction> {
    let tile = &tiles[index];
    let position = tile.position;
    let facing_evacuation = tile.entry_sides().find_map(|side| {
        registry
            .get(tile.adjacent(side))
            .filter(|&neighbor| tiles[neighbor].is_evacuation())
            .map(|neighbor| (side, neighbor))
    });

    if let Some((side, evacuation)) = facing_evacuation {
        tiles[evacuation].evac_exit = Some(side.opposite());
        return Some(side);
    }

    warn!(%position, "Second start tile does not face the evacuation area");
    warnings.push(RouteWarning::RestartWithoutEvacuation { position });
    None
}
