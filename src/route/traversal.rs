use tracing::{debug, trace, warn};

use super::{start, RouteOutcome, RouteSummary, RouteWarning};
use crate::config::ResolverConfig;
use crate::direction::Direction;
use crate::error::{MapError, RouteError};
use crate::map::{Map, TileRegistry};

/// Where the walk is in its single-restart lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Following the route from the primary start tile.
    Normal,
    /// Following the route from the second start tile; the next boundary ends the walk.
    Restarted,
    Halted(RouteOutcome),
}

/// The tile about to be visited.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    tile: usize,
    /// Side the robot comes in from; `None` when there is no way in at all.
    entry: Option<Direction>,
    step: u32,
}

pub(super) fn walk(map: &mut Map, config: &ResolverConfig) -> Result<RouteSummary, RouteError> {
    map.index_count = 0;
    map.evacuation_area_lop_index = 0;

    let registry = TileRegistry::build(&mut map.tiles)?;
    let start_index = registry
        .get(map.start_tile)
        .ok_or(MapError::MissingStartTile(map.start_tile))?;
    let second_index = map.start_tile2.and_then(|position| registry.get(position));
    let limit = config.step_limit(map.tiles.len());

    let mut warnings = Vec::new();
    let entry = start::initial_entry(&map.tiles, &registry, start_index, &mut warnings)?;
    debug!(start = %map.start_tile, %entry, limit, "Walking route");

    let mut cursor = Cursor {
        tile: start_index,
        entry: Some(entry),
        step: 0,
    };
    let mut phase = Phase::Normal;
    let mut checkpoints = 0;
    let mut restarted = false;

    let outcome = loop {
        if let Phase::Halted(outcome) = phase {
            break outcome;
        }
        if cursor.step >= limit {
            return Err(RouteError::StepLimitExceeded { limit });
        }

        let current = &mut map.tiles[cursor.tile];
        let position = current.position;
        if current.checkpoint {
            checkpoints += 1;
        }

        if current.is_terminal() {
            trace!(step = cursor.step, %position, "Reached terminal tile");
            phase = Phase::Halted(RouteOutcome::Finished);
            continue;
        }

        current.index.push(cursor.step);
        map.index_count = cursor.step + 1;

        let exit = cursor.entry.and_then(|entry| current.exit_for(entry));
        let target = match exit {
            Some(exit) => {
                current.next_dir.push(exit);
                Some((exit, current.neighbor(exit)))
            }
            None => {
                warn!(%position, entry = ?cursor.entry, "Tile cannot be entered from this side");
                warnings.push(RouteWarning::DeadEnd {
                    position,
                    entry: cursor.entry,
                });
                None
            }
        };
        trace!(step = cursor.step, %position, ?exit, checkpoints, "Visited tile");

        let neighbor = target.and_then(|(exit, coord)| registry.get(coord).map(|index| (exit, index)));
        match neighbor {
            Some((exit, next)) if !map.tiles[next].is_evacuation() => {
                let next_position = map.tiles[next].position;
                map.tiles[cursor.tile].next.push(next_position);
                cursor = Cursor {
                    tile: next,
                    entry: Some(exit.opposite()),
                    step: cursor.step + 1,
                };
            }
            _ => {
                // Either the evacuation area or the edge of the built map.
                if let Some((exit, evacuation)) = neighbor {
                    map.tiles[evacuation].evac_entrance = Some(exit.opposite());
                }
                map.evacuation_area_lop_index = checkpoints;

                match (phase, second_index) {
                    (Phase::Normal, Some(second)) => {
                        let resume = map.tiles[second].position;
                        map.tiles[cursor.tile].next.push(resume);
                        let entry = start::restart_entry(&mut map.tiles, &registry, second, &mut warnings);
                        debug!(from = %position, to = %resume, ?entry, checkpoints, "Restarting from second start tile");

                        phase = Phase::Restarted;
                        restarted = true;
                        cursor = Cursor {
                            tile: second,
                            entry,
                            step: cursor.step + 1,
                        };
                    }
                    _ => {
                        debug!(%position, checkpoints, "Route lost at evacuation boundary");
                        phase = Phase::Halted(RouteOutcome::Lost);
                    }
                }
            }
        }
    };

    Ok(RouteSummary {
        outcome,
        steps: map.index_count,
        evacuation_checkpoints: map.evacuation_area_lop_index,
        checkpoints,
        restarted,
        warnings,
    })
}
