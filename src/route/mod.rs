//! Route resolution: the walk a robot takes across a map, written back onto the tiles.
//!
//! Starting at the map's start tile, each tile's path table (rotated into map space) decides the
//! exit side, and the robot moves on to the neighbouring tile through it. The walk stops at a
//! terminal tile. Reaching the evacuation area (or the edge of the built map) ends the walk too,
//! unless a second start tile exists and has not been used yet, in which case the walk resumes
//! there exactly once.

pub mod start;
mod traversal;

use glam::IVec3;
use smallvec::SmallVec;
use tracing::{debug_span, info, warn};

use crate::config::ResolverConfig;
use crate::direction::Direction;
use crate::error::RouteError;
use crate::map::Map;

/// How a resolved route ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The route reached a terminal tile.
    Finished,
    /// The route ran into the evacuation area or off the map with no restart left.
    Lost,
}

/// Map-authoring problems noticed while resolving a route. None of them stop resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteWarning {
    /// More than one side of the start tile leads onto the map; the first in path-table order was used.
    AmbiguousStart {
        position: IVec3,
        candidates: SmallVec<[Direction; 4]>,
    },
    /// No side of the start tile leads onto the map.
    NoViableStart { position: IVec3 },
    /// The second start tile has no neighbouring evacuation tile to resume from.
    RestartWithoutEvacuation { position: IVec3 },
    /// The route entered a tile from a side its path table does not cover.
    DeadEnd { position: IVec3, entry: Option<Direction> },
}

/// Result of a successful resolution. The same figures are also written onto the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub outcome: RouteOutcome,
    /// Number of recorded steps; equals the map's `index_count`.
    pub steps: u32,
    /// Checkpoints passed when the evacuation area was reached; equals the map's `evacuation_area_lop_index`.
    pub evacuation_checkpoints: u32,
    /// Checkpoints passed over the whole route.
    pub checkpoints: u32,
    /// Whether the route resumed from the second start tile.
    pub restarted: bool,
    pub warnings: Vec<RouteWarning>,
}

/// Resolves the route of `map` in place.
///
/// Every derived field (tile `index`, `next`, `next_dir`, evacuation markers, map `index_count`
/// and `evacuation_area_lop_index`) is reset and rebuilt, so repeated calls give identical results.
///
/// # Errors
///
/// Fails if the start tile is missing or has no paths, if two tiles share a coordinate, or if the
/// route does not end within the configured step ceiling. On failure the derived fields are left
/// cleared.
pub fn resolve(map: &mut Map, config: &ResolverConfig) -> Result<RouteSummary, RouteError> {
    let span = debug_span!("resolve_route", map = %map.name);
    let _enter = span.enter();

    match traversal::walk(map, config) {
        Ok(summary) => {
            info!(
                outcome = ?summary.outcome,
                steps = summary.steps,
                evacuation_checkpoints = summary.evacuation_checkpoints,
                restarted = summary.restarted,
                warnings = summary.warnings.len(),
                "Route resolved"
            );
            Ok(summary)
        }
        Err(err) => {
            warn!(error = %err, "Route resolution failed");
            map.reset_route();
            Err(err)
        }
    }
}
