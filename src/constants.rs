//! Fixed identities shared with previously stored maps and catalogs.

/// Identity of the finishing tile in catalogs that predate explicit tile roles.
pub const LEGACY_TERMINAL_TILE_ID: &str = "58cfd6549792e9313b1610e0";

/// Identities of the three evacuation-area tiles in catalogs that predate explicit tile roles.
pub const LEGACY_EVACUATION_TILE_IDS: [&str; 3] = [
    "58cfd6549792e9313b1610e1",
    "58cfd6549792e9313b1610e2",
    "58cfd6549792e9313b1610e3",
];

/// Identity of the default tile set.
pub const DEFAULT_TILE_SET_ID: &str = "5c19d2439590f2d68b15b302";
/// Display name of the default tile set.
pub const DEFAULT_TILE_SET_NAME: &str = "Default(2022)";
/// Number of copies of every tile type available in the default tile set.
pub const DEFAULT_TILE_SET_COUNT: u32 = 100;

/// Default ceiling on route length, as a multiple of the map's tile count.
///
/// A well-formed route visits each tile at most once before and once after the restart.
pub const DEFAULT_MAX_STEPS_PER_TILE: u32 = 2;

/// Sentinel stored for an unset evacuation marker.
pub const UNSET_ANGLE: i32 = -1;
