//! Centralized error types for route resolution.
//!
//! Each concern has its own error enum; [`LinemapError`] wraps them for callers
//! that do not care which stage failed.

use std::io;

use glam::{IVec3, UVec3};

/// Main error type for the crate.
#[derive(thiserror::Error, Debug)]
pub enum LinemapError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while loading or querying the tile-type catalog.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Unknown tile type: {0}")]
    UnknownTileType(String),

    #[error("Tile type {tile_type} has a path from unknown side {entry:?}")]
    InvalidPathEntry { tile_type: String, entry: String },

    #[error("Tile type declared twice: {0}")]
    DuplicateTileType(String),

    #[error("Invalid catalog document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

/// Input validation errors for maps and placed tiles.
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Rotation must be a right angle (0, 90, 180 or 270), got {0}")]
    InvalidRotation(i32),

    #[error("Map dimensions must be at least 1 in every axis, got {0}")]
    InvalidDimensions(UVec3),

    #[error("More than one tile placed at {0}")]
    DuplicateCoordinate(IVec3),

    #[error("Start tile {0} is not part of the map")]
    MissingStartTile(IVec3),

    #[error("Invalid coordinate key: {0:?}")]
    InvalidCoordinateKey(String),

    #[error("Invalid evacuation angle: {0}")]
    InvalidAngle(i32),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Failures of the traversal engine itself.
#[derive(thiserror::Error, Debug)]
pub enum RouteError {
    #[error("Route did not terminate within {limit} steps")]
    StepLimitExceeded { limit: u32 },

    #[error("Start tile {0} has no paths to follow")]
    StartTileNotRoutable(IVec3),

    #[error(transparent)]
    Map(#[from] MapError),
}

/// Errors in resolver configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("max_steps_per_tile must be at least 1")]
    InvalidStepFactor,
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Extract(Box::new(err))
    }
}

/// Result type for crate operations.
pub type LinemapResult<T> = Result<T, LinemapError>;
