//! Route resolution for tile-based line-following competition maps.
//!
//! A [`map::Map`] is a grid of placed tiles, each referencing a [`catalog::TileType`] whose path
//! table says which side connects to which. [`route::resolve`] walks the route a robot would
//! follow and annotates every tile on it.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod logging;
pub mod map;
pub mod route;
