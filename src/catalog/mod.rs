//! The tile-type catalog: authoritative routing reference data.
//!
//! The catalog is built once (either from the compiled-in seed or from a JSON document)
//! and shared read-only; placed tiles hold an [`Arc`] to their resolved [`TileType`].

pub mod seed;
pub mod tile_set;
mod tile_type;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

pub use tile_set::{TileSet, TileSetEntry};
pub use tile_type::{PathTable, TileRole, TileType};

use crate::error::CatalogError;
use tile_type::TileTypeDocument;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    types: Vec<Arc<TileType>>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog from the compiled-in tile table.
    pub fn seeded() -> Catalog {
        let types = seed::TILE_TYPE_SEED
            .entries()
            .map(|(id, seed)| seed.to_tile_type(id));

        // Keys of a phf map are unique, so this cannot fail.
        let mut catalog = Catalog::default();
        for tile_type in types {
            catalog.by_id.insert(tile_type.id.clone(), catalog.types.len());
            catalog.types.push(Arc::new(tile_type));
        }
        catalog
    }

    /// Builds a catalog from tile-type definitions, rejecting duplicate identities.
    pub fn from_tile_types(tile_types: impl IntoIterator<Item = TileType>) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::default();
        for tile_type in tile_types {
            if catalog.by_id.contains_key(&tile_type.id) {
                return Err(CatalogError::DuplicateTileType(tile_type.id));
            }
            catalog.by_id.insert(tile_type.id.clone(), catalog.types.len());
            catalog.types.push(Arc::new(tile_type));
        }
        Ok(catalog)
    }

    /// Loads a catalog from a JSON array of tile-type documents.
    ///
    /// Entries without a `role` are classified by their legacy identity.
    pub fn from_json(json: &str) -> Result<Catalog, CatalogError> {
        let documents: Vec<TileTypeDocument> = serde_json::from_str(json)?;
        let tile_types = documents
            .into_iter()
            .map(TileType::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Catalog::from_tile_types(tile_types)?;
        debug!(tile_types = catalog.len(), "Loaded tile-type catalog");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Result<Arc<TileType>, CatalogError> {
        self.by_id
            .get(id)
            .map(|&index| Arc::clone(&self.types[index]))
            .ok_or_else(|| CatalogError::UnknownTileType(id.to_string()))
    }

    /// Tile types in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TileType>> {
        self.types.iter()
    }

    pub fn with_role(&self, role: TileRole) -> impl Iterator<Item = &Arc<TileType>> {
        self.types.iter().filter(move |tile_type| tile_type.role == role)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
