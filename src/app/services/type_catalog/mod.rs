//! Type catalog service for static item data lookups
//!
//! Maps item names (case-insensitively) and numeric type identifiers to static
//! attributes: canonical name, volumes, group and category, portion size and the
//! materials list used by the buyback decomposition engine.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

pub mod loader;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::{CatalogMetadata, LoadStats};

/// A (type, quantity) pair inside a materials, components or products list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    pub quantity: i64,
    pub type_id: i64,
}

impl Component {
    pub fn new(type_id: i64, quantity: i64) -> Self {
        Self { quantity, type_id }
    }
}

/// Static attributes of one item type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeRecord {
    pub id: i64,
    pub group_id: i64,
    pub market_group_id: i64,
    pub category_id: i64,
    pub name: String,
    pub volume: f64,
    pub packaged_volume: f64,
    pub base_price: f64,
    pub portion_size: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blueprint_products: Vec<Component>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub base_components: Vec<Component>,
    /// Output of refining or reprocessing one portion
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<Component>,
}

impl TypeRecord {
    /// Create a record with only identity fields set
    pub fn new(id: i64, name: impl Into<String>, group_id: i64, category_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            group_id,
            category_id,
            portion_size: 1,
            ..Self::default()
        }
    }

    /// Unit volume as shipped: packaged volume when set, else assembled volume
    pub fn unit_volume(&self) -> f64 {
        if self.packaged_volume != 0.0 {
            self.packaged_volume
        } else {
            self.volume
        }
    }

    /// Portion size clamped to at least one
    pub fn effective_portion_size(&self) -> i64 {
        self.portion_size.max(1)
    }

    /// True when the type breaks down into other materials
    pub fn is_decomposable(&self) -> bool {
        !self.materials.is_empty()
    }
}

/// Read-only lookup of static type data
pub trait TypeCatalog: Send + Sync {
    /// Resolve a type by name, ignoring case
    fn resolve_by_name(&self, name: &str) -> Option<&TypeRecord>;

    /// Resolve a type by its numeric identifier
    fn resolve_by_id(&self, type_id: i64) -> Option<&TypeRecord>;

    /// Check if a name resolves to a type
    fn has_type(&self, name: &str) -> bool {
        self.resolve_by_name(name).is_some()
    }

    /// Resolve a type by name, failing with `Error::TypeNotFound`
    fn require_by_name(&self, name: &str) -> Result<&TypeRecord> {
        self.resolve_by_name(name)
            .ok_or_else(|| Error::type_not_found(name))
    }
}

/// Type catalog held entirely in memory
///
/// Records are indexed by id, with a secondary lowercase name index for
/// case-insensitive resolution.
#[derive(Debug, Clone)]
pub struct InMemoryTypeCatalog {
    /// Type records indexed by type id
    pub(crate) types: HashMap<i64, TypeRecord>,

    /// Lowercased name to type id
    pub(crate) name_index: HashMap<String, i64>,

    /// File the catalog was loaded from, if any
    pub(crate) source_path: Option<PathBuf>,

    /// Timestamp when the catalog was built
    pub(crate) load_time: Instant,
}

impl Default for InMemoryTypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTypeCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
            name_index: HashMap::new(),
            source_path: None,
            load_time: Instant::now(),
        }
    }

    /// Build a catalog from records, keeping the first record seen for each id
    pub fn from_records(records: impl IntoIterator<Item = TypeRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }

    /// Insert a record, returning false when the id is already present
    pub fn insert(&mut self, record: TypeRecord) -> bool {
        if self.types.contains_key(&record.id) {
            return false;
        }
        self.name_index
            .entry(record.name.to_lowercase())
            .or_insert(record.id);
        self.types.insert(record.id, record);
        true
    }

    /// Get the number of types in the catalog
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Get catalog metadata
    pub fn metadata(&self) -> CatalogMetadata {
        CatalogMetadata {
            source_path: self.source_path.clone(),
            record_count: self.types.len(),
            load_time: self.load_time,
        }
    }
}

impl TypeCatalog for InMemoryTypeCatalog {
    fn resolve_by_name(&self, name: &str) -> Option<&TypeRecord> {
        self.name_index
            .get(&name.trim().to_lowercase())
            .and_then(|id| self.types.get(id))
    }

    fn resolve_by_id(&self, type_id: i64) -> Option<&TypeRecord> {
        self.types.get(&type_id)
    }
}
