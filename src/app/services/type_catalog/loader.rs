//! Type catalog loading from JSON static data exports
//!
//! The source file is a JSON array of type records. Records with a
//! non-positive id or an empty name are skipped, and duplicate ids keep the
//! first record seen.

use super::InMemoryTypeCatalog;
use super::TypeRecord;
use super::metadata::LoadStats;
use crate::{Error, Result};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

impl InMemoryTypeCatalog {
    /// Load a type catalog from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to a `types.json` file
    ///
    /// # Returns
    /// * `Result<(InMemoryTypeCatalog, LoadStats)>` - Catalog and loading statistics
    ///
    /// # Errors
    /// * Returns `Error::Catalog` if the file doesn't exist
    /// * Returns `Error::Io` for file system access issues
    /// * Returns `Error::Serialization` for malformed JSON
    pub async fn load_from_file(path: &Path) -> Result<(Self, LoadStats)> {
        info!("Loading type catalog from {}", path.display());

        if !path.exists() {
            return Err(Error::catalog(format!(
                "Type catalog file does not exist: {}",
                path.display()
            )));
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io(format!("Failed to read type catalog {}", path.display()), e)
        })?;

        let (mut catalog, stats) = Self::from_json_str(&content)?;
        catalog.source_path = Some(path.to_path_buf());

        info!("Type catalog loaded: {}", stats.summary());
        Ok((catalog, stats))
    }

    /// Build a type catalog from JSON text
    pub fn from_json_str(content: &str) -> Result<(Self, LoadStats)> {
        let start_time = Instant::now();
        let records: Vec<TypeRecord> = serde_json::from_str(content)
            .map_err(|e| Error::serialization("Invalid type catalog JSON", e))?;

        let mut catalog = Self::new();
        let mut stats = LoadStats::new();
        stats.records_found = records.len();

        for record in records {
            if record.id <= 0 || record.name.trim().is_empty() {
                debug!("Skipping invalid type record: id={}, name={:?}", record.id, record.name);
                stats.invalid_skipped += 1;
                continue;
            }

            let (id, name) = (record.id, record.name.clone());
            if catalog.insert(record) {
                stats.records_loaded += 1;
            } else {
                warn!(
                    "Duplicate type found: id = {}, name = '{}', keeping existing",
                    id, name
                );
                stats.duplicates_skipped += 1;
                stats
                    .errors
                    .push(format!("Duplicate type id {}", id));
            }
        }

        stats.load_duration = start_time.elapsed();
        Ok((catalog, stats))
    }
}
