//! Catalog loading statistics and metadata
//!
//! Shared by the type and price catalogs.

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Statistics about a catalog loading run
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Number of records found in the source file
    pub records_found: usize,

    /// Number of records kept in the catalog
    pub records_loaded: usize,

    /// Number of records skipped as duplicates
    pub duplicates_skipped: usize,

    /// Number of records skipped as invalid
    pub invalid_skipped: usize,

    /// Time taken to load the catalog
    pub load_duration: Duration,

    /// Any problems encountered during loading
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            records_found: 0,
            records_loaded: 0,
            duplicates_skipped: 0,
            invalid_skipped: 0,
            load_duration: Duration::ZERO,
            errors: Vec::new(),
        }
    }

    /// Percentage of found records that were skipped
    pub fn skip_rate(&self) -> f64 {
        if self.records_found == 0 {
            0.0
        } else {
            ((self.duplicates_skipped + self.invalid_skipped) as f64 / self.records_found as f64)
                * 100.0
        }
    }

    /// Check if any errors occurred during loading
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Found {} records, loaded {} ({:.1}% skipped) in {:.2}s",
            self.records_found,
            self.records_loaded,
            self.skip_rate(),
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about a loaded catalog
#[derive(Debug, Clone)]
pub struct CatalogMetadata {
    /// File the catalog was loaded from
    pub source_path: Option<PathBuf>,

    /// Number of records held
    pub record_count: usize,

    /// When the catalog was built
    pub load_time: Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_stats_new() {
        let stats = LoadStats::new();
        assert_eq!(stats.records_found, 0);
        assert_eq!(stats.skip_rate(), 0.0);
        assert!(!stats.has_errors());
    }

    #[test]
    fn test_skip_rate() {
        let stats = LoadStats {
            records_found: 10,
            records_loaded: 7,
            duplicates_skipped: 2,
            invalid_skipped: 1,
            ..LoadStats::new()
        };
        assert!((stats.skip_rate() - 30.0).abs() < f64::EPSILON);
        assert!(stats.summary().starts_with("Found 10 records, loaded 7 (30.0% skipped)"));
    }
}
