//! Type lookup and search functionality

use super::{InMemoryTypeCatalog, TypeRecord};

impl InMemoryTypeCatalog {
    /// Get all type ids in the catalog
    pub fn type_ids(&self) -> Vec<i64> {
        self.types.keys().copied().collect()
    }

    /// Find types by name pattern (case-insensitive)
    ///
    /// Exact matches come first, then prefix matches, then other substring
    /// matches; each band is ordered by name.
    ///
    /// # Arguments
    /// * `pattern` - Text pattern to search for in type names
    ///
    /// # Returns
    /// Vector of matching types
    pub fn search(&self, pattern: &str) -> Vec<&TypeRecord> {
        let pattern_lower = pattern.trim().to_lowercase();
        if pattern_lower.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(u8, &TypeRecord)> = self
            .types
            .values()
            .filter_map(|record| {
                let name_lower = record.name.to_lowercase();
                if name_lower == pattern_lower {
                    Some((0, record))
                } else if name_lower.starts_with(&pattern_lower) {
                    Some((1, record))
                } else if name_lower.contains(&pattern_lower) {
                    Some((2, record))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|(rank_a, a), (rank_b, b)| rank_a.cmp(rank_b).then_with(|| a.name.cmp(&b.name)));
        matches.into_iter().map(|(_, record)| record).collect()
    }

    /// Find all types in a group
    pub fn find_types_in_group(&self, group_id: i64) -> Vec<&TypeRecord> {
        let mut found: Vec<&TypeRecord> = self
            .types
            .values()
            .filter(|record| record.group_id == group_id)
            .collect();
        found.sort_by_key(|record| record.id);
        found
    }
}
