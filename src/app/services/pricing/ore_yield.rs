//! Ore quality variants and their yield bonuses
//!
//! Quality variants of an ore ("Concentrated Veldspar", "Compressed Dense
//! Veldspar", ...) are priced from their base ore scaled by the variant's
//! published yield bonus.

use crate::constants::{COMPRESSED_PREFIX, ORE_YIELDS, OreFamilyDefinition};
use std::fmt;

/// A quality adjective and its yield bonus in percent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OreVariant {
    pub adjective: String,
    pub bonus: i64,
}

/// One ore family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OreFamily {
    /// Name of the base ore type, e.g. "Dark Ochre"
    pub base_name: String,
    /// Suffix every variant name ends with, e.g. "Ochre"
    pub suffix: String,
    pub variants: Vec<OreVariant>,
}

/// Result of matching an item name against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OreYieldMatch {
    /// Type name whose price is scaled, compression prefix included
    pub base_type_name: String,
    pub bonus: i64,
}

impl OreYieldMatch {
    /// Price multiplier for the bonus
    pub fn multiplier(&self) -> f64 {
        1.0 + self.bonus as f64 / 100.0
    }

    /// Basis label recorded on the priced item, e.g. "Compressed Veldspar +5%"
    pub fn basis(&self) -> String {
        format!("{} +{}%", self.base_type_name, self.bonus)
    }
}

impl fmt::Display for OreYieldMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.basis())
    }
}

/// Immutable lookup table of ore families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OreYieldTable {
    families: Vec<OreFamily>,
}

impl Default for OreYieldTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl OreYieldTable {
    /// Build a table from static family definitions
    pub fn new(definitions: &[OreFamilyDefinition]) -> Self {
        let families = definitions
            .iter()
            .map(|(base_name, suffix, variants)| OreFamily {
                base_name: base_name.to_string(),
                suffix: suffix.to_string(),
                variants: variants
                    .iter()
                    .map(|(adjective, bonus)| OreVariant {
                        adjective: adjective.to_string(),
                        bonus: *bonus,
                    })
                    .collect(),
            })
            .collect();
        Self { families }
    }

    /// Table of every published ore family
    pub fn standard() -> Self {
        Self::new(ORE_YIELDS)
    }

    pub fn families(&self) -> &[OreFamily] {
        &self.families
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Find the base ore and bonus for a quality variant name
    ///
    /// The name must end with a family suffix and contain one of that
    /// family's adjectives. Base ore names never match since they carry no
    /// adjective. Names starting with "Compressed" map to the compressed base
    /// ore.
    pub fn lookup(&self, name: &str) -> Option<OreYieldMatch> {
        let prefix = if name.starts_with(COMPRESSED_PREFIX.trim_end()) {
            COMPRESSED_PREFIX
        } else {
            ""
        };

        self.families
            .iter()
            .filter(|family| name.ends_with(&family.suffix))
            .find_map(|family| {
                family
                    .variants
                    .iter()
                    .find(|variant| name.contains(&variant.adjective))
                    .map(|variant| OreYieldMatch {
                        base_type_name: format!("{}{}", prefix, family.base_name),
                        bonus: variant.bonus,
                    })
            })
    }
}
