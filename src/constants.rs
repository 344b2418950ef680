//! Application constants for the appraisal engine
//!
//! This module contains the static game data, default values and lookup
//! tables used throughout the appraisal pipeline.

// =============================================================================
// Markets
// =============================================================================

/// Reference market used to price buyback baskets
pub const DEFAULT_BUYBACK_MARKET: &str = "jita";

/// Pseudo-market covering every region
pub const UNIVERSE_MARKET: &str = "universe";

/// Market substituted for "universe" when pricing blueprint copy products
pub const BPC_PRODUCT_MARKET: &str = "jita";

// =============================================================================
// Buyback Decomposition
// =============================================================================

/// Static data group identifiers used by the decomposition engine
pub mod group_ids {
    /// Minerals (Tritanium, Pyerite, ...)
    pub const MINERAL: i64 = 18;

    /// Refined ice products (Heavy Water, Liquid Ozone, ...)
    pub const ICE_PRODUCT: i64 = 423;

    /// Raw moon materials (Hydrocarbons, Cobalt, ...)
    pub const MOON_MATERIALS: i64 = 427;

    /// Unrefined ice (Blue Ice, Glacial Mass, ...)
    pub const ICE: i64 = 465;

    /// Groups whose types are already primitive materials
    pub const DIRECT: &[i64] = &[MINERAL, MOON_MATERIALS, ICE_PRODUCT];

    /// Groups refined (rather than reprocessed) outside the asteroid category
    pub const REFINE: &[i64] = &[ICE];
}

/// Static data category identifiers used by the decomposition engine
pub mod category_ids {
    /// Asteroid ores, including compressed variants and moon ores
    pub const ASTEROID: i64 = 25;

    /// Categories refined rather than reprocessed
    pub const REFINE: &[i64] = &[ASTEROID];
}

/// Reference refining efficiency in percent
pub const DEFAULT_REFINE_RATE: f64 = 85.0;

/// Reference reprocessing efficiency in percent
pub const DEFAULT_REPROCESS_RATE: f64 = 55.0;

/// Upper bound on materials graph recursion
pub const DEFAULT_MAX_DECOMPOSITION_DEPTH: usize = 8;

/// Efficiency applied to primitive materials
pub const DIRECT_EFFICIENCY: f64 = 100.0;

// =============================================================================
// Pricing
// =============================================================================

/// Adjustment map key holding the base adjustment
pub const BASE_ADJUSTMENT_ID: i64 = 0;

/// Net production efficiency applied to blueprint copy material cost.
/// Industry V (+10%) offset by miscellaneous costs (-1%).
pub const DEFAULT_PRODUCTION_EFFICIENCY: f64 = 0.91;

/// Strategy labels recorded on priced items
pub mod strategies {
    pub const MARKET: &str = "market";
    pub const ORE_YIELD: &str = "ore_yield";
    pub const BLUEPRINT_COPY: &str = "bpc";
}

/// Suffix stripped from blueprint names to find the manufactured product
pub const BLUEPRINT_SUFFIX: &str = " Blueprint";

/// Prefix carried by compressed ore names
pub const COMPRESSED_PREFIX: &str = "Compressed ";

// =============================================================================
// Ore Yields
// =============================================================================

/// One ore family: the name of the base ore, the suffix shared by every
/// variant's name, and the quality adjectives with their yield bonus percent.
pub type OreFamilyDefinition = (&'static str, &'static str, &'static [(&'static str, i64)]);

/// Published yield bonuses for ore quality variants
pub const ORE_YIELDS: &[OreFamilyDefinition] = &[
    ("Arkonor", "Arkonor", &[("Crimson", 5), ("Prime", 10), ("Flawless", 15)]),
    ("Bistot", "Bistot", &[("Triclinic", 5), ("Monoclinic", 10), ("Cubic", 15)]),
    ("Crokite", "Crokite", &[("Sharp", 5), ("Crystalline", 10), ("Pellucid", 15)]),
    ("Dark Ochre", "Ochre", &[("Onyx", 5), ("Obsidian", 10), ("Jet", 15)]),
    ("Gneiss", "Gneiss", &[("Iridescent", 5), ("Prismatic", 10), ("Brilliant", 15)]),
    ("Hedbergite", "Hedbergite", &[("Vitric", 5), ("Glazed", 10), ("Lustrous", 15)]),
    ("Hemorphite", "Hemorphite", &[("Vivid", 5), ("Radiant", 10), ("Scintillating", 15)]),
    ("Jaspet", "Jaspet", &[("Pure", 5), ("Pristine", 10), ("Immaculate", 15)]),
    ("Kernite", "Kernite", &[("Luminous", 5), ("Fiery", 10), ("Resplendant", 15)]),
    ("Mercoxit", "Mercoxit", &[("Magma", 5), ("Vitreous", 10)]),
    ("Omber", "Omber", &[("Silvery", 5), ("Golden", 10), ("Platinoid", 15)]),
    ("Plagioclase", "Plagioclase", &[("Azure", 5), ("Rich", 10), ("Sparkling", 15)]),
    ("Pyroxeres", "Pyroxeres", &[("Solid", 5), ("Viscous", 10), ("Opulent", 15)]),
    ("Scordite", "Scordite", &[("Condensed", 5), ("Massive", 10), ("Glossy", 15)]),
    ("Spodumain", "Spodumain", &[("Bright", 5), ("Gleaming", 10), ("Dazzling", 15)]),
    ("Veldspar", "Veldspar", &[("Concentrated", 5), ("Dense", 10), ("Stable", 15)]),
    ("Bitumens", "Bitumens", &[("Brimful", 15), ("Glistening", 100)]),
    ("Carnotite", "Carnotite", &[("Replete", 15), ("Glowing", 100)]),
    ("Chromite", "Chromite", &[("Lavish", 15), ("Shimmering", 100)]),
    ("Cinnabar", "Cinnabar", &[("Replete", 15), ("Glowing", 100)]),
    ("Cobaltite", "Cobaltite", &[("Copious", 15), ("Twinkling", 100)]),
    ("Coesite", "Coesite", &[("Brimful", 15), ("Glistening", 100)]),
    ("Euxenite", "Euxenite", &[("Copious", 15), ("Twinkling", 100)]),
    ("Loparite", "Loparite", &[("Bountiful", 15), ("Shining", 100)]),
    ("Monazite", "Monazite", &[("Bountiful", 15), ("Shining", 100)]),
    ("Otavite", "Otavite", &[("Lavish", 15), ("Shimmering", 100)]),
    ("Pollucite", "Pollucite", &[("Replete", 15), ("Glowing", 100)]),
    ("Scheelite", "Scheelite", &[("Copious", 15), ("Twinkling", 100)]),
    ("Sperrylite", "Sperrylite", &[("Lavish", 15), ("Shimmering", 100)]),
    ("Sylvite", "Sylvite", &[("Brimful", 15), ("Glistening", 100)]),
    ("Titanite", "Titanite", &[("Copious", 15), ("Twinkling", 100)]),
    ("Vanadinite", "Vanadinite", &[("Lavish", 15), ("Shimmering", 100)]),
    ("Xenotime", "Xenotime", &[("Bountiful", 15), ("Shining", 100)]),
    ("Ytterbite", "Ytterbite", &[("Bountiful", 15), ("Shining", 100)]),
    ("Zeolites", "Zeolites", &[("Brimful", 15), ("Glistening", 100)]),
    ("Zircon", "Zircon", &[("Replete", 15), ("Glowing", 100)]),
];

// =============================================================================
// Input Limits and Files
// =============================================================================

/// Largest raw input accepted by the appraiser, in bytes
pub const DEFAULT_MAX_INPUT_BYTES: usize = 200_000;

/// Type catalog file name inside the data directory
pub const TYPES_FILENAME: &str = "types.json";

/// Price catalog file name inside the data directory
pub const PRICES_FILENAME: &str = "prices.json";

/// Configuration file name inside the config directory
pub const CONFIG_FILENAME: &str = "config.json";

/// Application directory name under the user data/config directories
pub const APP_DIR_NAME: &str = "appraisal-engine";

// =============================================================================
// Parsing
// =============================================================================

/// Container locations recognised by the view-contents parser
pub const VIEW_CONTENTS_LOCATIONS: &[&str] = &[
    "Cargo Hold",
    "Drone Bay",
    "Fighter Bay",
    "Fleet Hangar",
    "Fuel Bay",
    "Ore Hold",
    "Ship Maintenance Bay",
    "High Slot",
    "Medium Slot",
    "Low Slot",
    "Rig Slot",
    "Subsystem Slot",
    "Implant",
    "Booster",
    "Quafe Bay",
];
