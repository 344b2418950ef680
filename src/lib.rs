//! Appraisal Engine Library
//!
//! A Rust library for turning free-form, game-generated item text into priced
//! appraisals.
//!
//! This library provides tools for:
//! - Recognising a dozen clipboard formats (asset lists, contracts, fittings, kill
//!   reports, scans, wallet exports, ...) without a declared format
//! - Normalising every recognised line into one canonical, de-duplicated item list
//! - Pricing items against swappable market data, including ore-yield and
//!   blueprint-copy valuation rules
//! - Decomposing items into base materials through refining and reprocessing to
//!   compute a buyback valuation
//! - Comprehensive error handling with local recovery for missing data

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod appraiser;
    pub mod models;
    pub mod services {
        pub mod buyback;
        pub mod normalizer;
        pub mod parsers;
        pub mod price_catalog;
        pub mod pricing;
        pub mod type_catalog;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::appraiser::{Appraiser, CatalogSnapshot};
pub use app::models::{Appraisal, AppraisalItem, CanonicalItem, ItemsAndTotals, Totals};
pub use app::models::prices::{PriceStats, Prices};
pub use config::AppraisalConfig;

/// Result type alias for the appraisal engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for appraisal operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No parser recognised any line of the input
    #[error("No valid lines found ({unparsed_lines} unparsed lines)")]
    NoValidInput { unparsed_lines: usize },

    /// An item name does not resolve in the type catalog
    #[error("Type not found: {name}")]
    TypeNotFound { name: String },

    /// A type has no price in the requested market
    #[error("No price for type {type_id} in market '{market}'")]
    PriceNotFound { market: String, type_id: i64 },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Catalog loading or consistency error
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create a no-valid-input error
    pub fn no_valid_input(unparsed_lines: usize) -> Self {
        Self::NoValidInput { unparsed_lines }
    }

    /// Create a type not found error
    pub fn type_not_found(name: impl Into<String>) -> Self {
        Self::TypeNotFound { name: name.into() }
    }

    /// Create a price not found error
    pub fn price_not_found(market: impl Into<String>, type_id: i64) -> Self {
        Self::PriceNotFound {
            market: market.into(),
            type_id,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a catalog error
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
