// crates/citydb-core/src/error.rs

//! Error types for the loaders.
//!
//! Ranking and rendering never fail; only reading the external tables can.

use thiserror::Error;

/// Errors raised while loading the catalog, price table or exchange rates.
#[derive(Debug, Error)]
pub enum CityDbError {
    /// A payload file could not be found or opened.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP backend could not be reached or answered with an error status.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The payload parsed but does not have the expected shape.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, CityDbError>;
