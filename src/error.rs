//! Error types for catalog construction and boundary data.
//!
//! "No match" is never an error: matching returns `Option`/`Vec`. Errors
//! are reserved for broken configuration and malformed external data.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate figure family: {0}")]
    DuplicateFamily(String),

    #[error("Duplicate spell family: {0}")]
    DuplicateSpellFamily(String),

    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Invalid spell: {0}")]
    InvalidSpell(String),

    #[error("Malformed spell data: {0}")]
    MalformedSpell(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
