//! Error types for lookups that demand a value.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("lookup failed for key {0}: no entry")]
    NotFound(String),

    #[error("lookup failed for key {0}: entry maps to no value")]
    Absent(String),
}

pub type Result<T> = std::result::Result<T, Error>;
