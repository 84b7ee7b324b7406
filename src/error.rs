//! Error types for graph construction and batching runs.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("No edge between {from} and {to}")]
    NoSuchEdge { from: String, to: String },
}
