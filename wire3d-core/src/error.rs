/// Error types for wire3d
use thiserror::Error;

/// Errors reported by drawing operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge list needs at least one full pair of points
    #[error("need at least 2 points to draw a line, found {found}")]
    NotEnoughPoints { found: usize },
}

/// Result type alias for wire3d operations
pub type Result<T> = std::result::Result<T, Error>;
