use thiserror::Error;

use crate::{dims::Dims, grid::CellWall};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}, both must be positive integers")]
    InvalidDimension { width: String, height: String },
    #[error("cell {0:?} is outside of the grid")]
    InvalidCell(Dims),
    #[error("cells {0:?} and {1:?} are not orthogonally adjacent")]
    NotAdjacent(Dims, Dims),
    #[error("no path found")]
    NoPathFound,
    #[error("wall {1:?} of cell {0:?} has no matching wall on its neighbor")]
    AsymmetricWall(Dims, CellWall),
    #[error("malformed maze export: {0}")]
    MalformedExport(String),
}

impl MazeError {
    pub fn invalid_dimension(width: impl ToString, height: impl ToString) -> Self {
        MazeError::InvalidDimension {
            width: width.to_string(),
            height: height.to_string(),
        }
    }
}

/// Parses textual width and height, rejecting anything that isn't a positive integer.
pub fn parse_size(width: &str, height: &str) -> Result<Dims, MazeError> {
    fn parse(text: &str) -> Option<i32> {
        text.trim().parse::<i32>().ok().filter(|&v| v > 0)
    }

    match (parse(width), parse(height)) {
        (Some(w), Some(h)) => Ok(Dims(w, h)),
        _ => Err(MazeError::invalid_dimension(width.trim(), height.trim())),
    }
}
