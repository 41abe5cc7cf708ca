use crate::cell::Cell;
use thiserror::Error;

/// Errors produced by [GridPathfinder](crate::GridPathfinder) queries. A
/// query either returns a complete path or one of these; there is no
/// partial-path output.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The cell lies outside the grid bounds.
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),
    /// The frontier drained without reaching the target.
    #[error("no path to {0} exists")]
    NoPath(Cell),
}
