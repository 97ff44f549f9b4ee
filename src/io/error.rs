//! Error types and context management for board operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::board::BoardState;
use crate::spatial::tiles::TileRef;

/// Main error type for all board operations
#[derive(Debug)]
pub enum BoardError {
    /// Generation parameters are unusable
    ///
    /// Raised before any tile is created, so a failed generation never
    /// leaves a partial grid behind.
    Configuration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Operation is not allowed in the board's current lifecycle state
    InvalidState {
        /// Operation that was attempted
        operation: &'static str,
        /// State the board was in at the time
        state: BoardState,
    },

    /// Grid index outside `[0, size)` on either axis
    OutOfBounds {
        /// Requested `[x, z]` index
        index: [usize; 2],
        /// Edge length of the generated grid
        size: usize,
    },

    /// Tile reference issued by an earlier board generation
    StaleReference {
        /// The rejected reference
        reference: TileRef,
        /// Generation currently owned by the board
        current_generation: u64,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidState { operation, state } => {
                write!(f, "Cannot {operation} while the board is {state}")
            }
            Self::OutOfBounds { index, size } => {
                write!(
                    f,
                    "Tile index [{},{}] is out of bounds (grid size {size}x{size})",
                    index[0], index[1]
                )
            }
            Self::StaleReference {
                reference,
                current_generation,
            } => {
                write!(
                    f,
                    "Tile reference {reference} belongs to generation {} but the board is at generation {current_generation}",
                    reference.generation()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for board results
pub type Result<T> = std::result::Result<T, BoardError>;

/// Attaches a path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`BoardError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| BoardError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for BoardError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BoardError {
    BoardError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a lifecycle error for an operation attempted in the wrong state
pub const fn invalid_state(operation: &'static str, state: BoardState) -> BoardError {
    BoardError::InvalidState { operation, state }
}
