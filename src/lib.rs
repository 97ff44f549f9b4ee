//! Square tile board with an orthogonal adjacency graph and bounded flood selection
//!
//! A [`Board`] owns one `n x n` grid of [`Tile`]s built by a
//! [`spatial::grid::GridBuilder`]. Tiles link to their orthogonal neighbours
//! through generation-checked [`TileRef`] handles, and the selection
//! operations in [`algorithm`] mark single tiles, whole boards, or every
//! tile within a hop budget of a centre.

#![forbid(unsafe_code)]

/// Selection capability, bulk selection and flood selection
pub mod algorithm;
/// Configuration, errors, logging, reporting and the command line
pub mod io;
/// Tiles, grid construction, the board and tokens
pub mod spatial;

pub use algorithm::selectable::Selectable;
pub use io::error::{BoardError, Result};
pub use spatial::{Board, BoardState, Tile, TileIndex, TileRef};
