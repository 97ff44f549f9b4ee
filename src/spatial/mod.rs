//! Spatial data structures for the board
//!
//! This module contains:
//! - Tile data and non-owning tile references
//! - Grid construction and adjacency wiring
//! - The board and its generation lifecycle
//! - Selectable board tokens

/// Board ownership and lifecycle
pub mod board;
/// Grid construction and adjacency wiring
pub mod grid;
/// Tile data structures and references
pub mod tiles;
/// Selectable pieces standing on tiles
pub mod token;

pub use board::{Board, BoardState};
pub use tiles::{Tile, TileIndex, TileRef};
