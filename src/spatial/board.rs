//! Board ownership of the tile grid and its generation lifecycle
//!
//! The board is either `Empty` or `Generated`. Every generation gets a fresh
//! generation number, and tile references are only honoured for the number
//! they were issued with, so tearing the grid down invalidates every tile
//! and every adjacency edge at once.

use std::fmt;

use ndarray::Array2;
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::algorithm::flood::{self, FloodReport};
use crate::algorithm::selectable::Selectable;
use crate::algorithm::selection;
use crate::io::error::{BoardError, Result, invalid_state};
use crate::spatial::grid::GridBuilder;
use crate::spatial::tiles::{Tile, TileIndex, TileRef};

/// Lifecycle state of a [`Board`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardState {
    /// No tiles
    Empty,
    /// Exactly `size * size` wired tiles
    Generated,
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Generated => write!(f, "generated"),
        }
    }
}

/// Owner of one square grid of tiles
#[derive(Debug, Default)]
pub struct Board {
    tiles: Option<Array2<Tile>>,
    generation: u64,
}

impl Board {
    /// Create an empty board
    pub const fn new() -> Self {
        Self {
            tiles: None,
            generation: 0,
        }
    }

    /// Current lifecycle state
    pub const fn state(&self) -> BoardState {
        if self.tiles.is_some() {
            BoardState::Generated
        } else {
            BoardState::Empty
        }
    }

    /// Number of the most recent generation; 0 before the first one
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Edge length of the grid, if generated
    pub fn size(&self) -> Option<usize> {
        self.tiles.as_ref().map(Array2::nrows)
    }

    /// Number of tiles currently owned
    pub fn tile_count(&self) -> usize {
        self.tiles.as_ref().map_or(0, Array2::len)
    }

    /// Number of undirected adjacency edges
    pub fn edge_count(&self) -> usize {
        self.tiles.as_ref().map_or(0, |tiles| {
            tiles.iter().map(|tile| tile.adjacent().len()).sum::<usize>() / 2
        })
    }

    /// Build a new grid with the given builder
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] if the board is already
    /// generated (call [`Self::refresh`] first), or
    /// [`BoardError::Configuration`] if the builder parameters are invalid.
    /// On error the board is left untouched.
    #[instrument(skip(self, builder, rng), fields(size = builder.layout().size))]
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        builder: &GridBuilder<'_>,
        rng: &mut R,
    ) -> Result<()> {
        if self.tiles.is_some() {
            return Err(invalid_state("generate", self.state()));
        }

        let generation = self.generation + 1;
        let tiles = builder.build(generation, rng)?;

        self.generation = generation;
        self.tiles = Some(tiles);
        info!(generation, tiles = self.tile_count(), "board generated");
        Ok(())
    }

    /// Destroy every tile and return to `Empty`; no-op when already empty
    pub fn refresh(&mut self) {
        if let Some(tiles) = self.tiles.take() {
            debug!(
                generation = self.generation,
                tiles = tiles.len(),
                "board refreshed"
            );
        }
    }

    fn grid(&self, operation: &'static str) -> Result<&Array2<Tile>> {
        self.tiles
            .as_ref()
            .ok_or_else(|| invalid_state(operation, BoardState::Empty))
    }

    fn grid_mut(&mut self, operation: &'static str) -> Result<&mut Array2<Tile>> {
        self.tiles
            .as_mut()
            .ok_or_else(|| invalid_state(operation, BoardState::Empty))
    }

    /// Tile at `(x, z)`
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] before generation and
    /// [`BoardError::OutOfBounds`] outside `[0, size)`
    pub fn get(&self, x: usize, z: usize) -> Result<&Tile> {
        let grid = self.grid("read a tile")?;
        let size = grid.nrows();
        grid.get([x, z]).ok_or(BoardError::OutOfBounds {
            index: [x, z],
            size,
        })
    }

    /// Mutable tile at `(x, z)`
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] before generation and
    /// [`BoardError::OutOfBounds`] outside `[0, size)`
    pub fn get_mut(&mut self, x: usize, z: usize) -> Result<&mut Tile> {
        let grid = self.grid_mut("modify a tile")?;
        let size = grid.nrows();
        grid.get_mut([x, z]).ok_or(BoardError::OutOfBounds {
            index: [x, z],
            size,
        })
    }

    /// Replace the tile at `(x, z)` and return the previous one
    ///
    /// The board keeps ownership of placement: the incoming tile takes over
    /// the index, name, world position, owner and adjacency of the tile it
    /// replaces, so the grid invariants hold regardless of what the caller
    /// passed in. Variant, kind, terrain and selection come from `tile`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] before generation and
    /// [`BoardError::OutOfBounds`] outside `[0, size)`
    pub fn set(&mut self, x: usize, z: usize, mut tile: Tile) -> Result<Tile> {
        let slot = self.get_mut(x, z)?;
        tile.adopt_placement(slot);
        Ok(std::mem::replace(slot, tile))
    }

    /// Handle to the tile at `(x, z)` for the current generation
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] before generation and
    /// [`BoardError::OutOfBounds`] outside `[0, size)`
    pub fn tile_ref(&self, x: usize, z: usize) -> Result<TileRef> {
        let tile = self.get(x, z)?;
        Ok(TileRef::new(self.generation, tile.index()))
    }

    /// Whether `reference` resolves on this board right now
    pub fn contains(&self, reference: TileRef) -> bool {
        self.resolve(reference).is_ok()
    }

    const fn check_generation(&self, reference: TileRef, operation: &'static str) -> Result<()> {
        if self.tiles.is_none() {
            return Err(invalid_state(operation, BoardState::Empty));
        }
        if reference.generation() != self.generation {
            return Err(BoardError::StaleReference {
                reference,
                current_generation: self.generation,
            });
        }
        Ok(())
    }

    /// Tile behind a reference
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] on an empty board,
    /// [`BoardError::StaleReference`] for a handle from another generation,
    /// and [`BoardError::OutOfBounds`] for an index outside the grid
    pub fn resolve(&self, reference: TileRef) -> Result<&Tile> {
        self.check_generation(reference, "resolve a tile")?;
        let TileIndex { x, z } = reference.index();
        self.get(x, z)
    }

    /// Mutable tile behind a reference
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::resolve`]
    pub fn resolve_mut(&mut self, reference: TileRef) -> Result<&mut Tile> {
        self.check_generation(reference, "resolve a tile")?;
        let TileIndex { x, z } = reference.index();
        self.get_mut(x, z)
    }

    /// Tiles in scan order (`x` outer, `z` inner)
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] before generation
    pub fn tiles(&self) -> Result<impl Iterator<Item = &Tile>> {
        Ok(self.grid("iterate tiles")?.iter())
    }

    /// Mutable tiles in scan order
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] before generation
    pub fn tiles_mut(&mut self) -> Result<impl Iterator<Item = &mut Tile>> {
        Ok(self.grid_mut("iterate tiles")?.iter_mut())
    }

    /// Select the tile behind `reference`
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::resolve`]
    pub fn select(&mut self, reference: TileRef) -> Result<()> {
        self.resolve_mut(reference).map(Selectable::select)
    }

    /// Deselect the tile behind `reference`
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::resolve`]
    pub fn deselect(&mut self, reference: TileRef) -> Result<()> {
        self.resolve_mut(reference).map(Selectable::deselect)
    }

    /// Toggle the tile behind `reference`, returning whether it is now selected
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::resolve`]
    pub fn toggle_select(&mut self, reference: TileRef) -> Result<bool> {
        self.resolve_mut(reference).map(Selectable::toggle_select)
    }

    /// Whether the tile behind `reference` is selected
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::resolve`]
    pub fn is_selected(&self, reference: TileRef) -> Result<bool> {
        self.resolve(reference).map(Selectable::is_selected)
    }

    /// Select every tile
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] before generation
    pub fn select_all_tiles(&mut self) -> Result<()> {
        selection::select_all(self)
    }

    /// Deselect every tile
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] before generation
    pub fn deselect_all_tiles(&mut self) -> Result<()> {
        selection::deselect_all(self)
    }

    /// Snapshot of the selected tiles in scan order
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] before generation
    pub fn selected_tiles(&self) -> Result<Vec<TileRef>> {
        selection::selected_tiles(self)
    }

    /// Close the current step on every tile
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] before generation
    pub fn end_of_step(&mut self) -> Result<()> {
        selection::end_of_step(self)
    }

    /// Exhaustive flood-select, see [`flood::select_area`]
    ///
    /// # Errors
    ///
    /// Same conditions as [`flood::select_area`]
    pub fn select_area(&mut self, center: Option<TileRef>, radius: usize) -> Result<FloodReport> {
        flood::select_area(self, center, radius)
    }

    /// Breadth-first flood-select, see [`flood::select_within`]
    ///
    /// # Errors
    ///
    /// Same conditions as [`flood::select_within`]
    pub fn select_within(&mut self, center: Option<TileRef>, radius: usize) -> Result<FloodReport> {
        flood::select_within(self, center, radius)
    }
}
