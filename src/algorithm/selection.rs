//! Stateless selection operations over single items and whole boards
//!
//! Mutation and reconciliation are kept apart: every select issued during a
//! step must be applied before [`end_of_step`] runs for that step, and
//! [`end_of_step`] must run before any mutation of the next step.

use tracing::{debug, instrument};

use crate::algorithm::selectable::Selectable;
use crate::io::error::Result;
use crate::spatial::board::Board;
use crate::spatial::tiles::TileRef;

/// Select one item
pub fn select<S: Selectable + ?Sized>(item: &mut S) {
    item.select();
}

/// Deselect one item
pub fn deselect<S: Selectable + ?Sized>(item: &mut S) {
    item.deselect();
}

/// Toggle one item, returning whether it is now selected
pub fn toggle_select<S: Selectable + ?Sized>(item: &mut S) -> bool {
    item.toggle_select()
}

/// Select or deselect one item to match `selected`
pub fn switch<S: Selectable + ?Sized>(item: &mut S, selected: bool) {
    item.switch(selected);
}

/// Whether one item is selected
pub fn is_selected<S: Selectable + ?Sized>(item: &S) -> bool {
    item.is_selected()
}

/// Select every tile on the board
///
/// # Errors
///
/// Returns [`crate::BoardError::InvalidState`] if the board is not generated
#[instrument(skip(board))]
pub fn select_all(board: &mut Board) -> Result<()> {
    board.tiles_mut()?.for_each(Selectable::select);
    Ok(())
}

/// Deselect every tile on the board
///
/// # Errors
///
/// Returns [`crate::BoardError::InvalidState`] if the board is not generated
#[instrument(skip(board))]
pub fn deselect_all(board: &mut Board) -> Result<()> {
    board.tiles_mut()?.for_each(Selectable::deselect);
    Ok(())
}

/// Handles to every selected tile, in scan order
///
/// The result is a snapshot: later selection changes do not affect it.
///
/// # Errors
///
/// Returns [`crate::BoardError::InvalidState`] if the board is not generated
pub fn selected_tiles(board: &Board) -> Result<Vec<TileRef>> {
    let generation = board.generation();
    Ok(board
        .tiles()?
        .filter(|tile| tile.is_selected())
        .map(|tile| TileRef::new(generation, tile.index()))
        .collect())
}

/// Clear the per-step flag on every tile
///
/// # Errors
///
/// Returns [`crate::BoardError::InvalidState`] if the board is not generated
pub fn end_of_step(board: &mut Board) -> Result<()> {
    let mut cleared = 0_usize;
    for tile in board.tiles_mut()? {
        if tile.selected_this_step() {
            cleared += 1;
        }
        tile.end_of_step();
    }
    debug!(cleared, "step closed");
    Ok(())
}
