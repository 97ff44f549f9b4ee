//! Plain-text board map and selected-tile listing

use std::fmt::Write as _;
use std::path::Path;

use crate::algorithm::selectable::Selectable;
use crate::io::error::{Result, WithPath, invalid_state};
use crate::spatial::board::{Board, BoardState};

/// Map glyph for an unselected tile
pub const GLYPH_IDLE: char = '.';
/// Map glyph for a tile selected in an earlier step
pub const GLYPH_SELECTED: char = 'o';
/// Map glyph for a tile selected during the current step
pub const GLYPH_SELECTED_THIS_STEP: char = '@';

/// Render the board as text, one line per `z` row, highest `z` first
///
/// # Errors
///
/// Returns [`crate::BoardError::InvalidState`] if the board is not generated
pub fn render_map(board: &Board) -> Result<String> {
    let size = board
        .size()
        .ok_or_else(|| invalid_state("render the board", BoardState::Empty))?;
    let mut map = String::with_capacity(size * (size + 1));

    for z in (0..size).rev() {
        for x in 0..size {
            let tile = board.get(x, z)?;
            let glyph = if tile.selected_this_step() && tile.is_selected() {
                GLYPH_SELECTED_THIS_STEP
            } else if tile.is_selected() {
                GLYPH_SELECTED
            } else {
                GLYPH_IDLE
            };
            map.push(glyph);
        }
        map.push('\n');
    }
    Ok(map)
}

/// One line per selected tile: `x,z name kind`
///
/// # Errors
///
/// Returns [`crate::BoardError::InvalidState`] if the board is not generated
pub fn selected_listing(board: &Board) -> Result<String> {
    let mut listing = String::new();
    for tile in board.tiles()?.filter(|tile| tile.is_selected()) {
        let index = tile.index();
        // Writing to a String cannot fail
        let _ = writeln!(
            listing,
            "{},{} {} {}",
            index.x,
            index.z,
            tile.name(),
            tile.kind()
        );
    }
    Ok(listing)
}

/// Write [`selected_listing`] to `path`
///
/// # Errors
///
/// Returns [`crate::BoardError::InvalidState`] if the board is not generated
/// and [`crate::BoardError::FileSystem`] if the file cannot be written
pub fn write_selected_listing(board: &Board, path: &Path) -> Result<()> {
    let listing = selected_listing(board)?;
    std::fs::write(path, listing).with_path(path, "write selected listing")
}
