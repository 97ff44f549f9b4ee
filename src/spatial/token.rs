//! Board tokens: selectable pieces that stand on a tile

use crate::algorithm::selectable::{Selectable, SelectionState};
use crate::io::error::Result;
use crate::spatial::board::Board;
use crate::spatial::tiles::TileRef;

/// Context menu attached to a token; visible while the token is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextMenu {
    visible: bool,
}

impl ContextMenu {
    /// Show the menu
    pub const fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the menu
    pub const fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the menu is shown
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

/// A named piece on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    name: String,
    selection: SelectionState,
    menu: ContextMenu,
    current_tile: Option<TileRef>,
}

impl Token {
    /// Create an unplaced, unselected token
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selection: SelectionState::default(),
            menu: ContextMenu::default(),
            current_tile: None,
        }
    }

    /// Token name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token's context menu
    pub const fn menu(&self) -> &ContextMenu {
        &self.menu
    }

    /// Tile the token was last placed on
    pub const fn current_tile(&self) -> Option<TileRef> {
        self.current_tile
    }

    /// Stand the token on `tile`
    ///
    /// # Errors
    ///
    /// Returns an error if `tile` does not resolve on `board`
    pub fn place_on(&mut self, board: &Board, tile: TileRef) -> Result<()> {
        board.resolve(tile)?;
        self.current_tile = Some(tile);
        Ok(())
    }

    /// Whether the token's tile still exists on `board`
    ///
    /// Becomes false once the board is refreshed.
    pub fn is_on_board(&self, board: &Board) -> bool {
        self.current_tile.is_some_and(|tile| board.contains(tile))
    }
}

impl Selectable for Token {
    fn selection(&self) -> &SelectionState {
        &self.selection
    }

    fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    fn select(&mut self) {
        self.selection.select();
        self.menu.show();
    }

    fn deselect(&mut self) {
        self.selection.deselect();
        self.menu.hide();
    }

    fn toggle_select(&mut self) -> bool {
        let selected = self.selection.toggle();
        if selected {
            self.menu.show();
        } else {
            self.menu.hide();
        }
        selected
    }
}
