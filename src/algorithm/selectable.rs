//! Selection capability shared by tiles and board tokens

/// Selection flags of one selectable object
///
/// `selected_this_step` is raised by every select and cleared only by
/// [`SelectionState::end_of_step`], so it is true exactly during the
/// discrete step in which the object was last selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: bool,
    selected_this_step: bool,
}

impl SelectionState {
    /// Mark selected and raise the step flag
    pub const fn select(&mut self) {
        self.selected = true;
        self.selected_this_step = true;
    }

    /// Clear the selection, leaving the step flag alone
    pub const fn deselect(&mut self) {
        self.selected = false;
    }

    /// Flip the selection and return the new value
    pub const fn toggle(&mut self) -> bool {
        self.selected = !self.selected;
        if self.selected {
            self.selected_this_step = true;
        }
        self.selected
    }

    /// Whether currently selected
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether selected during the current step
    pub const fn selected_this_step(&self) -> bool {
        self.selected_this_step
    }

    /// Close the current step
    pub const fn end_of_step(&mut self) {
        self.selected_this_step = false;
    }
}

/// Anything that can be selected on the board
///
/// Implementors only expose their [`SelectionState`]; the provided methods
/// carry the selection rules. Variants that attach extra behaviour to
/// selection (such as a token's context menu) override the mutating methods
/// and call through to the state themselves.
pub trait Selectable {
    /// Borrow the selection flags
    fn selection(&self) -> &SelectionState;

    /// Mutably borrow the selection flags
    fn selection_mut(&mut self) -> &mut SelectionState;

    /// Select; idempotent apart from re-raising the step flag
    fn select(&mut self) {
        self.selection_mut().select();
    }

    /// Deselect; idempotent
    fn deselect(&mut self) {
        self.selection_mut().deselect();
    }

    /// Flip selection and return whether the object is now selected
    fn toggle_select(&mut self) -> bool {
        self.selection_mut().toggle()
    }

    /// Select when `select` is true, deselect otherwise
    fn switch(&mut self, select: bool) {
        if select {
            self.select();
        } else {
            self.deselect();
        }
    }

    /// Whether currently selected
    fn is_selected(&self) -> bool {
        self.selection().is_selected()
    }

    /// Whether selected during the current step
    fn selected_this_step(&self) -> bool {
        self.selection().selected_this_step()
    }

    /// Clear the per-step flag
    fn end_of_step(&mut self) {
        self.selection_mut().end_of_step();
    }
}
