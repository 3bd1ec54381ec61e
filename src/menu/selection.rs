//! Selection state for the fan menu.
//!
//! Tracks which slot is currently selected and which one was selected
//! immediately before the latest click, so the menu can tell the adapter to
//! swap the highlight between the two.

/// Current and previous selected slot positions.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Currently selected slot position
    current_selected: Option<usize>,
    /// Position selected immediately before the latest click, if different
    previous_selected: Option<usize>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self {
            current_selected: None,
            previous_selected: None,
        }
    }

    /// Clears all selection state.
    pub fn clear(&mut self) {
        self.current_selected = None;
        self.previous_selected = None;
    }

    // ===== Selection Queries =====

    /// Returns the currently selected slot position, if any.
    pub fn current_selected(&self) -> Option<usize> {
        self.current_selected
    }

    /// Returns the previously selected slot position, if any.
    ///
    /// This is the value `current_selected` held immediately before the
    /// latest click, or `None` if the click landed on the slot that was
    /// already selected.
    pub fn previous_selected(&self) -> Option<usize> {
        self.previous_selected
    }

    // ===== Selection Mutations =====

    /// Records a click on `position`.
    ///
    /// Returns the slot that should be restyled back to normal, if any.
    pub fn record_click(&mut self, position: usize) -> Option<usize> {
        if self.current_selected != Some(position) {
            self.previous_selected = self.current_selected;
        } else {
            self.previous_selected = None;
        }
        self.current_selected = Some(position);
        self.previous_selected
    }

    /// Selects `position` directly, without recording a previous selection.
    ///
    /// Used for the programmatic default-selection path at startup.
    pub fn select_directly(&mut self, position: usize) {
        self.current_selected = Some(position);
    }
}
