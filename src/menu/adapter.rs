//! Adapter contract between the fan menu and its collaborator.
//!
//! The menu owns the slot store but knows nothing about what a slot looks
//! like; the adapter builds each slot's visual once and restyles it when the
//! selection changes.

use egui::Color32;

/// Visual content of one slot, defined and restyled by the adapter.
///
/// The menu paints these values verbatim; it never interprets them.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotVisual {
    /// Glyph or short text drawn centered in the slot.
    pub icon: String,
    /// Background fill of the slot.
    pub fill: Color32,
    /// Color of the icon glyph.
    pub icon_color: Color32,
}

/// Styling intent passed to [`MenuAdapter::restyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStyle {
    /// The slot is not the current selection.
    Normal,
    /// The slot is the current selection (clicked state).
    Selected,
}

/// Supplies slot visuals to a [`FanMenu`](crate::menu::FanMenu).
///
/// The menu calls [`build_slot`](Self::build_slot) exactly `count()` times at
/// attach time, once per position in ascending order. Each call must produce
/// a fresh visual: slots are retained for the menu's lifetime and animated
/// individually, so there is no recycling across positions or re-renders.
///
/// The menu does not validate the adapter. An adapter whose `count()`
/// disagrees with what it can build is outside the contract.
pub trait MenuAdapter {
    /// Number of slots in the menu.
    fn count(&self) -> usize;

    /// Builds the visual for the slot at `position`.
    fn build_slot(&mut self, position: usize) -> SlotVisual;

    /// Restyles the slot at `position` for the given selection state.
    ///
    /// The adapter mutates the visual it originally built; the menu repaints
    /// it on the next frame.
    fn restyle(&mut self, position: usize, style: SlotStyle, visual: &mut SlotVisual);
}
