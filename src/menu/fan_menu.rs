//! The fan-fold menu panel.
//!
//! [`FanMenu`] owns the slot store, the per-direction transition drivers, the
//! status gate, and the selection state, and wires them into an egui panel.
//! Open and close requests return immediately; the staggered animation
//! advances in [`tick`](FanMenu::tick), which the egui integration calls once
//! per frame with the frame delta.

use serde::{Deserialize, Serialize};

use crate::menu::adapter::{MenuAdapter, SlotStyle};
use crate::menu::driver::{DriverTick, TransitionDriver};
use crate::menu::selection::SelectionState;
use crate::menu::sequencer::{SequenceKind, Sequencer};
use crate::menu::slot::{Pivot, Slot, SlotProperty};
use crate::menu::status::{MenuStatus, StatusGate};
use crate::easing::Easing;
use crate::theme::adjust_brightness;

/// Layout direction of the menu strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Slots stacked top to bottom, folding about their leading vertical edge.
    #[default]
    Vertical,
    /// Slots laid out left to right, folding about their bottom edge.
    Horizontal,
}

/// Construction-time configuration of a [`FanMenu`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Layout direction. Default vertical.
    pub orientation: Orientation,
    /// Flips which physical end of the strip is the visual front, reversing
    /// the traversal order of every sequence. Default false.
    pub reverse: bool,
    /// Duration of one slot's transition in milliseconds (not of a whole
    /// sequence). Default 40.
    pub step_duration_ms: u32,
    /// Easing curve for each slot transition.
    pub easing: Easing,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            reverse: false,
            step_duration_ms: 40,
            easing: Easing::AccelerateDecelerate,
        }
    }
}

/// Receives sequence lifecycle notifications.
///
/// Both hooks fire exactly once per sequence, including trivial sequences
/// over an empty range, and never per item.
pub trait SequenceObserver {
    /// A sequence was admitted by the status gate and is about to run.
    fn on_sequence_start(&mut self, kind: SequenceKind);
    /// The whole sequence completed and the menu settled.
    fn on_sequence_end(&mut self, kind: SequenceKind);
}

/// Visual extent of one slot along the menu axis, in points.
const SLOT_EXTENT: f32 = 48.0;
/// Gap between slots, in points.
const SLOT_GAP: f32 = 4.0;
/// Corner radius of a slot's background.
const SLOT_CORNER: f32 = 6.0;
/// Base icon glyph size, in points.
const ICON_SIZE: f32 = 20.0;

/// An expandable/collapsible strip of adapter-supplied slots with a
/// staggered open/close animation.
pub struct FanMenu {
    config: MenuConfig,
    adapter: Box<dyn MenuAdapter>,
    slots: Vec<Slot>,
    gate: StatusGate,
    // One driver per direction, live only while its sequence runs; the same
    // instance is retargeted from slot to slot across the sequence.
    open_driver: Option<TransitionDriver>,
    close_driver: Option<TransitionDriver>,
    sequence: Option<Sequencer>,
    pivots_assigned: bool,
    selection: SelectionState,
    observer: Option<Box<dyn SequenceObserver>>,
    #[cfg(test)]
    pivot_runs: u32,
}

impl FanMenu {
    /// Creates a menu and attaches the adapter.
    ///
    /// The adapter's `build_slot` is invoked exactly `count()` times, once
    /// per position in ascending order; the resulting slots are retained for
    /// the menu's lifetime.
    pub fn new(config: MenuConfig, mut adapter: Box<dyn MenuAdapter>) -> Self {
        let count = adapter.count();
        let mut slots = Vec::with_capacity(count);
        for position in 0..count {
            slots.push(Slot::new(adapter.build_slot(position)));
        }
        Self {
            config,
            adapter,
            slots,
            gate: StatusGate::new(),
            open_driver: None,
            close_driver: None,
            sequence: None,
            pivots_assigned: false,
            selection: SelectionState::new(),
            observer: None,
            #[cfg(test)]
            pivot_runs: 0,
        }
    }

    /// Registers the sequence lifecycle observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: Box<dyn SequenceObserver>) {
        self.observer = Some(observer);
    }

    /// The construction-time configuration.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Number of slots in the store.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The slot at `position`, if within bounds.
    pub fn slot(&self, position: usize) -> Option<&Slot> {
        self.slots.get(position)
    }

    /// The current panel status.
    pub fn status(&self) -> MenuStatus {
        self.gate.status()
    }

    /// The slot currently mid-transition, if a sequence is in flight.
    pub fn animating_slot(&self) -> Option<usize> {
        if self.gate.status() != MenuStatus::Animating {
            return None;
        }
        let driver = match self.sequence.as_ref()?.kind() {
            SequenceKind::Open => self.open_driver.as_ref(),
            SequenceKind::Close => self.close_driver.as_ref(),
        };
        driver.map(TransitionDriver::target)
    }

    /// The selection bookkeeping.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    // ===== Commands =====

    /// Opens the whole menu. Sugar for `open_range(0, count - 1)`.
    pub fn open(&mut self) {
        let end = self.slots.len() as isize - 1;
        self.open_range(0, end);
    }

    /// Opens the slots in `start_index..=end_index`.
    ///
    /// Indices are clamped to the store bounds; an empty range after
    /// clamping completes trivially. Rejected while already open or while a
    /// sequence is in flight.
    pub fn open_range(&mut self, start_index: isize, end_index: isize) {
        self.start_sequence(SequenceKind::Open, start_index, end_index);
    }

    /// Closes the whole menu. Sugar for `close_range(0, count - 1)`.
    pub fn close(&mut self) {
        let end = self.slots.len() as isize - 1;
        self.close_range(0, end);
    }

    /// Closes the slots in `start_index..=end_index`.
    ///
    /// Same clamping and rejection rules as [`open_range`](Self::open_range).
    pub fn close_range(&mut self, start_index: isize, end_index: isize) {
        self.start_sequence(SequenceKind::Close, start_index, end_index);
    }

    /// Marks `position` as the selected slot without touching the previous
    /// selection or running any sequence.
    ///
    /// Used for the initial/default selection at startup.
    pub fn make_slot_selected(&mut self, position: usize) {
        if position >= self.slots.len() {
            return;
        }
        self.selection.select_directly(position);
        self.restyle(position, SlotStyle::Selected);
    }

    /// Handles a click on the slot at `position`.
    ///
    /// Updates the selection, swaps the highlight via the adapter (new slot
    /// restyled selected first, then the previous one back to normal), and,
    /// when `close_range` is given, triggers a partial close over that range.
    pub fn notify_slot_clicked(&mut self, position: usize, close_range: Option<(isize, isize)>) {
        if position >= self.slots.len() {
            return;
        }
        let to_restore = self.selection.record_click(position);
        self.restyle(position, SlotStyle::Selected);
        if let Some(previous) = to_restore {
            self.restyle(previous, SlotStyle::Normal);
        }
        if let Some((start, end)) = close_range {
            self.close_range(start, end);
        }
    }

    // ===== Sequence machinery =====

    fn start_sequence(&mut self, kind: SequenceKind, start_index: isize, end_index: isize) {
        // Pivots are assigned before any sequence can run, even one the gate
        // rejects; the call is a no-op after the first.
        self.assign_pivots();
        if !self.gate.try_start(kind) {
            return;
        }

        let count = self.slots.len();
        let start = start_index.max(0);
        let end = end_index.min(count as isize - 1);
        if count == 0 || start > end {
            // Nothing to animate: the sequence is trivially complete.
            self.notify_start(kind);
            self.notify_end(kind);
            self.gate.settle(kind);
            return;
        }

        let sequencer = Sequencer::new(kind, start as usize, end as usize, self.config.reverse, count);
        let (from, to) = match kind {
            SequenceKind::Open => (90.0, 0.0),
            SequenceKind::Close => (0.0, 90.0),
        };
        let driver = TransitionDriver::run(
            self.fold_property(),
            from,
            to,
            self.config.step_duration_ms,
            self.config.easing,
            sequencer.first(),
        );
        match kind {
            SequenceKind::Open => self.open_driver = Some(driver),
            SequenceKind::Close => self.close_driver = Some(driver),
        }
        self.sequence = Some(sequencer);
        self.notify_start(kind);
    }

    /// Advances the in-flight sequence by `dt` seconds.
    ///
    /// One slot transitions at a time: when the driver finishes a step, the
    /// cursor advances and the same driver is retargeted at the next slot;
    /// when the range is exhausted the driver is dropped, the end
    /// notification fires, and the status settles to the terminal state.
    pub fn tick(&mut self, dt: f32) {
        if self.gate.status() != MenuStatus::Animating {
            return;
        }
        let Some(kind) = self.sequence.as_ref().map(Sequencer::kind) else {
            return;
        };

        let outcome = {
            let driver = match kind {
                SequenceKind::Open => self.open_driver.as_mut(),
                SequenceKind::Close => self.close_driver.as_mut(),
            };
            let Some(driver) = driver else {
                return;
            };
            let target = driver.target();
            let property = driver.property();
            match driver.tick(dt) {
                DriverTick::Idle => return,
                DriverTick::Running(value) => (target, property, value, false),
                DriverTick::Finished(value) => (target, property, value, true),
            }
        };

        let (target, property, value, finished) = outcome;
        if let Some(slot) = self.slots.get_mut(target) {
            slot.set_rotation(property, value);
        }
        if !finished {
            return;
        }

        match self.sequence.as_mut().and_then(Sequencer::advance) {
            Some(next) => {
                let driver = match kind {
                    SequenceKind::Open => self.open_driver.as_mut(),
                    SequenceKind::Close => self.close_driver.as_mut(),
                };
                if let Some(driver) = driver {
                    driver.retarget(next);
                }
            }
            None => {
                match kind {
                    SequenceKind::Open => self.open_driver = None,
                    SequenceKind::Close => self.close_driver = None,
                }
                self.sequence = None;
                self.notify_end(kind);
                self.gate.settle(kind);
            }
        }
    }

    fn fold_property(&self) -> SlotProperty {
        match self.config.orientation {
            Orientation::Vertical => SlotProperty::RotationY,
            Orientation::Horizontal => SlotProperty::RotationX,
        }
    }

    fn assign_pivots(&mut self) {
        if self.pivots_assigned {
            return;
        }
        let pivot = match self.config.orientation {
            Orientation::Vertical => Pivot::TOP_LEADING,
            Orientation::Horizontal => Pivot::BOTTOM_LEADING,
        };
        for slot in &mut self.slots {
            slot.assign_pivot(pivot);
        }
        self.pivots_assigned = true;
        #[cfg(test)]
        {
            self.pivot_runs += 1;
        }
    }

    fn restyle(&mut self, position: usize, style: SlotStyle) {
        let Some(slot) = self.slots.get_mut(position) else {
            return;
        };
        self.adapter.restyle(position, style, slot.visual_mut());
    }

    fn notify_start(&mut self, kind: SequenceKind) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_sequence_start(kind);
        }
    }

    fn notify_end(&mut self, kind: SequenceKind) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_sequence_end(kind);
        }
    }

    // ===== egui integration =====

    /// Renders the menu strip and advances the in-flight sequence.
    ///
    /// Returns the position of the slot clicked this frame, if any. The
    /// caller decides what a click means (typically
    /// [`notify_slot_clicked`](Self::notify_slot_clicked)).
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<usize> {
        let dt = ui.input(|i| i.stable_dt).min(0.1);
        self.tick(dt);
        if self.gate.status() == MenuStatus::Animating {
            ui.ctx().request_repaint();
        }

        let property = self.fold_property();
        let mut clicked = None;
        match self.config.orientation {
            Orientation::Vertical => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for position in 0..self.slots.len() {
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(ui.available_width(), SLOT_EXTENT),
                            egui::Sense::click(),
                        );
                        if response.clicked() {
                            clicked = Some(position);
                        }
                        self.paint_slot(ui, position, rect, property);
                        ui.add_space(SLOT_GAP);
                    }
                });
            }
            Orientation::Horizontal => {
                egui::ScrollArea::horizontal().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        for position in 0..self.slots.len() {
                            let (rect, response) = ui.allocate_exact_size(
                                egui::vec2(SLOT_EXTENT, ui.available_height()),
                                egui::Sense::click(),
                            );
                            if response.clicked() {
                                clicked = Some(position);
                            }
                            self.paint_slot(ui, position, rect, property);
                            ui.add_space(SLOT_GAP);
                        }
                    });
                });
            }
        }
        clicked
    }

    /// Paints one slot folded about its pivot by the projected scale of its
    /// current rotation. A fully folded slot (90 degrees) paints nothing.
    fn paint_slot(&self, ui: &egui::Ui, position: usize, rect: egui::Rect, property: SlotProperty) {
        let Some(slot) = self.slots.get(position) else {
            return;
        };
        let scale = slot.fold_scale(property);
        if scale <= f32::EPSILON {
            return;
        }

        let pivot = slot.pivot().unwrap_or_default();
        let painted = match property {
            SlotProperty::RotationY => {
                // Fold about the vertical edge through the pivot
                let anchor = rect.min.x + pivot.x * rect.width();
                egui::Rect::from_min_max(
                    egui::pos2(anchor + (rect.min.x - anchor) * scale, rect.min.y),
                    egui::pos2(anchor + (rect.max.x - anchor) * scale, rect.max.y),
                )
            }
            SlotProperty::RotationX => {
                // Fold about the horizontal edge through the pivot
                let anchor = rect.min.y + pivot.y * rect.height();
                egui::Rect::from_min_max(
                    egui::pos2(rect.min.x, anchor + (rect.min.y - anchor) * scale),
                    egui::pos2(rect.max.x, anchor + (rect.max.y - anchor) * scale),
                )
            }
        };

        let visual = slot.visual();
        let painter = ui.painter();
        painter.rect_filled(painted, SLOT_CORNER, visual.fill);
        if self.selection.current_selected() == Some(position) {
            painter.rect_stroke(
                painted,
                SLOT_CORNER,
                egui::Stroke::new(2.0, adjust_brightness(visual.fill, 1.4)),
                egui::StrokeKind::Inside,
            );
        }
        painter.text(
            painted.center(),
            egui::Align2::CENTER_CENTER,
            &visual.icon,
            egui::FontId::proportional(ICON_SIZE * scale),
            visual.icon_color,
        );
    }
}
