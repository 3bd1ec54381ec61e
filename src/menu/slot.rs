//! Slot storage: per-slot rotation state, pivot anchor, and adapter visual.

use crate::menu::adapter::SlotVisual;

/// The rotation scalar a transition driver animates on a slot.
///
/// Which property is used depends on the menu orientation: a vertical menu
/// folds slots about their leading vertical edge (`RotationY`), a horizontal
/// menu folds them about their bottom edge (`RotationX`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotProperty {
    /// Rotation about the slot's leading vertical edge, in degrees.
    RotationY,
    /// Rotation about the slot's bottom edge, in degrees.
    RotationX,
}

/// Normalized anchor point within a slot's rectangle, `(0, 0)` = top-left,
/// `(1, 1)` = bottom-right. Rotation transitions fold the slot about this
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pivot {
    pub x: f32,
    pub y: f32,
}

impl Pivot {
    /// Top-left corner anchor, used by vertical menus.
    pub const TOP_LEADING: Self = Self { x: 0.0, y: 0.0 };
    /// Bottom-left corner anchor, used by horizontal menus so slots fan from
    /// the baseline.
    pub const BOTTOM_LEADING: Self = Self { x: 0.0, y: 1.0 };
}

/// One renderable unit in the menu's ordered collection.
///
/// Created once per position at attach time and retained for the menu's
/// lifetime. Starts fully revealed (rotation 0) because a menu is initially
/// open.
#[derive(Debug, Clone)]
pub struct Slot {
    visual: SlotVisual,
    rotation_y: f32,
    rotation_x: f32,
    pivot: Option<Pivot>,
}

impl Slot {
    /// Wraps an adapter-built visual in a fully revealed slot.
    pub fn new(visual: SlotVisual) -> Self {
        Self {
            visual,
            rotation_y: 0.0,
            rotation_x: 0.0,
            pivot: None,
        }
    }

    /// The adapter-owned visual content.
    pub fn visual(&self) -> &SlotVisual {
        &self.visual
    }

    /// Mutable access for adapter restyling.
    pub fn visual_mut(&mut self) -> &mut SlotVisual {
        &mut self.visual
    }

    /// Current value of the given rotation property, in degrees.
    pub fn rotation(&self, property: SlotProperty) -> f32 {
        match property {
            SlotProperty::RotationY => self.rotation_y,
            SlotProperty::RotationX => self.rotation_x,
        }
    }

    /// Writes a rotation value, as driven by a transition driver.
    pub fn set_rotation(&mut self, property: SlotProperty, degrees: f32) {
        match property {
            SlotProperty::RotationY => self.rotation_y = degrees,
            SlotProperty::RotationX => self.rotation_x = degrees,
        }
    }

    /// The assigned pivot anchor, if pivot assignment has run.
    pub fn pivot(&self) -> Option<Pivot> {
        self.pivot
    }

    /// Assigns the pivot anchor. A slot's pivot is set once per lifetime;
    /// later calls are ignored.
    pub fn assign_pivot(&mut self, pivot: Pivot) {
        if self.pivot.is_none() {
            self.pivot = Some(pivot);
        }
    }

    /// Projected extent of the slot along its fold axis, in `[0, 1]`.
    ///
    /// This is the 2D projection of an edge rotation: fully revealed at 0
    /// degrees, invisible at 90.
    pub fn fold_scale(&self, property: SlotProperty) -> f32 {
        self.rotation(property).to_radians().cos().max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    fn test_visual() -> SlotVisual {
        SlotVisual {
            icon: "A".to_string(),
            fill: Color32::from_rgb(10, 20, 30),
            icon_color: Color32::WHITE,
        }
    }

    #[test]
    fn rotations_are_independent_per_property() {
        let mut slot = Slot::new(test_visual());
        slot.set_rotation(SlotProperty::RotationY, 45.0);
        assert_eq!(slot.rotation(SlotProperty::RotationY), 45.0);
        assert_eq!(slot.rotation(SlotProperty::RotationX), 0.0);
    }

    #[test]
    fn pivot_is_assigned_at_most_once() {
        let mut slot = Slot::new(test_visual());
        assert_eq!(slot.pivot(), None);

        slot.assign_pivot(Pivot::TOP_LEADING);
        assert_eq!(slot.pivot(), Some(Pivot::TOP_LEADING));

        slot.assign_pivot(Pivot::BOTTOM_LEADING);
        assert_eq!(slot.pivot(), Some(Pivot::TOP_LEADING));
    }

    #[test]
    fn fold_scale_projection_endpoints() {
        let mut slot = Slot::new(test_visual());
        assert!((slot.fold_scale(SlotProperty::RotationY) - 1.0).abs() < 1e-6);

        slot.set_rotation(SlotProperty::RotationY, 90.0);
        assert!(slot.fold_scale(SlotProperty::RotationY) < 1e-6);
    }
}
