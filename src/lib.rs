//! fanfold: custom-drawn egui widgets with a fan-fold menu.
//!
//! The crate provides three widgets:
//! - [`GradientLabel`]: a text label painted with a linear color gradient
//! - [`PillButton`]: a pill-shaped gradient button with an icon
//! - [`FanMenu`]: an expandable strip of adapter-supplied slots whose
//!   open/close animation folds one slot at a time
//!
//! The fan menu is the interesting part: open and close run as staggered
//! sequences driven by a reusable per-direction transition driver, gated by
//! an explicit open/closed/animating state machine, with selection highlight
//! swapping delegated to the caller's [`MenuAdapter`].

pub mod easing;
pub mod menu;
pub mod theme;
pub mod widgets;

// Export easing
pub use easing::Easing;

// Export the fan menu and its collaborator surface
pub use menu::{
    FanMenu, MenuAdapter, MenuConfig, MenuStatus, Orientation, SequenceKind, SequenceObserver,
    SlotStyle, SlotVisual,
};

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, lerp_color, with_alpha, Theme, ThemeColors, ThemeManager};

// Export the drawn widgets
pub use widgets::{GradientLabel, PillButton};
