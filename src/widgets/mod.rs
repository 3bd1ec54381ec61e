//! Custom-drawn widgets: a gradient text label and a gradient pill button.
//!
//! Both widgets paint through the egui painter API directly instead of
//! composing built-in widgets, so they control every pixel of their look.

mod gradient_label;
mod pill_button;

pub use gradient_label::GradientLabel;
pub use pill_button::PillButton;
