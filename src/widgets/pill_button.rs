//! A pill-shaped button with a gradient background, an optional border, and
//! an icon to the right of its text.

use eframe::egui;

use crate::theme::{adjust_brightness, lerp_color};

const TEXT_SIZE_DEFAULT: f32 = 16.0;
const GAP_DEFAULT: f32 = 6.0;
const INNER_PADDING_DEFAULT: f32 = 10.0;
/// Gradient strips across the background. Enough that the color steps are
/// below perception at typical button sizes.
const GRADIENT_STEPS: usize = 24;

/// A clickable pill (or circle, when the footprint is narrower than tall)
/// filled with a horizontal gradient, with centered text and an icon scaled
/// to the text height.
///
/// Without [`fixed_size`](Self::fixed_size) the button sizes itself so the
/// content clears the rounded caps. With a fixed footprint the background is
/// always painted but the content is skipped when it would not fit.
pub struct PillButton {
    text: String,
    icon: Option<String>,
    start_color: egui::Color32,
    end_color: egui::Color32,
    border_color: egui::Color32,
    border_width: f32,
    text_color: egui::Color32,
    text_size: f32,
    gap: f32,
    inner_padding_top: f32,
    inner_padding_bottom: f32,
    fixed_size: Option<egui::Vec2>,
}

impl PillButton {
    /// Creates a button with default colors and sizing.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: None,
            start_color: egui::Color32::from_rgb(240, 150, 20),
            end_color: egui::Color32::from_rgb(220, 50, 30),
            border_color: egui::Color32::TRANSPARENT,
            border_width: 0.0,
            text_color: egui::Color32::WHITE,
            text_size: TEXT_SIZE_DEFAULT,
            gap: GAP_DEFAULT,
            inner_padding_top: INNER_PADDING_DEFAULT,
            inner_padding_bottom: INNER_PADDING_DEFAULT,
            fixed_size: None,
        }
    }

    /// Sets the gradient's start and end colors.
    pub fn colors(mut self, start: egui::Color32, end: egui::Color32) -> Self {
        self.start_color = start;
        self.end_color = end;
        self
    }

    /// Sets the border color and stroke width. A zero width disables the
    /// border.
    pub fn border(mut self, color: egui::Color32, width: f32) -> Self {
        self.border_color = color;
        self.border_width = width;
        self
    }

    /// Sets the text color.
    pub fn text_color(mut self, color: egui::Color32) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the text size in points.
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    /// Sets the icon glyph drawn to the right of the text, scaled to the
    /// text height.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the gap between text and icon in points.
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the inner top/bottom padding between content and cap.
    pub fn inner_padding(mut self, top: f32, bottom: f32) -> Self {
        self.inner_padding_top = top;
        self.inner_padding_bottom = bottom;
        self
    }

    /// Fixes the widget footprint instead of sizing to the content.
    pub fn fixed_size(mut self, size: egui::Vec2) -> Self {
        self.fixed_size = Some(size);
        self
    }
}

impl egui::Widget for PillButton {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let font_id = egui::FontId::proportional(self.text_size);
        let painter = ui.painter();

        let text_galley =
            painter.layout_no_wrap(self.text.clone(), font_id.clone(), self.text_color);
        let text_size = text_galley.size();

        // The icon is scaled so it matches the text height
        let icon_font = egui::FontId::proportional(text_size.y);
        let icon_width = self
            .icon
            .as_ref()
            .map(|icon| {
                painter
                    .layout_no_wrap(icon.clone(), icon_font.clone(), self.text_color)
                    .size()
                    .x
            })
            .unwrap_or(0.0);
        let content_width = text_size.x
            + if self.icon.is_some() {
                self.gap + icon_width
            } else {
                0.0
            };

        let height = text_size.y + self.inner_padding_top + self.inner_padding_bottom;
        // Default width keeps the content clear of the rounded caps
        let desired = self
            .fixed_size
            .unwrap_or_else(|| egui::vec2(content_width + height, height));
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());

        let (mut start_color, mut end_color) = (self.start_color, self.end_color);
        if response.hovered() {
            start_color = adjust_brightness(start_color, 1.15);
            end_color = adjust_brightness(end_color, 1.15);
        }

        let painter = ui.painter();
        paint_gradient_background(painter, rect, start_color, end_color);

        if self.border_width > 0.0 {
            let stroke = egui::Stroke::new(self.border_width, self.border_color);
            if rect.width() <= rect.height() {
                painter.circle_stroke(rect.center(), rect.width() / 2.0, stroke);
            } else {
                painter.rect_stroke(
                    rect,
                    rect.height() / 2.0,
                    stroke,
                    egui::StrokeKind::Inside,
                );
            }
        }

        // Content is skipped when a caller-fixed footprint cannot hold it
        let fits = content_width <= rect.width() && text_size.y <= rect.height();
        if fits {
            let center_y =
                rect.center().y + (self.inner_padding_top - self.inner_padding_bottom) / 2.0;
            let text_center_x = rect.center().x - (content_width - text_size.x) / 2.0;
            painter.text(
                egui::pos2(text_center_x, center_y),
                egui::Align2::CENTER_CENTER,
                &self.text,
                font_id,
                self.text_color,
            );
            if let Some(icon) = &self.icon {
                painter.text(
                    egui::pos2(text_center_x + text_size.x / 2.0 + self.gap, center_y),
                    egui::Align2::LEFT_CENTER,
                    icon,
                    icon_font,
                    self.text_color,
                );
            }
        }

        response
    }
}

/// Paints a horizontal gradient filling a pill silhouette (or a circle when
/// the rect is narrower than tall) as a strip of vertex-colored quads.
fn paint_gradient_background(
    painter: &egui::Painter,
    rect: egui::Rect,
    start_color: egui::Color32,
    end_color: egui::Color32,
) {
    let center_y = rect.center().y;
    let (left, right) = if rect.width() <= rect.height() {
        // Circle case: span only the circle's horizontal extent
        let radius = rect.width() / 2.0;
        (rect.center().x - radius, rect.center().x + radius)
    } else {
        (rect.min.x, rect.max.x)
    };

    let mut mesh = egui::Mesh::default();
    for i in 0..=GRADIENT_STEPS {
        let t = i as f32 / GRADIENT_STEPS as f32;
        let x = left + (right - left) * t;
        let half = silhouette_half_height(x, rect);
        let color = lerp_color(start_color, end_color, t);
        mesh.colored_vertex(egui::pos2(x, center_y - half), color);
        mesh.colored_vertex(egui::pos2(x, center_y + half), color);
        if i > 0 {
            let base = (2 * (i - 1)) as u32;
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base + 1, base + 3, base + 2);
        }
    }
    painter.add(egui::Shape::mesh(mesh));
}

/// Half the silhouette height at horizontal position `x`.
///
/// Flat across the body of a pill, circular at the caps; a rect narrower
/// than tall is a full circle.
fn silhouette_half_height(x: f32, rect: egui::Rect) -> f32 {
    if rect.width() <= rect.height() {
        let radius = rect.width() / 2.0;
        let dx = x - rect.center().x;
        (radius * radius - dx * dx).max(0.0).sqrt()
    } else {
        let radius = rect.height() / 2.0;
        let left_cap = rect.min.x + radius;
        let right_cap = rect.max.x - radius;
        let dx = if x < left_cap {
            left_cap - x
        } else if x > right_cap {
            x - right_cap
        } else {
            return radius;
        };
        (radius * radius - dx * dx).max(0.0).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silhouette_is_flat_between_caps_and_curved_at_them() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 40.0));
        // Body
        assert_eq!(silhouette_half_height(50.0, rect), 20.0);
        assert_eq!(silhouette_half_height(20.0, rect), 20.0);
        // Cap edges taper to zero
        assert_eq!(silhouette_half_height(0.0, rect), 0.0);
        assert_eq!(silhouette_half_height(100.0, rect), 0.0);
        // Halfway into the left cap
        let expected = (20.0_f32 * 20.0 - 10.0 * 10.0).sqrt();
        assert!((silhouette_half_height(10.0, rect) - expected).abs() < 1e-4);
    }

    #[test]
    fn narrow_rect_is_a_circle() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(40.0, 100.0));
        assert_eq!(silhouette_half_height(20.0, rect), 20.0);
        assert_eq!(silhouette_half_height(0.0, rect), 0.0);
        assert_eq!(silhouette_half_height(40.0, rect), 0.0);
    }

    #[test]
    fn renders_without_panicking() {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add(
                    PillButton::new("Share")
                        .icon("\u{1F517}")
                        .border(egui::Color32::WHITE, 1.0),
                );
            });
        });
    }
}
