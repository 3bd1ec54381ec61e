//! A text label painted with a linear color gradient across its glyphs.

use eframe::egui;

use crate::theme::lerp_color;

/// Default text size in points.
const TEXT_SIZE_DEFAULT: f32 = 24.0;

/// A single line of text whose glyph colors run from a start color to an
/// end color across the text width.
///
/// By default the label sizes itself to its text. With
/// [`fixed_size`](Self::fixed_size) the caller fixes the footprint instead,
/// the text is aligned inside it per [`align`](Self::align), and nothing is
/// drawn when the text cannot fit.
pub struct GradientLabel {
    text: String,
    start_color: egui::Color32,
    end_color: egui::Color32,
    text_size: f32,
    align: egui::Align2,
    fixed_size: Option<egui::Vec2>,
}

impl GradientLabel {
    /// Creates a label with default colors (white to gray) and size.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start_color: egui::Color32::WHITE,
            end_color: egui::Color32::GRAY,
            text_size: TEXT_SIZE_DEFAULT,
            align: egui::Align2::CENTER_CENTER,
            fixed_size: None,
        }
    }

    /// Sets the gradient's start and end colors.
    pub fn colors(mut self, start: egui::Color32, end: egui::Color32) -> Self {
        self.start_color = start;
        self.end_color = end;
        self
    }

    /// Sets the text size in points.
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    /// Sets how the text is placed inside a fixed footprint.
    pub fn align(mut self, align: egui::Align2) -> Self {
        self.align = align;
        self
    }

    /// Fixes the widget footprint instead of sizing to the text.
    pub fn fixed_size(mut self, size: egui::Vec2) -> Self {
        self.fixed_size = Some(size);
        self
    }
}

impl egui::Widget for GradientLabel {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let font_id = egui::FontId::proportional(self.text_size);
        let painter = ui.painter();

        // Measure the whole line first; single-glyph galleys below share the
        // same row height, so per-glyph painting stays on one baseline.
        let galley = painter.layout_no_wrap(self.text.clone(), font_id.clone(), egui::Color32::WHITE);
        let text_size = galley.size();

        let desired = self.fixed_size.unwrap_or(text_size);
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::hover());

        // A fixed footprint too small for the text draws nothing
        if text_size.x > rect.width() + 0.5 || text_size.y > rect.height() + 0.5 {
            return response;
        }

        let text_rect = self
            .align
            .align_size_within_rect(text_size, rect);

        let painter = ui.painter();
        let mut x = text_rect.min.x;
        for ch in self.text.chars() {
            let glyph = painter.layout_no_wrap(ch.to_string(), font_id.clone(), egui::Color32::WHITE);
            let advance = glyph.size().x;
            let fraction = if text_size.x > 0.0 {
                (x + advance / 2.0 - text_rect.min.x) / text_size.x
            } else {
                0.0
            };
            let color = lerp_color(self.start_color, self.end_color, fraction);
            painter.text(
                egui::pos2(x, text_rect.min.y),
                egui::Align2::LEFT_TOP,
                ch,
                font_id.clone(),
                color,
            );
            x += advance;
        }

        response
    }
}
