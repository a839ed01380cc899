use eframe::egui::emath::Rot2;
use eframe::egui::epaint::TextShape;
use eframe::egui::{Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2, vec2};

use radial_flow::surface::{Surface, TextMeasure};

/// Adapts an egui painter clipped to `rect` to the [`Surface`] seam.
pub(super) struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub(super) fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, local: Pos2) -> Pos2 {
        local + self.rect.min.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter
            .rect_filled(rect.translate(self.rect.min.to_vec2()), 0.0, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], stroke);
    }

    fn circle(&mut self, centre: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(centre), radius, color);
    }

    fn text(&mut self, anchor: Pos2, angle: f32, text: &str, font: &FontId, color: Color32) {
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), font.clone(), color);
        // egui anchors text at its top-left corner; lift it so `anchor` is the baseline.
        let lift = Rot2::from_angle(angle) * vec2(0.0, -galley.size().y);
        let top_left = self.to_screen(anchor) + lift;
        self.painter
            .add(TextShape::new(top_left, galley, color).with_angle(angle));
    }
}

impl TextMeasure for PainterSurface<'_> {
    fn text_width(&self, text: &str, font: &FontId) -> f32 {
        self.painter
            .layout_no_wrap(text.to_owned(), font.clone(), Color32::WHITE)
            .size()
            .x
    }
}
