use eframe::egui::{Color32, FontId, Pos2, Rect, Stroke, Vec2};

/// Drawing target for one frame. Coordinates are surface-local with the
/// origin in the top-left corner and y pointing down.
pub trait Surface {
    /// Called once at the start of every frame, before anything is drawn.
    fn begin_frame(&mut self) {}
    fn size(&self) -> Vec2;
    fn fill_rect(&mut self, rect: Rect, color: Color32);
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);
    fn circle(&mut self, centre: Pos2, radius: f32, color: Color32);
    /// Draws `text` with its baseline-left corner at `anchor`, rotated by `angle` around it.
    fn text(&mut self, anchor: Pos2, angle: f32, text: &str, font: &FontId, color: Color32);
}

pub trait TextMeasure {
    fn text_width(&self, text: &str, font: &FontId) -> f32;
}

/// Approximates glyph advance as a fixed fraction of the font size.
#[derive(Clone, Copy, Debug)]
pub struct FixedWidthMeasure {
    pub advance_per_point: f32,
}

impl Default for FixedWidthMeasure {
    fn default() -> Self {
        Self {
            advance_per_point: 0.6,
        }
    }
}

impl TextMeasure for FixedWidthMeasure {
    fn text_width(&self, text: &str, font: &FontId) -> f32 {
        text.chars().count() as f32 * font.size * self.advance_per_point
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color32,
    },
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    Circle {
        centre: Pos2,
        radius: f32,
        color: Color32,
    },
    Text {
        anchor: Pos2,
        angle: f32,
        text: String,
        color: Color32,
    },
}

/// Keeps every draw call in memory. Used by the headless runner and tests.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn circles_with_color(&self, color: Color32) -> impl Iterator<Item = (Pos2, f32)> + '_ {
        self.commands.iter().filter_map(move |command| match command {
            DrawCommand::Circle {
                centre,
                radius,
                color: drawn,
            } if *drawn == color => Some((*centre, *radius)),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Line { .. }))
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn begin_frame(&mut self) {
        self.commands.clear();
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn circle(&mut self, centre: Pos2, radius: f32, color: Color32) {
        self.commands.push(DrawCommand::Circle {
            centre,
            radius,
            color,
        });
    }

    fn text(&mut self, anchor: Pos2, angle: f32, text: &str, _font: &FontId, color: Color32) {
        self.commands.push(DrawCommand::Text {
            anchor,
            angle,
            text: text.to_owned(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};

    use super::*;

    #[test]
    fn fixed_width_scales_with_length_and_size() {
        let measure = FixedWidthMeasure::default();
        let font = FontId::proportional(10.0);
        assert_eq!(measure.text_width("", &font), 0.0);
        assert!((measure.text_width("abcd", &font) - 24.0).abs() < 1e-4);
        let large = FontId::proportional(20.0);
        assert!((measure.text_width("abcd", &large) - 48.0).abs() < 1e-4);
    }

    #[test]
    fn recording_surface_filters_by_kind() {
        let mut surface = RecordingSurface::new(vec2(100.0, 50.0));
        surface.line(pos2(0.0, 0.0), pos2(1.0, 1.0), Stroke::new(1.0, Color32::GREEN));
        surface.circle(pos2(2.0, 2.0), 3.0, Color32::RED);
        surface.circle(pos2(4.0, 4.0), 5.0, Color32::GREEN);
        surface.text(pos2(0.0, 0.0), 0.0, "hi", &FontId::default(), Color32::BLACK);

        assert_eq!(surface.size(), vec2(100.0, 50.0));
        assert_eq!(surface.line_count(), 1);
        assert_eq!(
            surface.circles_with_color(Color32::RED).collect::<Vec<_>>(),
            vec![(pos2(2.0, 2.0), 3.0)]
        );
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["hi"]);

        surface.clear();
        assert!(surface.commands().is_empty());
    }
}
