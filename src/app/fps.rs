use std::collections::VecDeque;

use eframe::egui::{Align2, Color32, FontId, Painter, Rect, vec2};

const FPS_SAMPLE_WINDOW: usize = 180;

#[derive(Default)]
pub(super) struct FpsCounter {
    current: f32,
    samples: VecDeque<f32>,
}

impl FpsCounter {
    pub(super) fn record(&mut self, dt: f32) {
        if dt <= f32::EPSILON {
            return;
        }

        self.current = (1.0 / dt).clamp(0.0, 1000.0);
        self.samples.push_back(self.current);
        while self.samples.len() > FPS_SAMPLE_WINDOW {
            self.samples.pop_front();
        }
    }

    pub(super) fn display_text(&self) -> Option<String> {
        if self.samples.is_empty() {
            return None;
        }

        let mut parts = vec![format!("FPS {:.0}", self.current)];
        let avg = self.samples.iter().sum::<f32>() / self.samples.len() as f32;
        parts.push(format!("avg {:.1}", avg));
        if let Some(low) = self.samples.iter().copied().reduce(f32::min) {
            parts.push(format!("low {:.0}", low));
        }
        if let Some(high) = self.samples.iter().copied().reduce(f32::max) {
            parts.push(format!("high {:.0}", high));
        }
        if self.current > f32::EPSILON {
            parts.push(format!("{:.1} ms", 1000.0 / self.current));
        }

        Some(parts.join(" | "))
    }

    pub(super) fn paint(&self, painter: &Painter, rect: Rect, color: Color32) {
        if let Some(text) = self.display_text() {
            painter.text(
                rect.left_top() + vec2(8.0, 6.0),
                Align2::LEFT_TOP,
                text,
                FontId::monospace(12.0),
                color,
            );
        }
    }
}
