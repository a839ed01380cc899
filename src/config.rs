use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use eframe::egui::{Color32, FontId, Stroke};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub fn color(self) -> Color32 {
        let [r, g, b] = self.0;
        Color32::from_rgb(r, g, b)
    }
}

/// Style and timing for the diagram. Every field can be overridden on its own,
/// either from a JSON file or from the command line.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VisConfig {
    pub background: Rgb,
    pub node_color: Rgb,
    pub edge_color: Rgb,
    pub marker_color: Rgb,
    pub text_color: Rgb,
    pub font_size: f32,
    pub edge_duration_ms: f64,
    pub spawn_probability: f64,
    pub marker_radius: f32,
    pub edge_width: f32,
    pub show_fps: bool,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            background: Rgb([255, 255, 255]),
            node_color: Rgb([0, 200, 0]),
            edge_color: Rgb([0, 255, 0]),
            marker_color: Rgb([200, 0, 0]),
            text_color: Rgb([0, 0, 0]),
            font_size: 12.0,
            edge_duration_ms: 700.0,
            spawn_probability: 0.2,
            marker_radius: 3.0,
            edge_width: 1.0,
            show_fps: false,
        }
    }
}

impl VisConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("failed to load config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.edge_duration_ms.is_finite() && self.edge_duration_ms > 0.0,
            "edge_duration_ms must be positive, got {}",
            self.edge_duration_ms
        );
        ensure!(
            (0.0..=1.0).contains(&self.spawn_probability),
            "spawn_probability must be within [0, 1], got {}",
            self.spawn_probability
        );
        ensure!(
            self.font_size > 0.0,
            "font_size must be positive, got {}",
            self.font_size
        );
        ensure!(
            self.marker_radius > 0.0,
            "marker_radius must be positive, got {}",
            self.marker_radius
        );
        ensure!(
            self.edge_width >= 0.0,
            "edge_width must not be negative, got {}",
            self.edge_width
        );
        Ok(())
    }

    pub fn font(&self) -> FontId {
        FontId::proportional(self.font_size)
    }

    pub fn edge_stroke(&self) -> Stroke {
        Stroke::new(self.edge_width, self.edge_color.color())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_match_demo_style() {
        let config = VisConfig::default();
        assert_eq!(config.background.color(), Color32::WHITE);
        assert_eq!(config.marker_color.color(), Color32::from_rgb(200, 0, 0));
        assert_eq!(config.edge_duration_ms, 700.0);
        assert_eq!(config.spawn_probability, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            VisConfig::from_json(r#"{ "spawn_probability": 0.5, "marker_color": [1, 2, 3] }"#)
                .unwrap();
        assert_eq!(config.spawn_probability, 0.5);
        assert_eq!(config.marker_color, Rgb([1, 2, 3]));
        assert_eq!(config.edge_duration_ms, 700.0);
    }

    #[rstest]
    #[case::zero_duration(r#"{ "edge_duration_ms": 0 }"#)]
    #[case::probability_above_one(r#"{ "spawn_probability": 1.5 }"#)]
    #[case::negative_probability(r#"{ "spawn_probability": -0.1 }"#)]
    #[case::zero_font(r#"{ "font_size": 0 }"#)]
    #[case::negative_marker(r#"{ "marker_radius": -3 }"#)]
    #[case::bad_json("{ not json")]
    fn rejects_invalid_config(#[case] raw: &str) {
        assert!(VisConfig::from_json(raw).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let error = VisConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{error:#}").contains("/definitely/not/here.json"));
    }
}
