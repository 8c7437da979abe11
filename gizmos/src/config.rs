use std::{fs, ops::RangeInclusive, path::Path};

use anyhow::{Context, Result};
use log::warn;
use planar_geometry::Color;
use serde::Deserialize;

use crate::SceneConfig;

pub const FACE_ALPHA_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const PLANE_SIZE_RANGE: RangeInclusive<f64> = 100.0..=1000.0;

/// How the plane probe gizmos look.
///
/// Use [`GizmoConfig::validated`] (or one of the loaders) before rendering: out of range values
/// are clamped there.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GizmoConfig {
    /// Alpha of the plane's face, `0..=1`.
    pub face_alpha: f32,
    /// Edge length of the square drawn for the plane, `100..=1000`.
    pub plane_size: f64,
    /// Length of the ray drawn when the probe ray runs parallel to the plane.
    pub parallel_ray_length: f64,
    /// A missing ray counts as parallel if the sine of its angle to the plane is within this
    /// tolerance of zero.
    pub parallel_tolerance: f64,
    pub marker_radius: f64,
    pub dotted_line_size: f64,
    /// Emit text labels for the query results.
    pub labels: bool,
    pub colors: Palette,
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            face_alpha: 0.25,
            plane_size: 100.0,
            parallel_ray_length: 100.0,
            parallel_tolerance: 1e-6,
            marker_radius: 2.0,
            dotted_line_size: 2.0,
            labels: false,
            colors: Palette::default(),
        }
    }
}

impl GizmoConfig {
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml).context("Parsing gizmo configuration")?;
        Ok(config.validated())
    }

    #[must_use]
    pub fn validated(self) -> Self {
        Self {
            face_alpha: clamped("face_alpha", self.face_alpha.into(), FACE_ALPHA_RANGE) as f32,
            plane_size: clamped("plane_size", self.plane_size, PLANE_SIZE_RANGE),
            parallel_ray_length: clamped(
                "parallel_ray_length",
                self.parallel_ray_length,
                0.0..=f64::MAX,
            ),
            parallel_tolerance: clamped(
                "parallel_tolerance",
                self.parallel_tolerance,
                0.0..=f64::MAX,
            ),
            marker_radius: clamped("marker_radius", self.marker_radius, 0.0..=f64::MAX),
            dotted_line_size: clamped("dotted_line_size", self.dotted_line_size, 0.0..=f64::MAX),
            ..self
        }
    }
}

/// Colors as `0xRRGGBB`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub positive: u32,
    pub negative: u32,
    pub parallel: u32,
    pub outline: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            positive: 0x00ff00,
            negative: 0xff0000,
            parallel: 0xffffff,
            outline: 0x000000,
        }
    }
}

impl Palette {
    pub fn positive(&self) -> Color {
        Color::rgb_u32(self.positive)
    }

    pub fn negative(&self) -> Color {
        Color::rgb_u32(self.negative)
    }

    pub fn parallel(&self) -> Color {
        Color::rgb_u32(self.parallel)
    }

    pub fn outline(&self) -> Color {
        Color::rgb_u32(self.outline)
    }
}

/// A configuration file: gizmo settings and the scene to start with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub gizmos: GizmoConfig,
    pub scene: SceneConfig,
}

impl Settings {
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings: Self = toml::from_str(toml).context("Parsing settings")?;
        Ok(Self {
            gizmos: settings.gizmos.validated(),
            ..settings
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let toml = fs::read_to_string(path)
            .with_context(|| format!("Reading settings from `{}`", path.display()))?;
        Self::from_toml_str(&toml).with_context(|| format!("In `{}`", path.display()))
    }
}

fn clamped(name: &str, mut v: f64, range: RangeInclusive<f64>) -> f64 {
    if v.is_nan() {
        warn!("{name} provided with NaN, set to {}", range.start());
        v = *range.start();
    }
    let clamped = v.clamp(*range.start(), *range.end());
    if clamped != v {
        warn!("{name} clamped to be in the {range:?} range, was: {v}");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(GizmoConfig::from_toml_str("").unwrap(), GizmoConfig::default());
    }

    #[test]
    fn parses_fields_and_colors() {
        let config = GizmoConfig::from_toml_str(
            r#"
            face_alpha = 0.5
            plane_size = 250.0
            labels = true

            [colors]
            positive = 0x0000ff
            "#,
        )
        .unwrap();

        assert_eq!(config.face_alpha, 0.5);
        assert_eq!(config.plane_size, 250.0);
        assert!(config.labels);
        assert_eq!(config.colors.positive(), Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(config.colors.negative(), Color::RED);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = GizmoConfig {
            face_alpha: 1.5,
            plane_size: 10.0,
            parallel_ray_length: -3.0,
            ..Default::default()
        }
        .validated();

        assert_eq!(config.face_alpha, 1.0);
        assert_eq!(config.plane_size, 100.0);
        assert_eq!(config.parallel_ray_length, 0.0);
    }

    #[test]
    fn marker_sizes_are_clamped() {
        let config = GizmoConfig {
            marker_radius: -1.0,
            dotted_line_size: f64::NAN,
            ..Default::default()
        }
        .validated();

        assert_eq!(config.marker_radius, 0.0);
        assert_eq!(config.dotted_line_size, 0.0);
    }

    #[test]
    fn nan_is_replaced() {
        let config = GizmoConfig {
            plane_size: f64::NAN,
            ..Default::default()
        }
        .validated();
        assert_eq!(config.plane_size, 100.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(GizmoConfig::from_toml_str("plane_colour = 1").is_err());
    }

    #[test]
    fn settings_with_scene() {
        let settings = Settings::from_toml_str(
            r#"
            [gizmos]
            plane_size = 2000.0

            [scene]
            plane_position = [0.0, 0.0, 1.0]

            [scene.probe]
            position = [0.0, 0.0, 5.0]
            direction = [0.0, 0.0, -1.0]
            "#,
        )
        .unwrap();

        assert_eq!(settings.gizmos.plane_size, 1000.0);
        let scene = settings.scene.to_scene();
        assert_eq!(scene.plane.translate.z, 1.0);
        assert!(scene.probe.is_some());
    }

    #[test]
    fn example_settings_parse() {
        let settings = Settings::from_toml_str(include_str!("../plane_probe.toml")).unwrap();
        assert!(settings.gizmos.labels);
        assert_eq!(settings.gizmos.colors.outline(), Color::BLACK);
    }
}
