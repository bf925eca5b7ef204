use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::navigation::NavigationSettings;
use crate::orbit::OrbitSettings;
use crate::transition::TransitionSettings;

/// Primary camera placement before any model is framed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            fov_degrees: 50.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingSettings {
    /// Padding around the model's bounding sphere when the camera is first placed
    pub frame_margin: f32,
}

impl StagingSettings {
    /// Camera position, along the configured camera direction, at which a sphere of
    /// `radius` centered on the origin fills the vertical field of view with margin
    pub fn framing_position(&self, radius: f32, camera: &CameraSettings) -> Vec3 {
        let direction = camera.position.try_normalize().unwrap_or(Vec3::Z);
        let half_fov = (camera.fov_degrees.to_radians() * 0.5).max(1e-3);
        let distance = radius * self.frame_margin / half_fov.tan();
        direction * distance.max(camera.near * 2.0)
    }
}

impl Default for StagingSettings {
    fn default() -> Self {
        Self { frame_margin: 1.5 }
    }
}

/// Startup configuration, read once from JSON. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub navigation: NavigationSettings,
    pub transition: TransitionSettings,
    pub camera: CameraSettings,
    pub orbit: OrbitSettings,
    pub staging: StagingSettings,
}

impl ViewerConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Config file named on the command line (or defaults), with flag overrides applied
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(duration_ms) = cli.duration_ms {
            config.transition.duration_ms = duration_ms;
        }
        if let Some(standoff) = cli.standoff {
            config.navigation.standoff_distance = standoff;
        }
        Ok(config)
    }
}
