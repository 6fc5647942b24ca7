use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 960.0,
            title: "Gem Run".into(),
        }
    }
}

/// Input-to-velocity tunables for the player body.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Base horizontal speed when running right (units/s).
    pub run_speed: f32,
    /// Fraction of `run_speed` used when running left.
    pub reverse_run_factor: f32,
    /// Upward impulse speed applied on an up press (units/s).
    pub jump_speed: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            run_speed: 400.0,
            reverse_run_factor: 0.7,
            jump_speed: 600.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// World gravity on the y axis (negative = downward).
    pub gravity_y: f32,
    /// Fraction of vertical velocity retained after a terrain impact.
    pub restitution: f32,
    /// |vertical velocity| above which the player counts as airborne and
    /// the jump animation takes precedence.
    pub airborne_threshold: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: -1250.0,
            restitution: 0.3,
            airborne_threshold: 64.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoreConfig {
    /// Points awarded per collected collectible.
    pub increment: u32,
}
impl Default for ScoreConfig {
    fn default() -> Self {
        Self { increment: 10 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub physics: PhysicsConfig,
    pub score: ScoreConfig,
    /// Level id loaded at Preload (resolves to `assets/levels/<id>.ron`).
    pub default_level_id: String,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            player: PlayerConfig::default(),
            physics: PhysicsConfig::default(),
            score: ScoreConfig::default(),
            default_level_id: "meadow".into(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let txt = fs::read_to_string(&path)
            .map_err(|e| format!("read config {:?}: {e}", path.as_ref()))?;
        ron::from_str(&txt).map_err(|e| format!("parse config {:?}: {e}", path.as_ref()))
    }
}
