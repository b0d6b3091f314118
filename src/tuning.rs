//! Data-driven gameplay tuning
//!
//! Balance values a designer may want to tweak without recompiling.
//! Defaults mirror `consts`; a partial JSON file overrides only the
//! fields it names.

use serde::{Deserialize, Serialize};

use crate::consts::*;

fn default_gravity() -> f32 {
    GRAVITY
}
fn default_friction() -> f32 {
    FRICTION
}
fn default_elasticity() -> f32 {
    ELASTICITY
}
fn default_velocity_multiplier() -> f32 {
    VELOCITY_MULTIPLIER
}
fn default_max_pull_distance() -> f32 {
    MAX_PULL_DISTANCE
}
fn default_initial_attempts() -> u32 {
    INITIAL_ATTEMPTS
}
fn default_split_cost() -> u32 {
    SPLIT_COST
}
fn default_split_deflection_deg() -> f32 {
    SPLIT_DEFLECTION_DEG
}
fn default_level_advance_ticks() -> u32 {
    LEVEL_ADVANCE_TICKS
}

/// Gameplay balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration per tick
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Per-tick velocity damping, in (0, 1)
    #[serde(default = "default_friction")]
    pub friction: f32,
    /// Bounce/punch-through energy retention, in (0, 1)
    #[serde(default = "default_elasticity")]
    pub elasticity: f32,
    /// Scales the normalized pull into launch velocity
    #[serde(default = "default_velocity_multiplier")]
    pub velocity_multiplier: f32,
    /// Pull clamp radius around the anchor
    #[serde(default = "default_max_pull_distance")]
    pub max_pull_distance: f32,
    /// Launches per level
    #[serde(default = "default_initial_attempts")]
    pub initial_attempts: u32,
    /// Split power-up price, paid from the session total
    #[serde(default = "default_split_cost")]
    pub split_cost: u32,
    /// Split projectile heading offset, degrees each side
    #[serde(default = "default_split_deflection_deg")]
    pub split_deflection_deg: f32,
    /// Ticks to linger on a completed level before advancing
    #[serde(default = "default_level_advance_ticks")]
    pub level_advance_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            elasticity: ELASTICITY,
            velocity_multiplier: VELOCITY_MULTIPLIER,
            max_pull_distance: MAX_PULL_DISTANCE,
            initial_attempts: INITIAL_ATTEMPTS,
            split_cost: SPLIT_COST,
            split_deflection_deg: SPLIT_DEFLECTION_DEG,
            level_advance_ticks: LEVEL_ADVANCE_TICKS,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse tuning, falling back to defaults on any error
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json_str(json) {
                Ok(tuning) => {
                    log::info!("loaded tuning overrides");
                    tuning
                }
                Err(err) => {
                    log::warn!("bad tuning config ({err}), using defaults");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
