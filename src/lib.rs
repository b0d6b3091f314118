//! Angry Sling - a slingshot projectile puzzle game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (launch, physics, collisions, level state)
//! - `levels`: Data-driven level layouts (the fixed campaign)
//! - `tuning`: Data-driven game balance
//! - `snapshot`: Read-only frame snapshots for a rendering collaborator

pub mod levels;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use snapshot::FrameSnapshot;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate (one tick per rendered frame)
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions (y grows downward, screen convention)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 450.0;
    /// The ground line; projectiles bounce off this
    pub const FLOOR_Y: f32 = WORLD_HEIGHT;

    /// Slingshot anchor (launch origin)
    pub const ANCHOR_X: f32 = 200.0;
    pub const ANCHOR_Y: f32 = 200.0;

    /// Projectile defaults
    pub const BALL_RADIUS: f32 = 40.0;
    pub const FRICTION: f32 = 0.99;
    pub const ELASTICITY: f32 = 0.9;
    /// Cosmetic spin while in flight (degrees per tick)
    pub const SPIN_PER_TICK: f32 = 5.0;

    /// Constant downward acceleration per tick
    pub const GRAVITY: f32 = 1.0;

    /// Both velocity components below this (and resting on the floor)
    /// means the projectile is done flying
    pub const REST_EPSILON: f32 = 0.1;
    /// How far above the floor line still counts as "resting on it"
    pub const REST_FLOOR_SLACK: f32 = 1.0;

    /// Launch tuning
    pub const MAX_PULL_DISTANCE: f32 = 100.0;
    pub const VELOCITY_MULTIPLIER: f32 = 50.0;

    /// Collision probe ring: 8 base angles, outer band at full radius
    /// plus an inner band at half radius
    pub const PROBE_ANGLES_DEG: [f32; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];
    pub const PROBE_BANDS: [f32; 2] = [1.0, 0.5];

    /// Points per destroyed obstacle
    pub const SCORE_PER_OBSTACLE: u32 = 10;
    /// Launches available per level
    pub const INITIAL_ATTEMPTS: u32 = 3;

    /// Split power-up
    pub const SPLIT_COST: u32 = 50;
    pub const SPLIT_DEFLECTION_DEG: f32 = 30.0;
    /// Split projectiles fly and collide at a reduced radius
    pub const SPLIT_RADIUS_SCALE: f32 = 0.7;

    /// Delay before auto-advancing past a completed level (2 s at 60 Hz)
    pub const LEVEL_ADVANCE_TICKS: u32 = 2 * TICK_RATE;
}

/// Heading angle of a velocity vector, radians
#[inline]
pub fn heading_of(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Velocity vector from a heading angle and speed
#[inline]
pub fn from_heading(heading: f32, speed: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin()) * speed
}
