//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed cadence, one tick per rendered frame
//! - No RNG anywhere (the campaign is fixed data)
//! - Stable iteration order (main projectile first, then splits in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod launch;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::resolve_obstacle_hits;
pub use launch::{DragSolution, solve_drag, trajectory_preview};
pub use physics::integrate;
pub use state::{DragState, GameWorld, Level, LevelState, Obstacle, Projectile, Rect};
pub use tick::{TickInput, tick};
