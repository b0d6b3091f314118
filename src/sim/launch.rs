//! Drag gesture to launch velocity
//!
//! Slingshot math: displacement from the anchor becomes a launch angle
//! and a velocity proportional to the normalized pull, clamped to the
//! maximum pull radius. Pulling down-and-left launches up-and-right.

use glam::Vec2;
use std::f32::consts::PI;

use crate::from_heading;

/// Everything a drag position resolves to
#[derive(Debug, Clone, Copy)]
pub struct DragSolution {
    /// Projectile position, clamped onto the max-pull circle
    pub pos: Vec2,
    /// Velocity committed on release
    pub vel: Vec2,
    /// Launch angle, radians
    pub angle: f32,
    /// Pull distance after clamping
    pub distance: f32,
}

/// Resolve a drag position against the anchor.
///
/// `dragged_to` is where the gesture wants the projectile (pointer minus
/// grab offset). Positions beyond `max_pull` are rescaled to lie exactly
/// on the circle of radius `max_pull` around the anchor; they are never
/// rejected.
pub fn solve_drag(anchor: Vec2, dragged_to: Vec2, max_pull: f32, multiplier: f32) -> DragSolution {
    let mut pos = dragged_to;
    let d = anchor - pos;
    let mut distance = d.length();

    // Angle of the pull, then mirrored into the launch direction
    let relative_angle = d.y.atan2(d.x) + PI;
    let angle = PI - relative_angle;

    if distance > max_pull {
        pos = anchor + from_heading(relative_angle, max_pull);
        distance = max_pull;
    }

    // Normalized pull per axis; vertical sign inverted so pulling down
    // launches up
    let nx = (pos.x - anchor.x).abs() / max_pull;
    let ny = -((pos.y - anchor.y).abs() / max_pull);
    let vel = Vec2::new(nx * angle.cos(), ny * angle.sin()) * multiplier;

    DragSolution {
        pos,
        vel,
        angle,
        distance,
    }
}

/// Gravity-only flight prediction for the aiming guide: `steps`
/// positions starting one step ahead of `pos`
pub fn trajectory_preview(pos: Vec2, vel: Vec2, gravity: f32, steps: usize) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(steps);
    let mut p = pos;
    let mut v = vel;
    for _ in 0..steps {
        p += v;
        v.y += gravity;
        points.push(p);
    }
    points
}
