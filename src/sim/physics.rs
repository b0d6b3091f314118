//! Per-tick projectile motion
//!
//! Explicit Euler with a unit timestep: velocities are per-tick. The
//! ground bounce is checked against the current position before the
//! positional update, so the reflected velocity is the incoming one,
//! untouched by this tick's gravity and friction.

use glam::Vec2;

use crate::consts::*;
use crate::sim::state::Projectile;

/// Clamp to the floor and reflect vertical velocity with energy loss.
/// Returns true if a bounce happened.
pub fn apply_ground_bounce(p: &mut Projectile) -> bool {
    let r = p.effective_radius();
    if p.pos.y + r > FLOOR_Y {
        p.pos.y = FLOOR_Y - r;
        p.vel.y *= -p.elasticity;
        true
    } else {
        false
    }
}

/// Advance one active projectile by one tick: ground bounce, position
/// update, gravity, spin, friction, then rest detection. Inactive
/// projectiles are left untouched.
pub fn integrate(p: &mut Projectile, gravity: f32) {
    if !p.active {
        return;
    }

    apply_ground_bounce(p);

    p.pos += p.vel;
    p.vel.y += gravity;
    p.rotation += SPIN_PER_TICK;
    p.vel *= p.friction;

    if at_rest(p) {
        p.active = false;
        p.vel = Vec2::ZERO;
        log::debug!("projectile at rest at x={:.1}", p.pos.x);
    }
}

/// Both velocity components under the epsilon while sitting on the floor
fn at_rest(p: &Projectile) -> bool {
    p.vel.x.abs() < REST_EPSILON
        && p.vel.y.abs() < REST_EPSILON
        && p.pos.y + p.effective_radius() >= FLOOR_Y - REST_FLOOR_SLACK
}
