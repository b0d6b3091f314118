//! Projectile-vs-obstacle collision
//!
//! Circle-rectangle contact is approximated by a ring of probe points
//! sampled around the projectile: 8 angles at the full effective radius
//! plus 8 at half radius. Any probe inside a visible obstacle's
//! rectangle counts as a hit. Probes trade geometric precision for
//! destructible multi-obstacle contact in a single pass; blocks are
//! comparable in size to the projectile, so the gaps between probes
//! don't matter in practice.

use crate::sim::state::{Level, Obstacle, Projectile};

/// True if any probe of the ring lies inside the obstacle's rectangle.
/// Destroyed obstacles never collide.
pub fn probes_hit(p: &Projectile, obs: &Obstacle) -> bool {
    if !obs.visible {
        return false;
    }
    p.probe_points().any(|point| obs.rect.contains(point))
}

/// Test one projectile against every obstacle of the level.
///
/// Each hit destroys the obstacle (single-use) and damps the
/// projectile's horizontal velocity by its elasticity: a speed
/// reduction modeling punch-through, not a reflection. No early exit;
/// a projectile can flatten several obstacles in one tick. Returns the
/// number of obstacles destroyed.
pub fn resolve_obstacle_hits(p: &mut Projectile, level: &mut Level) -> u32 {
    let mut destroyed = 0;
    for obs in &mut level.obstacles {
        if probes_hit(p, obs) {
            obs.visible = false;
            p.vel.x *= p.elasticity;
            destroyed += 1;
        }
    }
    destroyed
}
