//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here. The obstacle visibility
//! flags are the authoritative score state; score is always recomputed
//! from them, never cached.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::levels::{self, LevelLayout, Palette};
use crate::tuning::Tuning;
use crate::{from_heading, heading_of};

/// Axis-aligned rectangle (origin at top-left, y-down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Point-in-rect test used by the collision probes
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// A destructible block. Destroyed blocks stay in the list with
/// `visible = false` until the level resets; they are never reallocated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub visible: bool,
    /// Cosmetic only; carried through to render snapshots
    pub palette: Palette,
}

impl Obstacle {
    pub fn new(rect: Rect, palette: Palette) -> Self {
        Self {
            rect,
            visible: true,
            palette,
        }
    }
}

/// A circular projectile body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Base radius; split projectiles shrink via `effective_radius`
    pub radius: f32,
    /// Per-tick velocity damping, in (0, 1)
    pub friction: f32,
    /// Bounce energy retention, in (0, 1)
    pub elasticity: f32,
    /// Cosmetic spin angle, degrees
    pub rotation: f32,
    /// Inactive projectiles are skipped by integration and collision
    pub active: bool,
    /// Set when the split power-up fires; shrinks the collision ring
    pub split: bool,
}

/// Probes per projectile: 8 angles times 2 radial bands
pub const PROBE_COUNT: usize = PROBE_ANGLES_DEG.len() * PROBE_BANDS.len();

impl Projectile {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            friction: tuning.friction,
            elasticity: tuning.elasticity,
            rotation: 0.0,
            active: true,
            split: false,
        }
    }

    /// Radius used for both drawing and collision probing.
    /// Split projectiles use a reduced radius consistently in both.
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        if self.split {
            self.radius * SPLIT_RADIUS_SCALE
        } else {
            self.radius
        }
    }

    /// One probe point of the collision ring. Indices 0..8 are the outer
    /// band at full effective radius, 8..16 the inner band at half.
    pub fn probe_point(&self, index: usize) -> Vec2 {
        let angles = PROBE_ANGLES_DEG;
        let band = PROBE_BANDS[(index / angles.len()) % PROBE_BANDS.len()];
        let theta = angles[index % angles.len()].to_radians();
        self.pos + self.effective_radius() * band * Vec2::new(theta.cos(), theta.sin())
    }

    /// The full probe ring
    pub fn probe_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..PROBE_COUNT).map(move |i| self.probe_point(i))
    }

    /// Split power-up factory: a copy of this projectile's kinematic
    /// state with the velocity heading rotated by `offset` radians and
    /// speed preserved. Both the copy and (by the caller) the source are
    /// marked split.
    pub fn deflected(&self, offset: f32) -> Projectile {
        let speed = self.vel.length();
        let heading = heading_of(self.vel) + offset;
        Projectile {
            vel: from_heading(heading, speed),
            split: true,
            ..self.clone()
        }
    }
}

/// Level progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelState {
    /// Accepting launches
    Playing,
    /// Score reached the target; sticky until reset
    Completed,
    /// Attempts exhausted short of the target; sticky until reset
    Failed,
}

/// A level: its obstacle set, target score and progress state.
/// Geometry is built once from the layout; resets only restore
/// visibility, they never regenerate the obstacle list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub obstacles: Vec<Obstacle>,
    pub target_score: u32,
    pub state: LevelState,
}

impl Level {
    pub fn from_layout(layout: &LevelLayout) -> Self {
        Self {
            name: layout.name.to_string(),
            obstacles: layout
                .blocks
                .iter()
                .map(|b| Obstacle::new(b.rect, b.palette))
                .collect(),
            target_score: layout.target_score,
            state: LevelState::Playing,
        }
    }

    /// Score is derived from the visibility flags on demand
    pub fn score(&self) -> u32 {
        self.destroyed_count() as u32 * SCORE_PER_OBSTACLE
    }

    pub fn destroyed_count(&self) -> usize {
        self.obstacles.iter().filter(|o| !o.visible).count()
    }

    /// Promote Playing to Completed once the target is reached.
    /// Completed and Failed are sticky until `reset`.
    pub fn refresh_state(&mut self) {
        if self.state == LevelState::Playing && self.score() >= self.target_score {
            log::info!("level '{}' completed with score {}", self.name, self.score());
            self.state = LevelState::Completed;
        }
    }

    /// Mark the level failed (attempts exhausted). Completed levels
    /// never fail.
    pub fn mark_failed(&mut self) {
        if self.state == LevelState::Playing {
            log::info!(
                "level '{}' failed at score {}/{}",
                self.name,
                self.score(),
                self.target_score
            );
            self.state = LevelState::Failed;
        }
    }

    /// Restore all obstacles and return to Playing
    pub fn reset(&mut self) {
        for obs in &mut self.obstacles {
            obs.visible = true;
        }
        self.state = LevelState::Playing;
    }
}

/// An in-progress drag gesture. The offset is pointer minus projectile
/// center at press time, so the projectile does not snap to the cursor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DragState {
    pub grab_offset: Vec2,
}

/// Complete session state: the projectiles, the campaign, and all
/// launch/score bookkeeping. Owned by a single simulation thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameWorld {
    pub tuning: Tuning,
    /// The main projectile; repositioned on every launch cycle, never
    /// reallocated
    pub ball: Projectile,
    /// Auxiliary projectiles spawned by the split power-up
    pub split_balls: Vec<Projectile>,
    pub levels: Vec<Level>,
    pub current_level: usize,
    /// Slingshot origin
    pub anchor: Vec2,
    /// Current drag gesture, if any
    pub drag: Option<DragState>,
    pub launched: bool,
    /// Launch bookkeeping, updated while dragging
    pub launch_angle: f32,
    pub launch_distance: f32,
    pub attempts_left: u32,
    /// Session-cumulative score; funds the split power-up
    pub total_score: u32,
    /// One split activation per launch
    pub split_used: bool,
    /// Elapsed ticks since the current level completed (drives the
    /// auto-advance delay)
    pub advance_ticks: u32,
    pub time_ticks: u64,
}

impl GameWorld {
    pub fn new(tuning: Tuning) -> Self {
        let anchor = Vec2::new(ANCHOR_X, ANCHOR_Y);
        let levels = levels::campaign()
            .iter()
            .map(Level::from_layout)
            .collect::<Vec<_>>();
        let attempts = tuning.initial_attempts;
        let ball = Projectile::new(anchor, &tuning);
        Self {
            tuning,
            ball,
            split_balls: Vec::new(),
            levels,
            current_level: 0,
            anchor,
            drag: None,
            launched: false,
            launch_angle: 0.0,
            launch_distance: 0.0,
            attempts_left: attempts,
            total_score: 0,
            split_used: false,
            advance_ticks: 0,
            time_ticks: 0,
        }
    }

    pub fn level(&self) -> &Level {
        &self.levels[self.current_level]
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.levels[self.current_level]
    }

    /// True once every projectile of the current launch has come to rest
    pub fn all_at_rest(&self) -> bool {
        !self.ball.active && self.split_balls.iter().all(|b| !b.active)
    }

    /// Return the main projectile to the anchor and clear per-launch
    /// state. Does not touch obstacles, attempts or scores.
    pub fn rearm(&mut self) {
        self.ball.pos = self.anchor;
        self.ball.vel = Vec2::ZERO;
        self.ball.rotation = 0.0;
        self.ball.active = true;
        self.ball.split = false;
        self.split_balls.clear();
        self.drag = None;
        self.launched = false;
        self.launch_angle = 0.0;
        self.launch_distance = 0.0;
        self.split_used = false;
    }

    /// Full level reset: obstacles visible, state Playing, attempts
    /// restored, projectile re-armed. Idempotent.
    pub fn reset_level(&mut self) {
        self.level_mut().reset();
        self.attempts_left = self.tuning.initial_attempts;
        self.advance_ticks = 0;
        self.rearm();
    }

    /// Switch to another level (clamped to the campaign) and reset it
    pub fn set_level(&mut self, index: usize) {
        self.current_level = index.min(self.levels.len() - 1);
        log::info!("switching to level '{}'", self.level().name);
        self.reset_level();
    }
}
