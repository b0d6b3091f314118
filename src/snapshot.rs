//! Read-only frame snapshots
//!
//! The rendering collaborator consumes these and never writes back.
//! Everything here is plain serializable data lifted from the world at
//! the end of a tick.

use glam::Vec2;
use serde::Serialize;

use crate::levels::Palette;
use crate::sim::launch::trajectory_preview;
use crate::sim::state::{GameWorld, LevelState, Projectile, Rect};

/// Steps of the aiming guide parabola
pub const PREVIEW_STEPS: usize = 50;

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    /// Cosmetic spin, degrees
    pub rotation: f32,
    /// Effective radius (already reduced for split projectiles)
    pub radius: f32,
    pub active: bool,
    pub split: bool,
}

impl ProjectileView {
    fn of(p: &Projectile) -> Self {
        Self {
            pos: p.pos,
            rotation: p.rotation,
            radius: p.effective_radius(),
            active: p.active,
            split: p.split,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ObstacleView {
    pub rect: Rect,
    pub visible: bool,
    pub palette: Palette,
}

/// HUD-facing scalar state
#[derive(Debug, Clone, Serialize)]
pub struct HudView {
    pub level_name: String,
    pub level_index: usize,
    pub level_count: usize,
    pub level_score: u32,
    pub target_score: u32,
    pub total_score: u32,
    pub attempts_left: u32,
    pub state: LevelState,
    pub launched: bool,
    /// Session clock, for HUD timers and log correlation
    pub time_ticks: u64,
}

/// Present only while a drag is in progress
#[derive(Debug, Clone, Serialize)]
pub struct AimView {
    pub anchor: Vec2,
    pub pull_distance: f32,
    pub launch_angle: f32,
    /// Predicted gravity-only flight of the committed velocity
    pub preview: Vec<Vec2>,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub projectiles: Vec<ProjectileView>,
    pub obstacles: Vec<ObstacleView>,
    pub hud: HudView,
    pub aim: Option<AimView>,
}

impl GameWorld {
    /// Snapshot the world for rendering. The main projectile is always
    /// first in the projectile list.
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut projectiles = Vec::with_capacity(1 + self.split_balls.len());
        projectiles.push(ProjectileView::of(&self.ball));
        projectiles.extend(self.split_balls.iter().map(ProjectileView::of));

        let level = self.level();
        let obstacles = level
            .obstacles
            .iter()
            .map(|o| ObstacleView {
                rect: o.rect,
                visible: o.visible,
                palette: o.palette,
            })
            .collect();

        let aim = self.drag.map(|_| AimView {
            anchor: self.anchor,
            pull_distance: self.launch_distance,
            launch_angle: self.launch_angle,
            preview: trajectory_preview(
                self.ball.pos,
                self.ball.vel,
                self.tuning.gravity,
                PREVIEW_STEPS,
            ),
        });

        FrameSnapshot {
            projectiles,
            obstacles,
            hud: HudView {
                level_name: level.name.clone(),
                level_index: self.current_level,
                level_count: self.levels.len(),
                level_score: level.score(),
                target_score: level.target_score,
                total_score: self.total_score,
                attempts_left: self.attempts_left,
                state: level.state,
                launched: self.launched,
                time_ticks: self.time_ticks,
            },
            aim,
        }
    }
}
