//! Data-driven level layouts
//!
//! The campaign is a fixed table of hand-authored layouts. A layout is
//! plain data (rectangles, palettes, a target score); there is one level
//! type, parameterized by its layout, never one type per level.

use serde::{Deserialize, Serialize};

use crate::sim::state::Rect;

/// Cosmetic block coloring, resolved to actual colors by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Green,
    Yellow,
    Red,
    Blue,
}

impl Palette {
    /// Fill color, RGBA
    pub fn fill_rgba(&self) -> [u8; 4] {
        match self {
            Palette::Green => [0, 228, 48, 255],
            Palette::Yellow => [253, 249, 0, 255],
            Palette::Red => [230, 41, 55, 255],
            Palette::Blue => [0, 121, 241, 255],
        }
    }

    /// Stroke color, RGBA (darker companion of the fill)
    pub fn stroke_rgba(&self) -> [u8; 4] {
        match self {
            Palette::Green => [0, 117, 44, 255],
            Palette::Yellow => [255, 203, 0, 255],
            Palette::Red => [190, 33, 55, 255],
            Palette::Blue => [0, 82, 172, 255],
        }
    }
}

/// One block of a layout
#[derive(Debug, Clone)]
pub struct BlockSpec {
    pub rect: Rect,
    pub palette: Palette,
}

impl BlockSpec {
    const fn new(x: f32, y: f32, w: f32, h: f32, palette: Palette) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            palette,
        }
    }
}

/// Static description of a level: geometry plus target score
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub name: &'static str,
    pub target_score: u32,
    pub blocks: Vec<BlockSpec>,
}

/// The fixed campaign, in play order
pub fn campaign() -> Vec<LevelLayout> {
    vec![shelf_stack(), twin_towers(), staircase(), the_wall()]
}

/// Three shelves: two columns bridged by a lintel, stacked vertically
fn shelf_stack() -> LevelLayout {
    let mut blocks = Vec::new();
    for i in 0..3 {
        let dy = 130.0 * i as f32;
        blocks.push(BlockSpec::new(550.0, 90.0 + dy, 30.0, 100.0, Palette::Green));
        blocks.push(BlockSpec::new(700.0, 90.0 + dy, 30.0, 100.0, Palette::Yellow));
        blocks.push(BlockSpec::new(550.0, 60.0 + dy, 180.0, 30.0, Palette::Red));
    }
    LevelLayout {
        name: "Shelf Stack",
        target_score: 60,
        blocks,
    }
}

/// Two free-standing towers, two storeys each
fn twin_towers() -> LevelLayout {
    let mut blocks = Vec::new();
    for &x in &[500.0, 670.0] {
        for storey in 0..2 {
            let y = 450.0 - 120.0 * (storey + 1) as f32;
            blocks.push(BlockSpec::new(x, y + 30.0, 30.0, 90.0, Palette::Green));
            blocks.push(BlockSpec::new(x + 70.0, y + 30.0, 30.0, 90.0, Palette::Green));
            blocks.push(BlockSpec::new(x - 10.0, y, 120.0, 30.0, Palette::Red));
        }
    }
    LevelLayout {
        name: "Twin Towers",
        target_score: 80,
        blocks,
    }
}

/// A staircase descending toward the anchor
fn staircase() -> LevelLayout {
    let mut blocks = Vec::new();
    for step in 0..4 {
        let x = 480.0 + 70.0 * step as f32;
        let h = 60.0 * (step + 1) as f32;
        blocks.push(BlockSpec::new(x, 450.0 - h, 40.0, h, Palette::Yellow));
    }
    // Crown blocks resting on the taller steps
    blocks.push(BlockSpec::new(620.0, 450.0 - 180.0 - 30.0, 40.0, 30.0, Palette::Blue));
    blocks.push(BlockSpec::new(690.0, 450.0 - 240.0 - 30.0, 40.0, 30.0, Palette::Blue));
    LevelLayout {
        name: "Staircase",
        target_score: 50,
        blocks,
    }
}

/// A 5x3 grid of bricks
fn the_wall() -> LevelLayout {
    let mut blocks = Vec::new();
    for row in 0..5 {
        for col in 0..3 {
            let palette = if row % 2 == 0 {
                Palette::Red
            } else {
                Palette::Yellow
            };
            blocks.push(BlockSpec::new(
                560.0 + 65.0 * col as f32,
                450.0 - 60.0 * (row + 1) as f32,
                60.0,
                55.0,
                palette,
            ));
        }
    }
    LevelLayout {
        name: "The Wall",
        target_score: 100,
        blocks,
    }
}
