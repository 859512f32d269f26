use euclid::rect;
use image::RgbaImage;

use crate::input::ActionMessage;
use crate::sprite::SpriteSheet;
use crate::world::level::{BlockKind, CollisionBlock, Level};
use crate::world::physics::worldtypes::*;

pub(crate) fn blank_sheet(w: u32, h: u32, frames: u32, scale: Float) -> SpriteSheet {
    SpriteSheet::from_buf(RgbaImage::new(w, h), frames, scale)
}

/// row-major grid of zeros with the solid symbol (202) at the given tiles
pub(crate) fn grid_with(stride: usize, rows: usize, cells: &[(u32, u32)]) -> Vec<u16> {
    let mut grid = vec![0u16; stride * rows];
    for &(x, y) in cells {
        grid[y as usize * stride + x as usize] = 202;
    }
    grid
}

/// level whose bottom row is solid ground all the way across
pub(crate) fn floor_level(stride: u32, rows: u32) -> Level {
    let cells: Vec<_> = (0..stride).map(|x| (x, rows - 1)).collect();
    let floor = grid_with(stride as usize, rows as usize, &cells);
    Level::from_grids(&floor, &[], stride, 202).expect("well-formed test grid")
}

pub(crate) fn solid_at(x: Float, y: Float, w: Float, h: Float) -> CollisionBlock {
    CollisionBlock {
        rect: rect(x, y, w, h),
        kind: BlockKind::Solid,
    }
}

pub(crate) fn platform_at(x: Float, y: Float, w: Float) -> CollisionBlock {
    CollisionBlock {
        rect: rect(x, y, w, 4.0),
        kind: BlockKind::Platform,
    }
}

pub(crate) fn message(left: bool, right: bool, jump: bool) -> ActionMessage {
    ActionMessage { left, right, jump }
}
