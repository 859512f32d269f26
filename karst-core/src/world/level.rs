//! tile grids and the collision block index
use ansi_term::{Colour, Style};
use euclid::rect;
use rect_iter::RectRange;

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use super::physics::worldtypes::*;

/// square tile edge in world units
pub const TILE_SIZE: u32 = 16;
/// platform blocks occupy only the top quarter of their tile
pub const PLATFORM_HEIGHT: u32 = TILE_SIZE / 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockKind {
    /// blocks motion from every direction
    Solid,
    /// blocks only a falling body whose feet land inside it
    Platform,
}

/// Static collision rectangle, fixed after level load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionBlock {
    pub rect: WorldRect,
    pub kind: BlockKind,
}

impl CollisionBlock {
    pub fn at_tile(kind: BlockKind, tile_x: u32, tile_y: u32) -> CollisionBlock {
        let height = match kind {
            BlockKind::Solid => TILE_SIZE,
            BlockKind::Platform => PLATFORM_HEIGHT,
        };
        CollisionBlock {
            rect: rect(
                Float::from(tile_x * TILE_SIZE),
                Float::from(tile_y * TILE_SIZE),
                Float::from(TILE_SIZE),
                Float::from(height),
            ),
            kind,
        }
    }
}

/// construction faults in level geometry
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LevelError {
    ZeroStride,
    BadStride { len: usize, stride: u32 },
}

impl Error for LevelError {}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            LevelError::ZeroStride => write!(f, "ZeroStride: row stride must be positive"),
            LevelError::BadStride { len, stride } => write!(
                f,
                "BadStride: grid length {} is not a multiple of row stride {}",
                len, stride
            ),
        }
    }
}

/// The static collision world: one solid set, one platform set, and the
/// pixel extent derived from the floor grid. Blocks keep grid scan order;
/// the resolver relies on it.
pub struct Level {
    solids: Vec<CollisionBlock>,
    platforms: Vec<CollisionBlock>,
    stride: u32,
    rows: u32,
}

impl Level {
    /// Build the block index from two flat row-major symbol grids sharing
    /// one row stride. Every cell equal to `solid` becomes a block.
    pub fn from_grids(
        floor: &[u16],
        platforms: &[u16],
        stride: u32,
        solid: u16,
    ) -> Result<Level, LevelError> {
        let solids = scan_grid(floor, stride, solid, BlockKind::Solid)?;
        let platform_blocks = scan_grid(platforms, stride, solid, BlockKind::Platform)?;
        let rows = (floor.len() / stride as usize) as u32;
        info!(
            "level: {} solid / {} platform blocks in {}x{} tiles",
            solids.len(),
            platform_blocks.len(),
            stride,
            rows
        );
        Ok(Level {
            solids,
            platforms: platform_blocks,
            stride,
            rows,
        })
    }
    pub fn solids(&self) -> &[CollisionBlock] {
        &self.solids
    }
    pub fn platforms(&self) -> &[CollisionBlock] {
        &self.platforms
    }
    /// world extent in pixels, from the floor grid dimensions
    pub fn pixel_size(&self) -> WorldSize {
        WorldSize::new(
            Float::from(self.stride * TILE_SIZE),
            Float::from(self.rows * TILE_SIZE),
        )
    }
}

fn scan_grid(
    data: &[u16],
    stride: u32,
    solid: u16,
    kind: BlockKind,
) -> Result<Vec<CollisionBlock>, LevelError> {
    if stride == 0 {
        return Err(LevelError::ZeroStride);
    }
    if data.len() % stride as usize != 0 {
        return Err(LevelError::BadStride {
            len: data.len(),
            stride,
        });
    }
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let rows = (data.len() / stride as usize) as u32;
    let range = RectRange::zero_start(stride, rows).expect("checked non-empty grid");
    Ok(range
        .into_iter()
        .zip(data.iter())
        .filter_map(|((x, y), &symbol)| {
            if symbol == solid {
                Some(CollisionBlock::at_tile(kind, x, y))
            } else {
                None
            }
        })
        .collect())
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let tile_of = |b: &CollisionBlock| {
            (
                (b.rect.origin.x / Float::from(TILE_SIZE)) as u32,
                (b.rect.origin.y / Float::from(TILE_SIZE)) as u32,
            )
        };
        let solid: HashSet<_> = self.solids.iter().map(tile_of).collect();
        let platform: HashSet<_> = self.platforms.iter().map(tile_of).collect();
        writeln!(f, "level {}x{} {{", self.stride, self.rows)?;
        for y in 0..self.rows {
            for x in 0..self.stride {
                let style = if solid.contains(&(x, y)) {
                    Style::new().on(Colour::RGB(110, 110, 110))
                } else if platform.contains(&(x, y)) {
                    Style::new().on(Colour::RGB(222, 184, 135))
                } else {
                    Style::new()
                };
                write!(f, "{}", style.paint("  "))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "}}")
    }
}
