//! pan offset and the edge-tracking policy
use euclid::vec2;
use tuple_map::TupleMap2;

use super::physics::worldtypes::*;

/// Display surface in device pixels plus the zoom factor down to world
/// units. Resizable; the scale is fixed at startup.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    width: u32,
    height: u32,
    scale: Float,
}

impl Viewport {
    pub fn new(width: u32, height: u32, scale: Float) -> Viewport {
        assert!(scale > 0.0, "viewport scale must be positive");
        Viewport {
            width,
            height,
            scale,
        }
    }
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
    /// visible extent in world units
    pub fn scaled(&self) -> (Float, Float) {
        (self.width, self.height).map(|v| Float::from(v) / self.scale)
    }
}

/// Pan offset applied to the scene before painting. The offset is only
/// ever nudged by the player's own per-frame velocity, so the camera
/// stays in lock-step once a threshold is crossed, and the world-bound
/// guards double as the clamp.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    offset: WorldVector,
}

impl Camera {
    /// start with the level's bottom edge on screen
    pub fn at_level_bottom(viewport: &Viewport, world: WorldSize) -> Camera {
        let (_, scaled_h) = viewport.scaled();
        Camera {
            offset: vec2(0.0, scaled_h - world.height),
        }
    }
    pub fn offset(&self) -> WorldVector {
        self.offset
    }

    /// Player moving right: reveal world on the right, unless the tracking
    /// box already touches the world's right bound.
    pub fn follow_right(
        &mut self,
        tracking: WorldRect,
        vx: Float,
        viewport: &Viewport,
        world: WorldSize,
    ) {
        if tracking.max_x() >= world.width {
            return;
        }
        let (scaled_w, _) = viewport.scaled();
        if tracking.max_x() >= scaled_w + self.offset.x.abs() {
            self.offset.x -= vx;
        }
    }

    /// Player moving left: reveal world on the left.
    pub fn follow_left(&mut self, tracking: WorldRect, vx: Float) {
        if tracking.min_x() <= 0.0 {
            return;
        }
        if tracking.min_x() <= self.offset.x.abs() {
            self.offset.x -= vx;
        }
    }

    /// Player rising: reveal world above.
    pub fn follow_rising(&mut self, tracking: WorldRect, vy: Float) {
        if tracking.min_y() + vy <= 0.0 {
            return;
        }
        if tracking.min_y() <= self.offset.y.abs() {
            self.offset.y -= vy;
        }
    }

    /// Player falling: reveal world below, unless the tracking box would
    /// leave the bottom of the world (no ground there to land on).
    pub fn follow_falling(
        &mut self,
        tracking: WorldRect,
        vy: Float,
        viewport: &Viewport,
        world: WorldSize,
    ) {
        if tracking.max_y() + vy >= world.height {
            return;
        }
        let (_, scaled_h) = viewport.scaled();
        if tracking.max_y() >= self.offset.y.abs() + scaled_h {
            self.offset.y -= vy;
        }
    }
}
