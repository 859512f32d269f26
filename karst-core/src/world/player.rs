//! the player entity and per-frame collision resolution
use euclid::{size2, vec2};

use super::level::CollisionBlock;
use super::physics::worldtypes::*;
use super::physics::{overlaps, platform_overlaps, SKIN};
use crate::sprite::{Facing, Sprite};

/// A derived box: fixed offset and size anchored to an entity position.
/// Anchoring is a pure function of the position, so derived boxes can
/// never drift from the entity that owns them.
#[derive(Clone, Copy, Debug)]
pub struct BoxSpec {
    pub offset: WorldVector,
    pub size: WorldSize,
}

impl BoxSpec {
    pub fn anchored_at(&self, position: WorldPoint) -> WorldRect {
        WorldRect::new(position + self.offset, self.size)
    }
}

/// collision box inset into the sprite box
fn hitbox_spec() -> BoxSpec {
    BoxSpec {
        offset: vec2(35.0, 26.0),
        size: size2(14.0, 27.0),
    }
}

/// wider box used only for camera panning decisions
fn tracking_spec() -> BoxSpec {
    BoxSpec {
        offset: vec2(-50.0, 0.0),
        size: size2(200.0, 80.0),
    }
}

pub struct Player {
    /// upper left of the sprite box, not of the hitbox
    pub position: WorldPoint,
    pub velocity: WorldVector,
    pub facing: Facing,
    pub sprite: Sprite,
    hitbox: BoxSpec,
    tracking: BoxSpec,
}

impl Player {
    pub fn new(position: WorldPoint) -> Player {
        Player {
            position,
            velocity: vec2(0.0, 1.0),
            facing: Facing::Right,
            sprite: Sprite::new(),
            hitbox: hitbox_spec(),
            tracking: tracking_spec(),
        }
    }

    /// collision box at the current position
    pub fn hitbox(&self) -> WorldRect {
        self.hitbox.anchored_at(self.position)
    }

    /// camera-tracking box at the current position
    pub fn tracking_box(&self) -> WorldRect {
        self.tracking.anchored_at(self.position)
    }

    /// draw rect for the renderer; zero-sized until a sheet is attached
    pub fn sprite_rect(&self) -> WorldRect {
        WorldRect::new(self.position, self.sprite.frame_size())
    }

    /// Zero horizontal velocity when the next step would carry the hitbox
    /// past either side of the world. Predicting one frame ahead keeps the
    /// player from sticking to the edge.
    pub fn clamp_to_bounds(&mut self, bounds: WorldSize) {
        let hitbox = self.hitbox();
        if hitbox.max_x() + self.velocity.x >= bounds.width
            || hitbox.min_x() + self.velocity.x <= 0.0
        {
            self.velocity.x = 0.0;
        }
    }

    /// One frame of integration and resolution, in load-bearing order:
    /// horizontal move, horizontal resolution, gravity + vertical move,
    /// vertical resolution against solids then platforms.
    pub fn step(
        &mut self,
        solids: &[CollisionBlock],
        platforms: &[CollisionBlock],
        gravity: Float,
    ) {
        self.sprite.tick();
        self.position.x += self.velocity.x;
        self.resolve_horizontal(solids);
        self.apply_gravity(gravity);
        self.resolve_vertical(solids, platforms);
    }

    /// Gravity folds into velocity before the positional move. At rest the
    /// velocity accumulates one increment and vertical resolution zeroes it
    /// again in the same frame, so it can never grow.
    fn apply_gravity(&mut self, gravity: Float) {
        self.velocity.y += gravity;
        self.position.y += self.velocity.y;
    }

    /// First overlapping solid wins, in index order; at most one
    /// correction per frame.
    fn resolve_horizontal(&mut self, solids: &[CollisionBlock]) {
        let hitbox = self.hitbox();
        for block in solids {
            if !overlaps(&hitbox, &block.rect) {
                continue;
            }
            if self.velocity.x > 0.0 {
                self.velocity.x = 0.0;
                let offset = hitbox.min_x() - self.position.x + hitbox.size.width;
                self.position.x = block.rect.min_x() - offset - SKIN;
                break;
            }
            if self.velocity.x < 0.0 {
                self.velocity.x = 0.0;
                let offset = hitbox.min_x() - self.position.x;
                self.position.x = block.rect.max_x() - offset + SKIN;
                break;
            }
        }
    }

    /// Solids stop motion both ways; platforms only catch a falling body
    /// whose feet are inside their band. Both passes share the hitbox
    /// sampled before the solid pass.
    fn resolve_vertical(&mut self, solids: &[CollisionBlock], platforms: &[CollisionBlock]) {
        let hitbox = self.hitbox();
        for block in solids {
            if !overlaps(&hitbox, &block.rect) {
                continue;
            }
            if self.velocity.y > 0.0 {
                self.velocity.y = 0.0;
                let offset = hitbox.min_y() - self.position.y + hitbox.size.height;
                self.position.y = block.rect.min_y() - offset - SKIN;
                break;
            }
            if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
                let offset = hitbox.min_y() - self.position.y;
                self.position.y = block.rect.max_y() - offset + SKIN;
                break;
            }
        }
        for block in platforms {
            if !platform_overlaps(&hitbox, &block.rect) {
                continue;
            }
            if self.velocity.y > 0.0 {
                self.velocity.y = 0.0;
                let offset = hitbox.min_y() - self.position.y + hitbox.size.height;
                self.position.y = block.rect.min_y() - offset - SKIN;
                break;
            }
        }
    }
}
