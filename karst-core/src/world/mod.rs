//! Object and map manager
//!
//! One `update` per rendered frame, in fixed order: read intent, clamp at
//! the world edge, integrate and resolve collisions, then track the
//! camera. Swapping resolver and camera order produces visible jitter.
pub mod camera;
pub mod level;
pub mod physics;
pub mod player;

use self::camera::{Camera, Viewport};
use self::level::Level;
use self::physics::worldtypes::*;
use self::player::Player;
use crate::input::ActionMessage;
use crate::sprite::{Facing, Pose};
use crate::GameSetting;

pub struct World {
    level: Level,
    player: Player,
    camera: Camera,
    viewport: Viewport,
    gravity: Float,
    move_speed: Float,
    jump_speed: Float,
}

impl World {
    pub fn new(setting: &GameSetting, level: Level, spawn: WorldPoint) -> World {
        let viewport = Viewport::new(setting.width, setting.height, setting.scale);
        let camera = Camera::at_level_bottom(&viewport, level.pixel_size());
        World {
            level,
            player: Player::new(spawn),
            camera,
            viewport,
            gravity: setting.gravity,
            move_speed: setting.move_speed,
            jump_speed: setting.jump_speed,
        }
    }

    /// advance one frame
    pub fn update(&mut self, actions: ActionMessage) {
        self.apply_actions(actions);
        self.player.clamp_to_bounds(self.level.pixel_size());
        self.player
            .step(self.level.solids(), self.level.platforms(), self.gravity);
        self.track_camera();
    }

    /// Velocity intent: horizontal velocity is rebuilt from held keys every
    /// frame, right winning over left; a jump edge launches even mid-air
    /// rise, same as walking off a ledge keeps Fall pose.
    fn apply_actions(&mut self, actions: ActionMessage) {
        let player = &mut self.player;
        player.velocity.x = 0.0;
        if actions.right {
            player.facing = Facing::Right;
            player.velocity.x = self.move_speed;
        } else if actions.left {
            player.facing = Facing::Left;
            player.velocity.x = -self.move_speed;
        }
        if actions.jump {
            player.velocity.y = -self.jump_speed;
        }
        let pose = if player.velocity.y < 0.0 {
            Pose::Jump
        } else if player.velocity.y > 0.0 {
            Pose::Fall
        } else if actions.right || actions.left {
            Pose::Run
        } else {
            Pose::Idle
        };
        let facing = player.facing;
        player.sprite.switch(pose, facing);
    }

    /// One guarded adjustment per axis direction, driven by the velocity
    /// the resolver left on the player this frame.
    fn track_camera(&mut self) {
        let tracking = self.player.tracking_box();
        let velocity = self.player.velocity;
        let world = self.level.pixel_size();
        if velocity.x > 0.0 {
            self.camera
                .follow_right(tracking, velocity.x, &self.viewport, world);
        } else if velocity.x < 0.0 {
            self.camera.follow_left(tracking, velocity.x);
        }
        if velocity.y < 0.0 {
            self.camera.follow_rising(tracking, velocity.y);
        } else if velocity.y > 0.0 {
            self.camera
                .follow_falling(tracking, velocity.y, &self.viewport, world);
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
    pub fn level(&self) -> &Level {
        &self.level
    }
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.set_size(width, height);
    }
}

#[cfg(test)]
mod world_test {
    use super::*;
    use crate::input::ActionMessage;
    use crate::testutils::{floor_level, message};
    use crate::GameSetting;
    use euclid::point2;

    fn world_with_floor() -> World {
        // 32x12 tiles: 512x192 world with a full ground row at the bottom
        let mut setting = GameSetting::new();
        setting.width(640).height(192).scale(4.0);
        World::new(&setting, floor_level(32, 12), point2(100.0, 50.0))
    }

    #[test]
    fn falls_and_comes_to_rest_on_the_ground() {
        let mut world = world_with_floor();
        for _ in 0..200 {
            world.update(ActionMessage::default());
        }
        let player = world.player();
        assert_eq!(player.velocity.y, 0.0);
        // ground row starts at 176
        assert!((player.hitbox().max_y() - 175.99).abs() < 1e-9);
        let resting = player.position.y;
        let mut world2 = world;
        world2.update(ActionMessage::default());
        assert!((world2.player().position.y - resting).abs() < 1e-9);
    }

    #[test]
    fn held_right_moves_at_walk_speed() {
        let mut world = world_with_floor();
        // settle on the ground first
        for _ in 0..200 {
            world.update(ActionMessage::default());
        }
        let start = world.player().position.x;
        for _ in 0..5 {
            world.update(message(false, true, false));
        }
        assert_eq!(world.player().position.x, start + 10.0);
        assert_eq!(world.player().facing, crate::sprite::Facing::Right);
    }

    #[test]
    fn camera_pans_in_lockstep_once_threshold_crossed() {
        let mut world = world_with_floor();
        for _ in 0..200 {
            world.update(ActionMessage::default());
        }
        // scaled width 160; tracking right edge = x + 150, so panning
        // starts as soon as x + 150 >= 160 + |offset|
        for _ in 0..20 {
            world.update(message(false, true, false));
        }
        let x = world.player().position.x;
        assert_eq!(world.camera().offset().x, -(x - 100.0));
    }

    #[test]
    fn jump_rises_then_gravity_wins() {
        let mut world = world_with_floor();
        for _ in 0..200 {
            world.update(ActionMessage::default());
        }
        let ground_y = world.player().position.y;
        world.update(message(false, false, true));
        assert!(world.player().velocity.y < 0.0);
        assert!(world.player().position.y < ground_y);
        // jump must decay and land again
        for _ in 0..200 {
            world.update(ActionMessage::default());
        }
        assert!((world.player().position.y - ground_y).abs() < 1e-9);
    }

    #[test]
    fn stops_at_the_world_edge() {
        let mut world = world_with_floor();
        for _ in 0..2000 {
            world.update(message(false, true, false));
        }
        let hitbox = world.player().hitbox();
        assert!(hitbox.max_x() < 512.0);
        assert!(hitbox.max_x() > 512.0 - 2.0 - 1e-9);
    }
}
