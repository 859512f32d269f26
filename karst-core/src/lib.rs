#[macro_use]
extern crate log;

pub mod input;
pub mod sprite;
#[cfg(test)]
mod testutils;
pub mod world;

use crate::input::{Action, InputHandler};
use crate::world::level::Level;
use crate::world::physics::worldtypes::*;
use crate::world::World;

/// clock counter type
/// currently we use world updates as a counter, but it may be changed in the future
pub type Clock = u64;

/// Inclusive time span
/// We use our own type instead of Range, to get 'Copy'
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Span {
    pub start: Clock,
    pub end: Clock,
}

impl Span {
    pub fn new(s: Clock, e: Clock) -> Span {
        Span { start: s, end: e }
    }
    pub fn length(&self) -> Clock {
        1 + self.end - self.start
    }
}

/// game setting(builder)
pub struct GameSetting {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) scale: Float,
    pub(crate) gravity: Float,
    pub(crate) move_speed: Float,
    pub(crate) jump_speed: Float,
}

impl GameSetting {
    const DEFAULT_WIDTH: u32 = 1024;
    const DEFAULT_HEIGHT: u32 = 576;
    const DEFAULT_SCALE: Float = 4.0;
    const DEFAULT_GRAVITY: Float = 0.1;
    const DEFAULT_MOVE_SPEED: Float = 2.0;
    const DEFAULT_JUMP_SPEED: Float = 4.0;
    pub fn new() -> GameSetting {
        GameSetting {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            scale: Self::DEFAULT_SCALE,
            gravity: Self::DEFAULT_GRAVITY,
            move_speed: Self::DEFAULT_MOVE_SPEED,
            jump_speed: Self::DEFAULT_JUMP_SPEED,
        }
    }
    pub fn width(&mut self, width: u32) -> &mut GameSetting {
        self.width = width;
        self
    }
    pub fn height(&mut self, height: u32) -> &mut GameSetting {
        self.height = height;
        self
    }
    /// zoom factor from device pixels to world units
    pub fn scale(&mut self, s: Float) -> &mut GameSetting {
        self.scale = s;
        self
    }
    /// downward velocity added every update
    pub fn gravity(&mut self, g: Float) -> &mut GameSetting {
        self.gravity = g;
        self
    }
    pub fn move_speed(&mut self, v: Float) -> &mut GameSetting {
        self.move_speed = v;
        self
    }
    pub fn jump_speed(&mut self, v: Float) -> &mut GameSetting {
        self.jump_speed = v;
        self
    }
}

/// All game data in karst
///
/// Owns the simulated world and the input handler, and advances both by
/// exactly one step per rendered frame.
///
/// # Example
/// ```ignore
/// let mut setting = GameSetting::new();
/// setting.width(1024).height(576).scale(4.0);
/// let level = Level::from_grids(&floor, &platforms, 36, 202)?;
/// let mut game = Game::new(setting, level, point2(100.0, 300.0));
/// loop {
///     // feed key events via game.press / game.release, then
///     game.update();
///     // read game.world() to paint
/// }
/// ```
pub struct Game {
    world: World,
    input_handle: InputHandler,
    upd_count: Clock,
}

impl Game {
    pub fn new(setting: GameSetting, level: Level, spawn: WorldPoint) -> Game {
        Game {
            world: World::new(&setting, level, spawn),
            input_handle: InputHandler::default(),
            upd_count: 0,
        }
    }
    pub fn press(&mut self, action: Action) {
        self.input_handle.press(action, self.upd_count);
    }
    pub fn release(&mut self, action: Action) {
        self.input_handle.release(action, self.upd_count);
    }
    /// advance the simulation by one frame
    pub fn update(&mut self) {
        let message = self.input_handle.message();
        self.world.update(message);
        self.upd_count += 1;
    }
    pub fn world(&self) -> &World {
        &self.world
    }
    /// window resize passthrough
    pub fn resize(&mut self, width: u32, height: u32) {
        self.world.resize(width, height);
    }
    pub fn clock(&self) -> Clock {
        self.upd_count
    }
}

#[cfg(test)]
mod lib_test {
    use super::*;
    use crate::testutils::floor_level;
    use euclid::point2;

    #[test]
    fn span_length_is_inclusive() {
        assert_eq!(Span::new(3, 3).length(), 1);
        assert_eq!(Span::new(3, 7).length(), 5);
    }

    #[test]
    fn update_counts_clock() {
        let level = floor_level(8, 6);
        let mut game = Game::new(GameSetting::new(), level, point2(0.0, 0.0));
        assert_eq!(game.clock(), 0);
        game.update();
        game.update();
        assert_eq!(game.clock(), 2);
    }

    #[test]
    fn setting_defaults_match_tuning() {
        let s = GameSetting::new();
        assert_eq!(s.gravity, 0.1);
        assert_eq!(s.move_speed, 2.0);
        assert_eq!(s.jump_speed, 4.0);
        assert_eq!(s.scale, 4.0);
    }
}
