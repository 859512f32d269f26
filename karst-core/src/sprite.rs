//! sprite sheets and frame animation
use euclid::rect;
use image::RgbaImage;
use std::collections::HashMap;
use std::path::Path;

use crate::world::physics::worldtypes::*;
use crate::Clock;

/// sheet pixel coordinates (left to right strip of equally sized frames)
pub struct SheetSpace;
pub type SheetRect = euclid::Rect<u32, SheetSpace>;

/// One horizontal strip of animation frames plus its draw scale.
pub struct SpriteSheet {
    buf: RgbaImage,
    frames: u32,
    scale: Float,
}

impl SpriteSheet {
    pub fn load(
        path: impl AsRef<Path>,
        frames: u32,
        scale: Float,
    ) -> Result<SpriteSheet, image::ImageError> {
        let buf = image::open(path)?.to_rgba8();
        Ok(SpriteSheet::from_buf(buf, frames, scale))
    }
    pub fn from_buf(buf: RgbaImage, frames: u32, scale: Float) -> SpriteSheet {
        SpriteSheet {
            buf,
            frames: frames.max(1),
            scale,
        }
    }
    pub fn frames(&self) -> u32 {
        self.frames
    }
    /// world-unit size of one frame after draw scaling
    pub fn frame_size(&self) -> WorldSize {
        let w = Float::from(self.buf.width()) / Float::from(self.frames);
        let h = Float::from(self.buf.height());
        WorldSize::new(w * self.scale, h * self.scale)
    }
    /// pixel crop of frame `idx` within the sheet
    pub fn crop(&self, idx: u32) -> SheetRect {
        let frame_w = self.buf.width() / self.frames;
        rect(idx * frame_w, 0, frame_w, self.buf.height())
    }
}

/// Lazily stepped, restartable sequence of frame indices.
///
/// Advances one index every `buffer` ticks and wraps at `len`; driven by
/// update count, never by wall clock.
#[derive(Clone, Copy, Debug)]
pub struct FrameSeq {
    len: u32,
    buffer: Clock,
    elapsed: Clock,
    current: u32,
}

impl FrameSeq {
    pub fn new(len: u32, buffer: Clock) -> FrameSeq {
        FrameSeq {
            len: len.max(1),
            buffer: buffer.max(1),
            elapsed: 0,
            current: 0,
        }
    }
    pub fn current(&self) -> u32 {
        self.current
    }
    /// advance one tick, returning the frame index to show
    pub fn tick(&mut self) -> u32 {
        self.elapsed += 1;
        if self.elapsed % self.buffer == 0 {
            self.current = if self.current + 1 < self.len {
                self.current + 1
            } else {
                0
            };
        }
        self.current
    }
    pub fn restart(&mut self) {
        self.elapsed = 0;
        self.current = 0;
    }
}

/// logical animation state
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Pose {
    Idle,
    Run,
    Jump,
    Fall,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Facing {
    Left,
    Right,
}

pub struct Animation {
    pub sheet: SpriteSheet,
    /// ticks per frame advance
    pub frame_buffer: Clock,
}

impl Animation {
    pub fn new(sheet: SpriteSheet, frame_buffer: Clock) -> Animation {
        Animation {
            sheet,
            frame_buffer,
        }
    }
}

/// Animated sprite embedded in an entity.
///
/// A table of animations keyed by pose plus the currently playing
/// sequence. Starts empty ("not loaded"); entities behave sanely before
/// any sheet is attached, they just have a zero-size frame.
#[derive(Default)]
pub struct Sprite {
    animations: HashMap<(Pose, Facing), Animation>,
    playing: Option<(Pose, Facing)>,
    seq: Option<FrameSeq>,
}

impl Sprite {
    pub fn new() -> Sprite {
        Sprite::default()
    }
    pub fn insert(&mut self, pose: Pose, facing: Facing, animation: Animation) {
        self.animations.insert((pose, facing), animation);
    }
    pub fn is_loaded(&self) -> bool {
        !self.animations.is_empty()
    }
    /// Switch to another pose. Re-selecting the playing pose is a no-op
    /// (the sequence keeps its phase); unknown poses are refused.
    pub fn switch(&mut self, pose: Pose, facing: Facing) {
        if self.playing == Some((pose, facing)) {
            return;
        }
        let animation = match self.animations.get(&(pose, facing)) {
            Some(a) => a,
            None => return,
        };
        self.playing = Some((pose, facing));
        self.seq = Some(FrameSeq::new(animation.sheet.frames(), animation.frame_buffer));
    }
    /// advance the playing sequence one update
    pub fn tick(&mut self) {
        if let Some(seq) = self.seq.as_mut() {
            seq.tick();
        }
    }
    pub fn playing(&self) -> Option<(Pose, Facing)> {
        self.playing
    }
    /// world-unit draw size of the current frame; zero until a sheet plays
    pub fn frame_size(&self) -> WorldSize {
        match self.playing.and_then(|key| self.animations.get(&key)) {
            Some(animation) => animation.sheet.frame_size(),
            None => WorldSize::zero(),
        }
    }
    /// pixel crop for the renderer, if anything is playing
    pub fn current_crop(&self) -> Option<SheetRect> {
        let key = self.playing?;
        let animation = self.animations.get(&key)?;
        let idx = self.seq.map(|s| s.current()).unwrap_or(0);
        Some(animation.sheet.crop(idx))
    }
}
