use std::collections::HashMap;

use crate::{Clock, Span};

/// Logical actions the world reads. Key-to-action mapping is the
/// embedder's business; the handler only sees actions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

/// message type Handler sends to the world once per update
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionMessage {
    /// move-left is held
    pub left: bool,
    /// move-right is held
    pub right: bool,
    /// a jump press happened since the last message
    pub jump: bool,
}

/// Collects press/release events between updates and reduces them to an
/// `ActionMessage`. Jump is edge-triggered: one queued impulse per press,
/// consumed by the next `message` call. Holding the key does not re-queue.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// held actions with first press time
    pressed: HashMap<Action, Clock>,
    /// jump press waiting to be consumed
    jump_queued: bool,
}

impl InputHandler {
    pub fn press(&mut self, action: Action, clock: Clock) {
        if action == Action::Jump && !self.pressed.contains_key(&action) {
            self.jump_queued = true;
        }
        self.pressed.entry(action).or_insert(clock);
    }
    pub fn release(&mut self, action: Action, clock: Clock) {
        match self.pressed.remove(&action) {
            Some(start) => {
                trace!(
                    "{:?} held for {} updates",
                    action,
                    Span::new(start, clock).length()
                );
            }
            None => warn!("not pressed action released! {:?}", action),
        }
    }
    pub fn message(&mut self) -> ActionMessage {
        let message = ActionMessage {
            left: self.pressed.contains_key(&Action::MoveLeft),
            right: self.pressed.contains_key(&Action::MoveRight),
            jump: self.jump_queued,
        };
        self.jump_queued = false;
        message
    }
}
