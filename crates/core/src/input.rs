use crate::Point;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Player input as reported by a front end, before any state checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer click in viewport coordinates; hit-tested by the game.
    Click(Point),
    /// Play / Roll / Next, whichever applies.
    Primary,
    /// Ask for the bet selector, as the bet button does.
    BetSelector,
    ToggleHold(usize),
    ChooseBet(u64),
}

/// Inputs collected between frames, drained once at the start of a tick.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
