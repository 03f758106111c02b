use crate::{HandKind, InputEvent, PhaseKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    /// The bet button was clicked while a bet change is allowed.
    BetSelectorRequested { options: Vec<u64> },
    BetChanged { bet: u64 },
    InsufficientFunds { balance: u64, bet: u64 },
    RoundStarted { bet: u64, balance: u64 },
    HoldToggled { position: usize, held: bool },
    CardsReplaced { count: usize },
    AnimationFinished { next: PhaseKind },
    HandEvaluated { hand: Option<HandKind>, win: u64 },
    RoundSettled { win: u64, balance: u64 },
    /// Queued input that applied to the phase but was still refused, such as
    /// a bet that is not offered.
    InputRejected { input: InputEvent, reason: String },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
