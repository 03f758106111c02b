use crate::{Card, Deck, EventBus, GameConfig, InputQueue, Layout, Phase, PhaseKind, RngState};
use thiserror::Error;

mod dispatch;
mod round;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("insufficient balance: have {balance}, bet is {bet}")]
    InsufficientFunds { balance: u64, bet: u64 },
    #[error("invalid phase: {0}")]
    InvalidPhase(PhaseKind),
    #[error("invalid hand position {0}")]
    InvalidPosition(usize),
    #[error("bet {0} is not offered")]
    InvalidBet(u64),
    #[error("deck exhausted")]
    DeckExhausted,
}

/// The whole game context. Every transition goes through `&mut Game`; there
/// is no state outside of it.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    layout: Layout,
    rng: RngState,
    balance: u64,
    bet: u64,
    deck: Deck,
    /// Cards swapped out of the hand this round.
    replaced: Vec<Card>,
    phase: Phase,
    inputs: InputQueue,
    events: EventBus,
}

impl Game {
    pub fn new(config: GameConfig, rng: RngState) -> Self {
        Self {
            balance: config.starting_balance,
            bet: config.default_bet,
            config,
            layout: Layout::default(),
            rng,
            deck: Deck::default(),
            replaced: Vec::new(),
            phase: Phase::Initial,
            inputs: InputQueue::default(),
            events: EventBus::default(),
        }
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RngState::from_seed(seed))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn replaced(&self) -> &[Card] {
        &self.replaced
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = crate::Event> + '_ {
        self.events.drain()
    }
}
