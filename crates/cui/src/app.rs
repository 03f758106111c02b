use crate::LaunchOptions;
use anyhow::{Context, Result};
use pokerslots_core::{Event, Game, InputEvent, RngState};
use ratatui::layout::Rect;

pub const INSUFFICIENT_FUNDS_NOTICE: &str = "Insufficient balance!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    BetSelector { options: Vec<u64>, cursor: usize },
    Notice(String),
}

pub struct App {
    pub game: Game,
    pub modal: Option<Modal>,
    pub status_line: String,
    pub should_quit: bool,
    /// Terminal area of the last drawn frame, for mapping mouse clicks back
    /// onto the table.
    pub surface: Rect,
}

impl App {
    pub fn bootstrap(options: &LaunchOptions) -> Result<Self> {
        let assets = options.assets_dir();
        let config = pokerslots_data::load_game_config(&assets)
            .with_context(|| format!("load assets from {}", assets.display()))?;
        let rng = match options.seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        log::info!("table ready, seed {}", rng.seed());
        Ok(Self::new(Game::new(config, rng)))
    }

    pub fn new(game: Game) -> Self {
        Self {
            game,
            modal: None,
            status_line: "ready".to_string(),
            should_quit: false,
            surface: Rect::default(),
        }
    }

    /// Feeds one frame to the game and reacts to what it reported.
    pub fn on_frame(&mut self, delta_ms: f64) {
        self.game.tick(delta_ms);
        self.flush_events();
    }

    pub fn queue(&mut self, input: InputEvent) {
        self.game.queue_input(input);
    }

    pub fn push_status(&mut self, value: impl Into<String>) {
        self.status_line = value.into();
    }

    pub fn move_bet_cursor(&mut self, down: bool) {
        if let Some(Modal::BetSelector { options, cursor }) = self.modal.as_mut() {
            if options.is_empty() {
                return;
            }
            *cursor = if down {
                (*cursor + 1) % options.len()
            } else {
                (*cursor + options.len() - 1) % options.len()
            };
        }
    }

    pub fn confirm_bet(&mut self) {
        if let Some(Modal::BetSelector { options, cursor }) = self.modal.take() {
            if let Some(bet) = options.get(cursor).copied() {
                self.queue(InputEvent::ChooseBet(bet));
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    fn flush_events(&mut self) {
        let drained: Vec<_> = self.game.drain_events().collect();
        for event in drained {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: Event) {
        match event {
            Event::BetSelectorRequested { options } => {
                let cursor = options
                    .iter()
                    .position(|bet| *bet == self.game.bet())
                    .unwrap_or(0);
                self.modal = Some(Modal::BetSelector { options, cursor });
            }
            Event::BetChanged { bet } => self.push_status(format!("bet set to ${bet}")),
            Event::InsufficientFunds { .. } => {
                self.modal = Some(Modal::Notice(INSUFFICIENT_FUNDS_NOTICE.to_string()));
            }
            Event::RoundStarted { bet, .. } => self.push_status(format!("dealt, bet ${bet}")),
            Event::HoldToggled { position, held } => {
                let verb = if held { "held" } else { "released" };
                self.push_status(format!("card {} {verb}", position + 1));
            }
            Event::CardsReplaced { count } => self.push_status(format!("drawing {count}")),
            Event::AnimationFinished { .. } => {}
            Event::HandEvaluated { hand, win } => match hand {
                Some(kind) => self.push_status(format!("{} pays ${win}", kind.name())),
                None => self.push_status("no win"),
            },
            Event::RoundSettled { balance, .. } => {
                self.push_status(format!("balance ${balance}"))
            }
            Event::InputRejected { reason, .. } => self.push_status(reason),
        }
    }
}
