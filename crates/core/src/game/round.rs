use super::*;
use crate::*;

impl Game {
    /// "Play": debit the bet, shuffle a fresh deck and deal five cards.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if !matches!(self.phase, Phase::Initial) {
            return Err(GameError::InvalidPhase(self.phase.kind()));
        }
        if self.balance < self.bet {
            log::info!(
                "insufficient balance: have {}, bet is {}",
                self.balance,
                self.bet
            );
            self.events.push(Event::InsufficientFunds {
                balance: self.balance,
                bet: self.bet,
            });
            return Err(GameError::InsufficientFunds {
                balance: self.balance,
                bet: self.bet,
            });
        }

        let mut deck = Deck::shuffled(&mut self.rng);
        let hand = Hand::from_slice(&deck.deal(HAND_SIZE)).ok_or(GameError::DeckExhausted)?;
        self.balance -= self.bet;
        self.deck = deck;
        self.replaced.clear();
        let batch = self.flight(hand.cards().iter().copied().enumerate());
        self.phase = Phase::Dealing { hand, batch };

        log::debug!("round started: bet {} balance {}", self.bet, self.balance);
        self.events.push(Event::RoundStarted {
            bet: self.bet,
            balance: self.balance,
        });
        Ok(())
    }

    pub fn toggle_hold(&mut self, position: usize) -> Result<bool, GameError> {
        let kind = self.phase.kind();
        let Phase::Select { holds, .. } = &mut self.phase else {
            return Err(GameError::InvalidPhase(kind));
        };
        let held = holds
            .toggle(position)
            .ok_or(GameError::InvalidPosition(position))?;
        self.events.push(Event::HoldToggled { position, held });
        Ok(held)
    }

    /// "Roll": replace every position that is not held. With all five held
    /// the hand is scored at once and no animation runs.
    pub fn roll(&mut self) -> Result<(), GameError> {
        let Phase::Select { holds, .. } = &self.phase else {
            return Err(GameError::InvalidPhase(self.phase.kind()));
        };
        let needed = HAND_SIZE - holds.count();
        if self.deck.len() < needed {
            return Err(GameError::DeckExhausted);
        }

        let (mut hand, holds) = match std::mem::take(&mut self.phase) {
            Phase::Select { hand, holds } => (hand, holds),
            other => {
                let kind = other.kind();
                self.phase = other;
                return Err(GameError::InvalidPhase(kind));
            }
        };

        let mut swapped = Vec::with_capacity(needed);
        for position in holds.unheld() {
            let Some(card) = self.deck.draw_replacement() else {
                break;
            };
            let old = hand.replace(position, card);
            self.replaced.push(old);
            swapped.push((position, card));
        }

        if swapped.is_empty() {
            let outcome = self.score(&hand);
            self.phase = Phase::Result { hand, outcome };
        } else {
            log::debug!("replaced {} cards", swapped.len());
            self.events.push(Event::CardsReplaced {
                count: swapped.len(),
            });
            let batch = self.flight(swapped);
            self.phase = Phase::Rolling { hand, batch };
        }
        Ok(())
    }

    /// "Next": pay out and clear the table for the next round.
    pub fn next_round(&mut self) -> Result<(), GameError> {
        let Phase::Result { outcome, .. } = &self.phase else {
            return Err(GameError::InvalidPhase(self.phase.kind()));
        };
        let win = outcome.win;
        self.balance = self.balance.saturating_add(win);
        self.phase = Phase::Initial;

        log::debug!("round settled: won {} balance {}", win, self.balance);
        self.events.push(Event::RoundSettled {
            win,
            balance: self.balance,
        });
        Ok(())
    }

    pub fn set_bet(&mut self, bet: u64) -> Result<(), GameError> {
        if !matches!(self.phase, Phase::Initial) {
            return Err(GameError::InvalidPhase(self.phase.kind()));
        }
        if !self.config.is_bet_offered(bet) {
            return Err(GameError::InvalidBet(bet));
        }
        self.bet = bet;
        self.events.push(Event::BetChanged { bet });
        Ok(())
    }

    /// Steps the running deal/draw animation. When the last card lands the
    /// deal moves on to hold selection and a draw is scored. Returns whether
    /// anything is still in flight.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        let running = match &mut self.phase {
            Phase::Dealing { batch, .. } | Phase::Rolling { batch, .. } => batch.advance(delta_ms),
            _ => return false,
        };
        if running {
            return true;
        }

        self.phase = match std::mem::take(&mut self.phase) {
            Phase::Dealing { hand, .. } => Phase::Select {
                hand,
                holds: Holds::default(),
            },
            Phase::Rolling { hand, .. } => {
                let outcome = self.score(&hand);
                Phase::Result { hand, outcome }
            }
            other => other,
        };
        self.events.push(Event::AnimationFinished {
            next: self.phase.kind(),
        });
        false
    }

    fn score(&mut self, hand: &Hand) -> Outcome {
        let kind = evaluate_hand(hand);
        let win = win_amount(kind, self.bet);
        match kind {
            Some(kind) => log::info!("{} pays {}", kind.name(), win),
            None => log::info!("no win, lost {}", self.bet),
        }
        self.events.push(Event::HandEvaluated { hand: kind, win });
        Outcome { hand: kind, win }
    }

    fn flight(&self, cards: impl IntoIterator<Item = (usize, Card)>) -> AnimationBatch {
        let layout = self.layout;
        AnimationBatch::new(
            layout.deck_origin(),
            cards
                .into_iter()
                .map(|(slot, card)| (slot, card, layout.card_slot(slot).origin())),
        )
    }
}
