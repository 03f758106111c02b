use super::*;
use crate::*;

impl Game {
    /// The primary button: Play, Roll or Next depending on the phase.
    pub fn press_primary(&mut self) -> Result<(), GameError> {
        match self.phase.kind() {
            PhaseKind::Initial => self.start_round(),
            PhaseKind::Select => self.roll(),
            PhaseKind::Result => self.next_round(),
            kind => Err(GameError::InvalidPhase(kind)),
        }
    }

    pub fn request_bet_selector(&mut self) -> Result<(), GameError> {
        if !matches!(self.phase, Phase::Initial) {
            return Err(GameError::InvalidPhase(self.phase.kind()));
        }
        self.events.push(Event::BetSelectorRequested {
            options: self.config.bet_options.clone(),
        });
        Ok(())
    }

    pub fn handle(&mut self, input: InputEvent) -> Result<(), GameError> {
        match input {
            InputEvent::Click(point) => self.click(point),
            InputEvent::Primary => self.press_primary(),
            InputEvent::BetSelector => self.request_bet_selector(),
            InputEvent::ToggleHold(position) => self.toggle_hold(position).map(|_| ()),
            InputEvent::ChooseBet(bet) => self.set_bet(bet),
        }
    }

    fn click(&mut self, point: Point) -> Result<(), GameError> {
        match self.layout.hit_test(point) {
            Some(Region::BetButton) => self.request_bet_selector(),
            Some(Region::PrimaryButton) => self.press_primary(),
            Some(Region::Card(position)) => self.toggle_hold(position).map(|_| ()),
            None => Ok(()),
        }
    }

    pub fn queue_input(&mut self, input: InputEvent) {
        self.inputs.push(input);
    }

    /// One frame: drain queued input, then advance the animation by
    /// `delta_ms`. Input that does not apply to the current phase is
    /// dropped; an insufficient balance is already reported as an event and
    /// any other refusal becomes `Event::InputRejected`.
    pub fn tick(&mut self, delta_ms: f64) -> bool {
        let inputs: Vec<InputEvent> = self.inputs.drain().collect();
        for input in inputs {
            match self.handle(input) {
                Ok(()) | Err(GameError::InsufficientFunds { .. }) => {}
                Err(err @ GameError::InvalidPhase(_)) => {
                    log::trace!("ignored {:?}: {}", input, err)
                }
                Err(err) => {
                    log::debug!("rejected {:?}: {}", input, err);
                    self.events.push(Event::InputRejected {
                        input,
                        reason: err.to_string(),
                    });
                }
            }
        }
        self.advance(delta_ms)
    }
}
