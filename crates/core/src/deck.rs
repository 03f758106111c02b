use crate::{Card, Rank, RngState, Suit};
use std::collections::VecDeque;

pub const DECK_SIZE: usize = 52;

/// A 52-card shoe consumed from both ends: the deal takes from the front,
/// replacements come off the back, so the two never hand out the same card.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    pub fn standard52() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    pub fn shuffled(rng: &mut RngState) -> Self {
        let mut deck = Self::standard52();
        rng.shuffle(deck.cards.make_contiguous());
        deck
    }

    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    pub fn draw_replacement(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Front to back; reversible, so callers can peek at the replacement end.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator + '_ {
        self.cards.iter()
    }
}
