use crate::Card;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    JacksOrBetter,
}

impl HandKind {
    /// Paytable order, best hand first.
    pub const ALL: [HandKind; 9] = [
        HandKind::RoyalFlush,
        HandKind::StraightFlush,
        HandKind::FourOfAKind,
        HandKind::FullHouse,
        HandKind::Flush,
        HandKind::Straight,
        HandKind::ThreeOfAKind,
        HandKind::TwoPair,
        HandKind::JacksOrBetter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HandKind::RoyalFlush => "Royal Flush",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::FourOfAKind => "Four of a Kind",
            HandKind::FullHouse => "Full House",
            HandKind::Flush => "Flush",
            HandKind::Straight => "Straight",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::TwoPair => "Two Pair",
            HandKind::JacksOrBetter => "Jacks or Better",
        }
    }
}

/// Five cards in fixed table positions. Positions matter for holds and
/// rendering, never for evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    pub fn from_slice(cards: &[Card]) -> Option<Self> {
        let cards: [Card; HAND_SIZE] = cards.try_into().ok()?;
        Some(Self { cards })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn get(&self, position: usize) -> Option<Card> {
        self.cards.get(position).copied()
    }

    /// Puts `card` at `position` and hands back the card it displaced.
    pub fn replace(&mut self, position: usize, card: Card) -> Card {
        std::mem::replace(&mut self.cards[position], card)
    }
}

/// Hand positions marked to survive the next draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holds {
    held: [bool; HAND_SIZE],
}

impl Holds {
    pub fn toggle(&mut self, position: usize) -> Option<bool> {
        let slot = self.held.get_mut(position)?;
        *slot = !*slot;
        Some(*slot)
    }

    pub fn is_held(&self, position: usize) -> bool {
        self.held.get(position).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.held.iter().filter(|held| **held).count()
    }

    pub fn clear(&mut self) {
        self.held = [false; HAND_SIZE];
    }

    pub fn unheld(&self) -> impl Iterator<Item = usize> + '_ {
        (0..HAND_SIZE).filter(|&position| !self.held[position])
    }
}

pub fn evaluate_hand(hand: &Hand) -> Option<HandKind> {
    evaluate_cards(hand.cards())
}

pub fn evaluate_cards(cards: &[Card; HAND_SIZE]) -> Option<HandKind> {
    let mut values: Vec<u8> = cards.iter().map(Card::value).collect();
    values.sort_unstable();

    let mut value_counts: HashMap<u8, usize> = HashMap::new();
    for value in &values {
        *value_counts.entry(*value).or_insert(0) += 1;
    }
    let mut counts: Vec<usize> = value_counts.values().copied().collect();
    counts.sort_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|card| card.suit == cards[0].suit);
    let is_straight = is_straight(&values);
    let is_royal = is_straight && values[0] == 10;

    if is_royal && is_flush {
        return Some(HandKind::RoyalFlush);
    }
    if is_straight && is_flush {
        return Some(HandKind::StraightFlush);
    }
    if counts[0] == 4 {
        return Some(HandKind::FourOfAKind);
    }
    if counts == [3, 2] {
        return Some(HandKind::FullHouse);
    }
    if is_flush {
        return Some(HandKind::Flush);
    }
    if is_straight {
        return Some(HandKind::Straight);
    }
    if counts[0] == 3 {
        return Some(HandKind::ThreeOfAKind);
    }
    if counts == [2, 2, 1] {
        return Some(HandKind::TwoPair);
    }
    if counts[0] == 2 {
        let pair_value = value_counts
            .iter()
            .find(|(_, &count)| count == 2)
            .map(|(value, _)| *value)?;
        if pair_value >= 11 {
            return Some(HandKind::JacksOrBetter);
        }
    }
    None
}

/// `values` must be sorted ascending. The wheel (A-2-3-4-5) counts with the
/// ace low.
fn is_straight(values: &[u8]) -> bool {
    if values == [2, 3, 4, 5, 14] {
        return true;
    }
    values.windows(2).all(|w| w[1] == w[0] + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn holds_toggle_and_report_unheld_positions() {
        let mut holds = Holds::default();
        assert_eq!(holds.toggle(1), Some(true));
        assert_eq!(holds.toggle(3), Some(true));
        assert_eq!(holds.toggle(3), Some(false));
        assert_eq!(holds.toggle(5), None);
        assert_eq!(holds.count(), 1);
        assert_eq!(holds.unheld().collect::<Vec<_>>(), vec![0, 2, 3, 4]);
        holds.clear();
        assert_eq!(holds.count(), 0);
    }

    #[test]
    fn replace_returns_displaced_card() {
        let mut hand = Hand::new([
            Card::new(Suit::Spades, Rank::Two),
            Card::new(Suit::Spades, Rank::Three),
            Card::new(Suit::Spades, Rank::Four),
            Card::new(Suit::Spades, Rank::Five),
            Card::new(Suit::Spades, Rank::Six),
        ]);
        let old = hand.replace(2, Card::new(Suit::Hearts, Rank::King));
        assert_eq!(old, Card::new(Suit::Spades, Rank::Four));
        assert_eq!(hand.get(2), Some(Card::new(Suit::Hearts, Rank::King)));
    }

    #[test]
    fn broadway_without_flush_is_plain_straight() {
        let hand = Hand::new([
            Card::new(Suit::Spades, Rank::Ten),
            Card::new(Suit::Hearts, Rank::Jack),
            Card::new(Suit::Spades, Rank::Queen),
            Card::new(Suit::Clubs, Rank::King),
            Card::new(Suit::Spades, Rank::Ace),
        ]);
        assert_eq!(evaluate_hand(&hand), Some(HandKind::Straight));
    }
}
