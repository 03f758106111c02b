use crate::HandKind;

impl HandKind {
    /// Payout multiplier applied to the round's bet.
    pub fn multiplier(self) -> u64 {
        match self {
            HandKind::RoyalFlush => 250,
            HandKind::StraightFlush => 50,
            HandKind::FourOfAKind => 25,
            HandKind::FullHouse => 9,
            HandKind::Flush => 6,
            HandKind::Straight => 4,
            HandKind::ThreeOfAKind => 3,
            HandKind::TwoPair => 2,
            HandKind::JacksOrBetter => 1,
        }
    }
}

/// Saturates rather than wrapping; validated configs never get near it.
pub fn win_amount(hand: Option<HandKind>, bet: u64) -> u64 {
    hand.map(|kind| kind.multiplier().saturating_mul(bet)).unwrap_or(0)
}

/// Paytable rows as shown to the player, amounts already scaled by `bet`.
pub fn paytable_rows(bet: u64) -> impl Iterator<Item = (HandKind, u64)> {
    HandKind::ALL
        .into_iter()
        .map(move |kind| (kind, win_amount(Some(kind), bet)))
}
