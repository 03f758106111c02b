use crate::{AnimationBatch, Hand, HandKind, Holds};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outcome {
    pub hand: Option<HandKind>,
    pub win: u64,
}

/// Where a round stands. Each variant carries only what is meaningful in
/// that state: no hand before the deal, holds only while selecting, an
/// animation batch only while cards are in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Initial,
    Dealing {
        hand: Hand,
        batch: AnimationBatch,
    },
    Select {
        hand: Hand,
        holds: Holds,
    },
    Rolling {
        hand: Hand,
        batch: AnimationBatch,
    },
    Result {
        hand: Hand,
        outcome: Outcome,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    Initial,
    Animating,
    Select,
    AnimatingRoll,
    Result,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PhaseKind::Initial => "INITIAL",
            PhaseKind::Animating => "ANIMATING",
            PhaseKind::Select => "SELECT",
            PhaseKind::AnimatingRoll => "ANIMATING_ROLL",
            PhaseKind::Result => "RESULT",
        };
        f.write_str(label)
    }
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Initial => PhaseKind::Initial,
            Phase::Dealing { .. } => PhaseKind::Animating,
            Phase::Select { .. } => PhaseKind::Select,
            Phase::Rolling { .. } => PhaseKind::AnimatingRoll,
            Phase::Result { .. } => PhaseKind::Result,
        }
    }

    pub fn hand(&self) -> Option<&Hand> {
        match self {
            Phase::Initial => None,
            Phase::Dealing { hand, .. }
            | Phase::Select { hand, .. }
            | Phase::Rolling { hand, .. }
            | Phase::Result { hand, .. } => Some(hand),
        }
    }

    pub fn holds(&self) -> Option<&Holds> {
        match self {
            Phase::Select { holds, .. } => Some(holds),
            _ => None,
        }
    }

    pub fn animation(&self) -> Option<&AnimationBatch> {
        match self {
            Phase::Dealing { batch, .. } | Phase::Rolling { batch, .. } => Some(batch),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Phase::Result { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation().is_some()
    }

    /// Caption of the primary button; none while cards are in flight.
    pub fn primary_label(&self) -> Option<&'static str> {
        match self.kind() {
            PhaseKind::Initial => Some("Play"),
            PhaseKind::Select => Some("Roll"),
            PhaseKind::Result => Some("Next"),
            PhaseKind::Animating | PhaseKind::AnimatingRoll => None,
        }
    }
}
