//! Deal/draw card flight. Each entry moves from the deck to its hand slot
//! during the first 40% of its progress, then flips face-up in place.

use crate::{Card, Point};

/// Progress at which movement ends and the flip begins.
pub const MOVE_PHASE_END: f64 = 0.4;
pub const BASE_DURATION_MS: f64 = 600.0;
/// Extra duration per position in the batch, so cards land in a cascade.
pub const STAGGER_MS: f64 = 80.0;

pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationEntry {
    pub card: Card,
    pub slot: usize,
    pub from: Point,
    pub to: Point,
    pub elapsed_ms: f64,
    pub duration_ms: f64,
}

impl AnimationEntry {
    pub fn new(card: Card, slot: usize, from: Point, to: Point, duration_ms: f64) -> Self {
        Self {
            card,
            slot,
            from,
            to,
            elapsed_ms: 0.0,
            duration_ms,
        }
    }

    pub fn advance(&mut self, delta_ms: f64) {
        if self.is_complete() {
            return;
        }
        self.elapsed_ms = (self.elapsed_ms + delta_ms.max(0.0)).min(self.duration_ms);
    }

    /// Fraction of the duration elapsed, clamped to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn position(&self) -> Point {
        let progress = self.progress();
        if progress < MOVE_PHASE_END {
            let eased = ease_out_cubic(progress / MOVE_PHASE_END);
            self.from.lerp(self.to, eased)
        } else {
            self.to
        }
    }

    pub fn flip_progress(&self) -> f64 {
        let progress = self.progress();
        if progress < MOVE_PHASE_END {
            0.0
        } else {
            (progress - MOVE_PHASE_END) / (1.0 - MOVE_PHASE_END)
        }
    }

    pub fn is_face_up(&self) -> bool {
        self.flip_progress() >= 0.5
    }

    /// Horizontal squash for the flip: 1 at both ends, 0 mid-turn.
    pub fn horizontal_scale(&self) -> f64 {
        (self.flip_progress() * std::f64::consts::PI).cos().abs()
    }
}

/// Cards in flight for one deal or draw. Exists only while the state
/// machine is animating and is dropped once every entry lands.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationBatch {
    entries: Vec<AnimationEntry>,
}

impl AnimationBatch {
    /// One entry per `(slot, card, destination)`, each lasting a little longer
    /// than the one before it.
    pub fn new(source: Point, targets: impl IntoIterator<Item = (usize, Card, Point)>) -> Self {
        let entries = targets
            .into_iter()
            .enumerate()
            .map(|(index, (slot, card, to))| {
                let duration = BASE_DURATION_MS + index as f64 * STAGGER_MS;
                AnimationEntry::new(card, slot, source, to, duration)
            })
            .collect();
        Self { entries }
    }

    /// Steps every entry by `delta_ms`; returns whether any is still moving.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        for entry in &mut self.entries {
            entry.advance(delta_ms);
        }
        !self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(AnimationEntry::is_complete)
    }

    pub fn entries(&self) -> &[AnimationEntry] {
        &self.entries
    }

    pub fn is_animating(&self, slot: usize) -> bool {
        self.entries.iter().any(|entry| entry.slot == slot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
