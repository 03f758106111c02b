//! Table geometry in viewport units. Renderers scale these rects onto their
//! surface; the state machine hit-tests clicks against the same regions.

use crate::HAND_SIZE;
use serde::{Deserialize, Serialize};

pub const VIEWPORT_WIDTH: f64 = 1200.0;
pub const VIEWPORT_HEIGHT: f64 = 800.0;
pub const CARD_WIDTH: f64 = 100.0;
pub const CARD_HEIGHT: f64 = 140.0;
pub const CARD_SPACING: f64 = 20.0;
pub const BUTTON_WIDTH: f64 = 120.0;
pub const BUTTON_HEIGHT: f64 = 40.0;
/// Upward offset of a held card.
pub const HELD_LIFT: f64 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, to: Point, t: f64) -> Point {
        Point {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Edges are inclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    BetButton,
    PrimaryButton,
    Card(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Layout {
    pub fn card_slot(&self, position: usize) -> Rect {
        let row_width = HAND_SIZE as f64 * CARD_WIDTH + (HAND_SIZE - 1) as f64 * CARD_SPACING;
        let start_x = (self.width - row_width) / 2.0;
        Rect::new(
            start_x + position as f64 * (CARD_WIDTH + CARD_SPACING),
            self.height / 2.0 - CARD_HEIGHT / 2.0,
            CARD_WIDTH,
            CARD_HEIGHT,
        )
    }

    /// Where the deck stack sits, just below the middle card.
    pub fn deck_origin(&self) -> Point {
        Point::new(
            self.width / 2.0 - CARD_WIDTH / 2.0,
            self.height / 2.0 + CARD_HEIGHT / 2.0 + 30.0,
        )
    }

    pub fn bet_button(&self) -> Rect {
        Rect::new(
            self.width / 2.0 - 200.0,
            self.height - 50.0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    pub fn primary_button(&self) -> Rect {
        Rect::new(
            self.width / 2.0 + 80.0,
            self.height - 50.0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    /// Buttons win over cards; card regions are the un-lifted slots.
    pub fn hit_test(&self, point: Point) -> Option<Region> {
        if self.bet_button().contains(point) {
            return Some(Region::BetButton);
        }
        if self.primary_button().contains(point) {
            return Some(Region::PrimaryButton);
        }
        (0..HAND_SIZE)
            .find(|&position| self.card_slot(position).contains(point))
            .map(Region::Card)
    }
}
