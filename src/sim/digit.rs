//! Seven-segment digits for the scoreboard and status display
//!
//! A digit is drawn from up to seven filled strokes: three horizontal bars
//! (top, middle, bottom) and four vertical half-height bars. Digits can be
//! asked to blink, which toggles visibility on a tick-based timer for a fixed
//! number of cycles and then leaves the digit visible.

use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::{BLINK_COUNT, BLINK_INTERVAL};

/// Segment identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Top,
    Middle,
    Bottom,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

use Segment::*;

/// Segments lit for each decimal value
pub fn segments_for(value: u8) -> &'static [Segment] {
    match value {
        0 => &[Top, Bottom, LeftTop, LeftBottom, RightTop, RightBottom],
        1 => &[RightTop, RightBottom],
        2 => &[Top, Middle, Bottom, LeftBottom, RightTop],
        3 => &[Top, Middle, Bottom, RightTop, RightBottom],
        4 => &[Middle, LeftTop, RightTop, RightBottom],
        5 => &[Top, Middle, Bottom, LeftTop, RightBottom],
        6 => &[Top, Middle, Bottom, LeftTop, LeftBottom, RightBottom],
        7 => &[Top, RightTop, RightBottom],
        8 => &[Top, Middle, Bottom, LeftTop, LeftBottom, RightTop, RightBottom],
        9 => &[Top, Middle, Bottom, LeftTop, RightTop, RightBottom],
        _ => &[],
    }
}

/// Split a score into thousands, hundreds, tens and ones
pub fn score_digit_values(score: u32) -> [u8; 4] {
    [
        (score / 1000 % 10) as u8,
        (score / 100 % 10) as u8,
        (score / 10 % 10) as u8,
        (score % 10) as u8,
    ]
}

/// A single seven-segment digit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Digit {
    pub rect: Rect,
    pub value: u8,
    pub visible: bool,
    /// Blink cycles remaining
    pub blinks_left: u32,
    /// Ticks until the next visibility toggle
    pub blink_timer: i32,
}

impl Digit {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            value: 0,
            visible: true,
            blinks_left: 0,
            blink_timer: 0,
        }
    }

    pub fn is_blinking(&self) -> bool {
        self.blinks_left > 0
    }

    /// Arm a fresh blink sequence, or cancel blinking and show the digit
    pub fn set_blink(&mut self, active: bool) {
        self.blink_timer = 0;
        if active {
            self.blinks_left = BLINK_COUNT;
        } else {
            self.blinks_left = 0;
            self.visible = true;
        }
    }

    /// Advance the blink timer by one tick
    pub fn update(&mut self) {
        if self.blinks_left == 0 {
            return;
        }
        self.blink_timer -= 1;
        if self.blink_timer > 0 {
            return;
        }
        if self.visible {
            self.visible = false;
            self.blink_timer = BLINK_INTERVAL;
        } else {
            self.visible = true;
            self.blinks_left -= 1;
            if self.blinks_left > 0 {
                self.blink_timer = BLINK_INTERVAL;
            }
        }
    }

    /// Stroke rectangle for one segment
    pub fn segment_rect(&self, segment: Segment) -> Rect {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.rect;
        let thickness = height / 5.0;
        let half = (height / 2.0).ceil() - 1.0;
        match segment {
            Top => Rect::new(x, y, width, thickness),
            Middle => Rect::new(x - 1.0, y + half - thickness / 2.0, width + 2.0, thickness),
            Bottom => Rect::new(x, y + height - thickness, width, thickness),
            LeftTop => Rect::new(x - 1.0, y, thickness, half + 1.0),
            LeftBottom => Rect::new(x - 1.0, y + half, thickness, half + 1.0),
            RightTop => Rect::new(x + width - thickness, y, thickness + 1.0, half + 1.0),
            RightBottom => Rect::new(x + width - thickness, y + half, thickness + 1.0, half + 1.0),
        }
    }

    /// Strokes to fill for the current value; empty while hidden
    pub fn strokes(&self) -> Vec<Rect> {
        if !self.visible {
            return Vec::new();
        }
        segments_for(self.value)
            .iter()
            .map(|&s| self.segment_rect(s))
            .collect()
    }
}
