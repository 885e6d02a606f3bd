//! Draw passes over an injected render sink
//!
//! The simulation never owns a drawing surface. A host hands in a
//! `RenderSink` and the passes here issue one filled rectangle per visible
//! entity (or per lit digit segment) in a fixed z-order.

use serde::{Deserialize, Serialize};

use crate::sim::{BrickTier, Court, Digit, Rect};

/// Fill colors used by the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Cyan,
    Yellow,
    Green,
    Orange,
    Red,
}

impl Color {
    /// CSS color name for canvas hosts
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Orange => "orange",
            Color::Red => "red",
        }
    }

    pub fn for_tier(tier: BrickTier) -> Self {
        match tier {
            BrickTier::Yellow => Color::Yellow,
            BrickTier::Green => Color::Green,
            BrickTier::Orange => Color::Orange,
            BrickTier::Red => Color::Red,
        }
    }
}

/// Drawing primitives a host must provide
pub trait RenderSink {
    /// Wipe the whole surface
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Centered text at (x, y) with the given point size
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32);
}

fn draw_digit(sink: &mut dyn RenderSink, digit: &Digit) {
    for stroke in digit.strokes() {
        sink.fill_rect(stroke, Color::White);
    }
}

/// Draw the court: top wall, ball, paddle, status digits, active bricks,
/// score digits, side walls
pub fn draw_court(court: &Court, sink: &mut dyn RenderSink) {
    if court.top_wall.body.visible {
        sink.fill_rect(court.top_wall.body.rect(), Color::White);
    }
    if court.ball.body.visible {
        sink.fill_rect(court.ball.body.rect(), Color::White);
    }
    if court.paddle.body.visible {
        sink.fill_rect(court.paddle.body.rect(), Color::Cyan);
    }
    draw_digit(sink, &court.player_index_digit);
    draw_digit(sink, &court.ball_index_digit);

    for brick in court.active_bricks().iter().filter(|b| b.body.visible) {
        sink.fill_rect(brick.body.rect(), Color::for_tier(brick.tier));
    }

    for digit in court.score_digits.iter().flatten() {
        draw_digit(sink, digit);
    }

    for wall in [&court.left_wall, &court.right_wall] {
        if wall.body.visible {
            sink.fill_rect(wall.body.rect(), Color::White);
        }
    }
}

/// Draw the welcome screen: title and controls
pub fn draw_welcome(width: f32, height: f32, sink: &mut dyn RenderSink) {
    let (cx, cy) = (width / 2.0, height / 2.0);
    sink.fill_text("BREAKOUT", cx, cy - 200.0, 32.0);
    let lines = [
        ("Controls:", -100.0),
        ("[spacebar] launch a ball", -50.0),
        ("[left-arrow] move left", 0.0),
        ("[right-arrow] move right", 50.0),
        ("Press [1] to start a 1 player game", 150.0),
        ("Press [2] to start a 2 player game", 200.0),
    ];
    for (text, dy) in lines {
        sink.fill_text(text, cx, cy + dy, 24.0);
    }
}

/// A sink that records draw calls (headless runs and tests)
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub rects: Vec<(Rect, Color)>,
    pub texts: Vec<String>,
    pub clears: usize,
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.rects.clear();
        self.texts.clear();
        self.clears += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rects.push((rect, color));
    }

    fn fill_text(&mut self, text: &str, _x: f32, _y: f32, _size: f32) {
        self.texts.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BRICK_COLUMNS, BRICK_ROWS};
    use crate::sim::CourtLayout;

    fn court() -> Court {
        Court::new(CourtLayout::new(720.0, 900.0), 2, 5)
    }

    #[test]
    fn test_court_z_order() {
        let court = court();
        let mut sink = RecordingSink::default();
        draw_court(&court, &mut sink);

        // Top wall first, side walls last
        assert_eq!(sink.rects[0].0, court.top_wall.body.rect());
        let n = sink.rects.len();
        assert_eq!(sink.rects[n - 2].0, court.left_wall.body.rect());
        assert_eq!(sink.rects[n - 1].0, court.right_wall.body.rect());

        // Waiting ball is hidden, so the paddle comes right after the top wall
        assert_eq!(sink.rects[1], (court.paddle.body.rect(), Color::Cyan));

        let bricks = sink
            .rects
            .iter()
            .filter(|(_, c)| *c != Color::White && *c != Color::Cyan)
            .count();
        assert_eq!(bricks, BRICK_ROWS * BRICK_COLUMNS);
    }

    #[test]
    fn test_destroyed_bricks_not_drawn() {
        let mut court = court();
        court.active_bricks_mut()[0].body.disable();
        let mut sink = RecordingSink::default();
        draw_court(&court, &mut sink);
        let reds = sink.rects.iter().filter(|(_, c)| *c == Color::Red).count();
        assert_eq!(reds, 2 * BRICK_COLUMNS - 1);
    }

    #[test]
    fn test_score_digits_draw_segments() {
        let court = court();
        let mut sink = RecordingSink::default();
        draw_court(&court, &mut sink);
        // Status digits show "1" twice (2 strokes each); six visible score
        // digits show "0" (6 strokes each); thousands digits are hidden
        let white = sink.rects.iter().filter(|(_, c)| *c == Color::White).count();
        assert_eq!(white, 3 + 2 * 2 + 6 * 6);
    }

    #[test]
    fn test_welcome_text() {
        let mut sink = RecordingSink::default();
        draw_welcome(720.0, 900.0, &mut sink);
        assert_eq!(sink.texts.len(), 7);
        assert!(sink.texts.iter().any(|t| t.contains("2 player")));
    }
}
