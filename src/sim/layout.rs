//! Court geometry derived from the host viewport
//!
//! All sizes are relative to the court width so the court scales with the
//! viewport: the width is split into 16 slots, and one slot height (1/45 of
//! the width) is used for wall thickness, ball size and brick height.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::digit::Digit;
use super::entity::{Brick, BrickTier, OutOfBounds, Paddle, Wall};
use super::geom::Body;
use crate::consts::*;

/// Derived sizes for one court
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtLayout {
    pub width: f32,
    pub height: f32,
    pub slot_width: f32,
    pub slot_height: f32,
    pub digit_height: f32,
    /// Gap between bricks (and between score digits)
    pub slot_spacing: f32,
}

impl CourtLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let slot_width = width / SLOT_WIDTH_DIVISOR;
        let slot_height = width / SLOT_HEIGHT_DIVISOR;
        let columns = BRICK_COLUMNS as f32;
        let slot_spacing =
            (width - 2.0 * slot_height - columns * slot_width) / (columns - 1.0);
        Self {
            width,
            height,
            slot_width,
            slot_height,
            digit_height: slot_height * DIGIT_HEIGHT_SLOTS,
            slot_spacing,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn ball_base_velocity(&self) -> f32 {
        self.height / BALL_VELOCITY_DIVISOR
    }

    pub fn ball_velocity_step(&self) -> f32 {
        self.height / BALL_VELOCITY_STEP_DIVISOR
    }

    pub fn paddle_velocity(&self) -> f32 {
        self.height / PADDLE_VELOCITY_DIVISOR
    }

    pub fn left_wall(&self) -> Wall {
        Wall::new(0.0, 0.0, self.slot_height, self.height)
    }

    pub fn right_wall(&self) -> Wall {
        Wall::new(self.width - self.slot_height, 0.0, self.slot_height, self.height)
    }

    pub fn top_wall(&self) -> Wall {
        Wall::new(0.0, 0.0, self.width, self.slot_height)
    }

    pub fn out_of_bounds(&self) -> OutOfBounds {
        OutOfBounds::new(
            0.0,
            self.height + self.slot_height,
            self.width,
            OUT_OF_BOUNDS_HEIGHT,
        )
    }

    /// Ball body, centered in the court
    pub fn ball_body(&self) -> Body {
        let half = self.slot_height / 2.0;
        Body::new(
            self.width / 2.0 - half,
            self.height / 2.0 - half,
            self.slot_height,
            self.slot_height,
        )
    }

    pub fn paddle(&self) -> Paddle {
        Paddle::new(
            self.width / 2.0 - self.slot_width / 2.0,
            self.height - PADDLE_BOTTOM_OFFSET,
            self.slot_width,
            self.slot_height,
            self.paddle_velocity(),
        )
    }

    /// Digit showing the active player number (top left)
    pub fn player_index_digit(&self) -> Digit {
        Digit::new(
            self.slot_height,
            self.slot_height,
            self.slot_width,
            self.digit_height,
        )
    }

    /// Digit showing the active player's ball number (top center)
    pub fn ball_index_digit(&self) -> Digit {
        Digit::new(
            self.width / 2.0,
            self.slot_height,
            self.slot_width,
            self.digit_height,
        )
    }

    fn score_row_y(&self) -> f32 {
        self.slot_height + self.digit_height + self.slot_spacing
    }

    /// Four score digits for a player, thousands first; the thousands digit
    /// starts hidden
    pub fn score_digits(&self, player: usize) -> [Digit; 4] {
        let y = self.score_row_y();
        let start = if player == 0 {
            self.slot_height
        } else {
            self.width / 2.0
        };
        let step = self.slot_width + self.slot_spacing;
        let mut digits: [Digit; 4] = std::array::from_fn(|i| {
            Digit::new(
                start + step * i as f32,
                y,
                self.slot_width,
                self.digit_height,
            )
        });
        digits[0].visible = false;
        digits
    }

    /// One full brick level: 8 rows of 14, top rows worth the most
    pub fn brick_level(&self) -> Vec<Brick> {
        let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLUMNS);
        let mut y = self.score_row_y() + self.digit_height + self.slot_spacing;
        for row in 0..BRICK_ROWS {
            let tier = BrickTier::for_row(row);
            let mut x = self.slot_height;
            for _ in 0..BRICK_COLUMNS {
                bricks.push(Brick::new(
                    x,
                    y,
                    self.slot_width,
                    self.slot_height,
                    tier,
                ));
                x += self.slot_width + self.slot_spacing;
            }
            y += self.slot_height + self.slot_spacing;
        }
        bricks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::collides;

    #[test]
    fn test_bricks_fit_between_walls() {
        let layout = CourtLayout::new(720.0, 900.0);
        let bricks = layout.brick_level();
        assert_eq!(bricks.len(), BRICK_ROWS * BRICK_COLUMNS);

        let left = layout.left_wall();
        let right = layout.right_wall();
        assert_eq!(bricks[0].body.pos.x, left.body.width());
        let last = &bricks[BRICK_COLUMNS - 1];
        let right_edge = last.body.pos.x + last.body.width();
        assert!((right_edge - right.body.pos.x).abs() < 1e-3);
        assert!(!collides(&bricks[1].body, &left.body));
    }

    #[test]
    fn test_brick_rows_tiered_top_down() {
        let layout = CourtLayout::new(720.0, 900.0);
        let bricks = layout.brick_level();
        assert_eq!(bricks[0].tier, BrickTier::Red);
        assert_eq!(bricks[2 * BRICK_COLUMNS].tier, BrickTier::Orange);
        assert_eq!(bricks[4 * BRICK_COLUMNS].tier, BrickTier::Green);
        assert_eq!(bricks.last().map(|b| b.tier), Some(BrickTier::Yellow));
        assert!(bricks[0].body.pos.y < bricks[BRICK_COLUMNS].body.pos.y);
    }

    #[test]
    fn test_bricks_below_scoreboard_and_above_paddle() {
        let layout = CourtLayout::new(720.0, 900.0);
        let bricks = layout.brick_level();
        let digits = layout.score_digits(0);
        let digit_bottom = digits[0].rect.y + digits[0].rect.height;
        let paddle = layout.paddle();
        for brick in &bricks {
            assert!(brick.body.pos.y > digit_bottom);
            assert!(brick.body.pos.y + brick.body.height() < paddle.body.pos.y);
        }
    }

    #[test]
    fn test_score_digits_thousands_hidden() {
        let layout = CourtLayout::new(720.0, 900.0);
        let p1 = layout.score_digits(0);
        let p2 = layout.score_digits(1);
        assert!(!p1[0].visible && p1[1].visible);
        assert!(!p2[0].visible);
        assert_eq!(p2[0].rect.x, 360.0);
        assert!(p1[3].rect.x < p2[0].rect.x);
    }

    #[test]
    fn test_ball_and_paddle_centered() {
        let layout = CourtLayout::new(720.0, 900.0);
        assert_eq!(layout.ball_body().center(), layout.center());
        assert_eq!(layout.paddle().body.center().x, 360.0);
        assert!(layout.out_of_bounds().body.pos.y > layout.height);
    }
}
