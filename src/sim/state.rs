//! Match state for one court session
//!
//! The `Court` owns every entity for the whole match plus the per-player
//! bookkeeping: level, ball index, score and an independent brick grid per
//! level. Entities are never removed; lost balls are reset and destroyed
//! bricks are only hidden and disabled.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, random_serve_direction};
use super::digit::{Digit, score_digit_values};
use super::entity::{Brick, BrickTier, OutOfBounds, Paddle, Wall};
use super::layout::CourtLayout;
use crate::consts::*;

/// Final (or current) standings, for logs and the native runner output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub players: u8,
    pub active_player: usize,
    pub scores: [u32; 2],
    pub levels: [usize; 2],
    pub levels_available: [usize; 2],
    pub ball_indices: [u32; 2],
    pub game_over: bool,
}

/// Complete state of a match in progress
#[derive(Debug, Clone)]
pub struct Court {
    pub layout: CourtLayout,
    /// 1 or 2
    pub players: u8,
    pub seed: u64,
    pub top_wall: Wall,
    pub left_wall: Wall,
    pub right_wall: Wall,
    pub out_of_bounds: OutOfBounds,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Shows `active_player + 1`
    pub player_index_digit: Digit,
    /// Shows the active player's ball index
    pub ball_index_digit: Digit,
    /// Per player, thousands first
    pub score_digits: [[Digit; 4]; 2],
    /// 0 or 1
    pub active_player: usize,
    /// Current level per player (0-based)
    pub player_level: [usize; 2],
    /// Ball in play per player (1-based); above `BALLS_PER_PLAYER` means out
    pub player_ball_index: [u32; 2],
    pub player_scores: [u32; 2],
    /// Brick grid per player per level
    pub player_bricks: [Vec<Vec<Brick>>; 2],
    rng: Pcg32,
}

impl Court {
    /// Build every entity for a fresh match
    pub fn new(layout: CourtLayout, players: u8, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let direction = random_serve_direction(&mut rng);
        let ball = Ball::new(
            layout.ball_body(),
            layout.ball_base_velocity(),
            layout.ball_velocity_step(),
            direction,
        );

        let mut player_index_digit = layout.player_index_digit();
        player_index_digit.value = 1;
        let mut ball_index_digit = layout.ball_index_digit();
        ball_index_digit.value = 1;

        let levels = || -> Vec<Vec<Brick>> {
            (0..LEVELS_PER_PLAYER).map(|_| layout.brick_level()).collect()
        };

        log::info!(
            "Court built: {}x{}, {} player(s), seed {}",
            layout.width,
            layout.height,
            players,
            seed
        );

        Self {
            layout,
            players,
            seed,
            top_wall: layout.top_wall(),
            left_wall: layout.left_wall(),
            right_wall: layout.right_wall(),
            out_of_bounds: layout.out_of_bounds(),
            paddle: layout.paddle(),
            ball,
            player_index_digit,
            ball_index_digit,
            score_digits: [layout.score_digits(0), layout.score_digits(1)],
            active_player: 0,
            player_level: [0, 0],
            player_ball_index: [1, 1],
            player_scores: [0, 0],
            player_bricks: [levels(), levels()],
            rng,
        }
    }

    pub fn is_out_of_lives(&self, player: usize) -> bool {
        self.player_ball_index[player] > BALLS_PER_PLAYER
    }

    pub fn is_game_over(&self) -> bool {
        self.ball.end_game_mode
    }

    /// Bricks of the active player's current level
    pub fn active_bricks(&self) -> &[Brick] {
        &self.player_bricks[self.active_player][self.player_level[self.active_player]]
    }

    pub fn active_bricks_mut(&mut self) -> &mut [Brick] {
        let player = self.active_player;
        let level = self.player_level[player];
        &mut self.player_bricks[player][level]
    }

    // === Input intents ===

    /// Left key pressed or released
    pub fn move_left(&mut self, pressed: bool) {
        self.steer(-1.0, pressed);
    }

    /// Right key pressed or released
    pub fn move_right(&mut self, pressed: bool) {
        self.steer(1.0, pressed);
    }

    fn steer(&mut self, dir: f32, pressed: bool) {
        if pressed {
            self.paddle.direction = Vec2::new(dir, 0.0);
        } else if self.paddle.direction.x == dir {
            self.paddle.direction = Vec2::ZERO;
        }
    }

    /// Serve the ball if it is waiting
    pub fn launch_ball(&mut self) -> bool {
        let served = self.ball.serve();
        if served {
            log::debug!(
                "Player {} serves ball {}",
                self.active_player + 1,
                self.player_ball_index[self.active_player]
            );
        }
        served
    }

    // === Match events ===

    pub fn reset_ball_and_paddle(&mut self) {
        let direction = random_serve_direction(&mut self.rng);
        self.ball.reset(self.layout.center(), direction);
        self.paddle.reset(self.layout.width);
    }

    fn increment_ball_index(&mut self) {
        let player = self.active_player;
        self.player_ball_index[player] += 1;
        self.ball_index_digit.value = self.player_ball_index[player] as u8;
    }

    /// The ball left the court: spend a life and decide who plays next
    pub fn on_ball_lost(&mut self) {
        let scored_this_life = self.ball.bricks_scored;
        self.increment_ball_index();
        self.reset_ball_and_paddle();
        log::debug!(
            "Player {} lost a ball (next ball index {})",
            self.active_player + 1,
            self.player_ball_index[self.active_player]
        );

        if self.players == 1 {
            if self.is_out_of_lives(self.active_player) {
                self.end_game();
            }
            return;
        }

        // Bonus level: player one drops the last ball on their second level
        // without scoring, so player two inherits that level as a third one.
        if self.active_player == 0
            && self.is_out_of_lives(0)
            && self.player_level[0] == 1
            && scored_this_life == 0
            && self.player_bricks[1].len() == LEVELS_PER_PLAYER
        {
            let bonus = self.player_bricks[0][1].clone();
            self.player_bricks[1].push(bonus);
            log::info!("Bonus level unlocked for player 2");
        }

        if self.is_out_of_lives(0) && self.is_out_of_lives(1) {
            self.end_game();
        } else {
            self.switch_player();
        }
    }

    /// Credit a destroyed brick to the active player
    pub fn on_brick_destroyed(&mut self, tier: BrickTier) {
        let player = self.active_player;
        self.player_scores[player] += tier.points();
        log::debug!(
            "Player {} hit a {:?} brick, score {}",
            player + 1,
            tier,
            self.player_scores[player]
        );
        self.blink_score_digits(player);
        self.refresh_score_digits(player);
    }

    /// The active player destroyed the last brick of their level
    pub fn on_level_cleared(&mut self) {
        let player = self.active_player;
        self.reset_ball_and_paddle();
        if self.player_level[player] + 1 >= self.player_bricks[player].len() {
            log::info!("Player {} cleared every level", player + 1);
            self.player_ball_index[player] = BALLS_PER_PLAYER + 1;
        } else {
            self.player_level[player] += 1;
            log::info!(
                "Player {} advances to level {}",
                player + 1,
                self.player_level[player] + 1
            );
        }

        if self.players == 1 {
            if self.is_out_of_lives(player) {
                self.end_game();
            }
        } else if self.is_out_of_lives(0) && self.is_out_of_lives(1) {
            self.end_game();
        } else if self.is_out_of_lives(player) {
            self.switch_player();
        }
    }

    /// Hand the court to the other player, unless they have no balls left
    pub fn switch_player(&mut self) {
        let other = 1 - self.active_player;
        if self.is_out_of_lives(other) {
            return;
        }
        self.active_player = other;
        self.player_index_digit.value = (other + 1) as u8;
        self.player_index_digit.set_blink(true);
        self.ball_index_digit.value = self.player_ball_index[other] as u8;
        log::info!("Player {} is up", other + 1);
    }

    /// Enter the terminal attract state: full-width paddle, bricks only deflect
    pub fn end_game(&mut self) {
        self.paddle.stretch(&self.left_wall, &self.right_wall);
        self.ball.velocity = self.ball.base_velocity;
        self.ball.body.visible = true;
        self.ball.end_game_mode = true;
        log::info!("Game over, scores {:?}", self.player_scores);
    }

    // === Scoreboard ===

    /// Write the player's score into their digits
    pub fn refresh_score_digits(&mut self, player: usize) {
        let score = self.player_scores[player];
        let digits = &mut self.score_digits[player];
        if score >= 1000 {
            digits[0].visible = true;
        }
        for (digit, value) in digits.iter_mut().zip(score_digit_values(score)) {
            digit.value = value;
        }
    }

    /// Blink the shown score digits; the thousands digit only once in use
    pub fn blink_score_digits(&mut self, player: usize) {
        let show_thousands = self.player_scores[player] > 999;
        for (i, digit) in self.score_digits[player].iter_mut().enumerate() {
            if i > 0 || show_thousands {
                digit.set_blink(true);
            }
        }
    }

    /// Advance every digit's blink timer
    pub fn update_digits(&mut self) {
        for digit in self.score_digits.iter_mut().flatten() {
            digit.update();
        }
        self.player_index_digit.update();
        self.ball_index_digit.update();
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            players: self.players,
            active_player: self.active_player,
            scores: self.player_scores,
            levels: self.player_level,
            levels_available: [self.player_bricks[0].len(), self.player_bricks[1].len()],
            ball_indices: self.player_ball_index,
            game_over: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn court(players: u8) -> Court {
        Court::new(CourtLayout::new(720.0, 900.0), players, 42)
    }

    #[test]
    fn test_new_court() {
        let court = court(2);
        assert_eq!(court.active_player, 0);
        assert_eq!(court.player_ball_index, [1, 1]);
        assert_eq!(court.player_bricks[0].len(), LEVELS_PER_PLAYER);
        assert_eq!(court.player_bricks[1][1].len(), BRICK_ROWS * BRICK_COLUMNS);
        assert!(court.ball.is_waiting());
        assert!(!court.out_of_bounds.body.visible);
        assert_eq!(court.player_index_digit.value, 1);
        assert_eq!(court.ball_index_digit.value, 1);
        assert!(!court.is_game_over());
    }

    #[test]
    fn test_steer_release_only_clears_same_direction() {
        let mut court = court(1);
        court.move_left(true);
        assert_eq!(court.paddle.direction.x, -1.0);
        court.move_right(true);
        court.move_left(false);
        assert_eq!(court.paddle.direction.x, 1.0);
        court.move_right(false);
        assert_eq!(court.paddle.direction, Vec2::ZERO);
    }

    #[test]
    fn test_launch_only_once() {
        let mut court = court(1);
        assert!(court.launch_ball());
        assert!(!court.launch_ball());
        assert_eq!(court.ball.velocity, court.layout.ball_base_velocity());
    }

    #[test]
    fn test_score_refresh_reveals_thousands() {
        let mut court = court(1);
        court.player_scores[0] = 987;
        court.refresh_score_digits(0);
        let values: Vec<u8> = court.score_digits[0].iter().map(|d| d.value).collect();
        assert_eq!(values, vec![0, 9, 8, 7]);
        assert!(!court.score_digits[0][0].visible);

        court.player_scores[0] = 1344;
        court.refresh_score_digits(0);
        let values: Vec<u8> = court.score_digits[0].iter().map(|d| d.value).collect();
        assert_eq!(values, vec![1, 3, 4, 4]);
        assert!(court.score_digits[0][0].visible);
    }

    #[test]
    fn test_blink_skips_hidden_thousands() {
        let mut court = court(1);
        court.on_brick_destroyed(BrickTier::Green);
        assert_eq!(court.player_scores[0], 3);
        assert!(!court.score_digits[0][0].is_blinking());
        assert!(court.score_digits[0][1..].iter().all(Digit::is_blinking));
        assert!(court.score_digits[1].iter().all(|d| !d.is_blinking()));
    }

    #[test]
    fn test_switch_player_refuses_when_other_is_out() {
        let mut court = court(2);
        court.player_ball_index[1] = BALLS_PER_PLAYER + 1;
        court.switch_player();
        assert_eq!(court.active_player, 0);

        court.player_ball_index[1] = 2;
        court.switch_player();
        assert_eq!(court.active_player, 1);
        assert_eq!(court.player_index_digit.value, 2);
        assert!(court.player_index_digit.is_blinking());
        assert_eq!(court.ball_index_digit.value, 2);
    }

    #[test]
    fn test_level_clear_advances_then_finishes() {
        let mut court = court(1);
        court.launch_ball();
        court.on_level_cleared();
        assert_eq!(court.player_level[0], 1);
        assert!(court.ball.is_waiting());
        assert!(!court.is_game_over());

        court.on_level_cleared();
        assert_eq!(court.player_ball_index[0], BALLS_PER_PLAYER + 1);
        assert!(court.is_game_over());
    }

    #[test]
    fn test_two_player_level_clear_keeps_turn() {
        let mut court = court(2);
        court.on_level_cleared();
        assert_eq!(court.active_player, 0);
        assert_eq!(court.player_level, [1, 0]);

        // Clearing the final level ends this player's game and hands over
        court.on_level_cleared();
        assert!(court.is_out_of_lives(0));
        assert_eq!(court.active_player, 1);
        assert!(!court.is_game_over());
    }

    #[test]
    fn test_bonus_level_for_player_two() {
        let mut court = court(2);
        court.player_level[0] = 1;
        court.player_ball_index[0] = BALLS_PER_PLAYER;
        court.launch_ball();
        court.on_ball_lost();
        assert_eq!(court.player_bricks[1].len(), LEVELS_PER_PLAYER + 1);
        assert_eq!(court.active_player, 1);
        assert_eq!(court.summary().levels_available, [2, 3]);
    }

    #[test]
    fn test_no_bonus_level_after_scoring() {
        let mut court = court(2);
        court.player_level[0] = 1;
        court.player_ball_index[0] = BALLS_PER_PLAYER;
        court.launch_ball();
        court.ball.bricks_scored = 1;
        court.on_ball_lost();
        assert_eq!(court.player_bricks[1].len(), LEVELS_PER_PLAYER);
    }

    #[test]
    fn test_no_bonus_level_in_single_player() {
        let mut court = court(1);
        court.player_level[0] = 1;
        court.player_ball_index[0] = BALLS_PER_PLAYER;
        court.on_ball_lost();
        assert_eq!(court.player_bricks[1].len(), LEVELS_PER_PLAYER);
        assert!(court.is_game_over());
    }

    #[test]
    fn test_end_game_stretches_paddle_and_serves() {
        let mut court = court(1);
        court.paddle.shrink();
        court.end_game();
        let inner = court.right_wall.body.pos.x - court.left_wall.body.width();
        assert_eq!(court.paddle.body.width(), inner);
        assert_eq!(court.paddle.body.pos.x, court.left_wall.body.width());
        assert!(court.ball.body.visible);
        assert_eq!(court.ball.velocity, court.ball.base_velocity);
        assert!(court.summary().game_over);
    }
}
