//! The ball and its per-tick collision state machine
//!
//! Each tick the ball tests, in order: top wall, left wall, right wall,
//! paddle, out-of-bounds detector and finally the active brick level. Walls
//! and the paddle return the ball to `BallState::Normal`; a brick hit moves it
//! to `BallState::BrickHit`, which blocks further brick hits until the ball
//! bounces off something else. Match-level consequences (scores, lives,
//! levels) are reported back as a `BallEvent` for the court to apply.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Collideable;
use super::entity::{Brick, BrickTier, OutOfBounds, Paddle, Wall, destroyed_bricks};
use super::geom::{Body, normalize_direction};
use crate::consts::VELOCITY_BUMP_HITS;
use crate::error::CourtError;

/// Ball collision state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Free to hit a brick
    Normal,
    /// Just hit a brick; needs a wall or paddle bounce before the next one
    BrickHit,
}

/// What happened to the ball this tick that the court has to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    None,
    /// Ball entered the out-of-bounds area
    OutOfBounds,
    /// A brick was destroyed and scored
    BrickDestroyed { tier: BrickTier, level_cleared: bool },
}

/// Everything the ball collides with during one tick
pub struct BallContext<'a> {
    pub top_wall: &'a Wall,
    pub left_wall: &'a Wall,
    pub right_wall: &'a Wall,
    pub paddle: &'a mut Paddle,
    pub out_of_bounds: &'a OutOfBounds,
    pub bricks: &'a mut [Brick],
}

/// Pick one of the three serve directions: down, down-right or down-left
pub fn random_serve_direction<R: Rng>(rng: &mut R) -> Vec2 {
    match rng.random_range(0..3) {
        0 => Vec2::new(0.0, 1.0),
        1 => Vec2::new(0.5, 0.5).normalize(),
        _ => Vec2::new(-0.5, 0.5).normalize(),
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    /// Unit direction of travel
    pub direction: Vec2,
    /// Speed in px/ms, zero while waiting for a serve
    pub velocity: f32,
    pub state: BallState,
    /// Bricks only deflect the ball once the match is over
    pub end_game_mode: bool,
    /// Wall, paddle and brick hits during this life
    pub hit_counter: u32,
    pub red_bricks_hit: bool,
    pub orange_bricks_hit: bool,
    /// Bricks scored during this life
    pub bricks_scored: u32,
    /// Serve velocity
    pub base_velocity: f32,
    /// Amount added by each velocity bump
    pub velocity_step: f32,
}

impl Ball {
    pub fn new(body: Body, base_velocity: f32, velocity_step: f32, direction: Vec2) -> Self {
        let mut body = body;
        body.visible = false;
        Self {
            body,
            direction,
            velocity: 0.0,
            state: BallState::Normal,
            end_game_mode: false,
            hit_counter: 0,
            red_bricks_hit: false,
            orange_bricks_hit: false,
            bricks_scored: 0,
            base_velocity,
            velocity_step,
        }
    }

    /// Whether the ball is waiting to be served
    pub fn is_waiting(&self) -> bool {
        self.velocity == 0.0 && !self.body.visible
    }

    /// Launch a waiting ball. Returns false if it is already in play.
    pub fn serve(&mut self) -> bool {
        if !self.is_waiting() {
            return false;
        }
        self.velocity = self.base_velocity;
        self.body.visible = true;
        true
    }

    /// Put the ball back at the court center, hidden and waiting for a serve
    pub fn reset(&mut self, court_center: Vec2, direction: Vec2) {
        self.body.set_center(court_center);
        self.velocity = 0.0;
        self.body.visible = false;
        self.direction = direction;
        self.state = BallState::Normal;
        self.hit_counter = 0;
        self.red_bricks_hit = false;
        self.orange_bricks_hit = false;
        self.bricks_scored = 0;
    }

    pub fn increment_velocity(&mut self) {
        self.velocity += self.velocity_step;
        log::debug!("Ball velocity bumped to {:.4}", self.velocity);
    }

    pub fn increment_hit_count(&mut self) {
        self.hit_counter += 1;
        if VELOCITY_BUMP_HITS.contains(&self.hit_counter) {
            self.increment_velocity();
        }
    }

    fn bounce(&mut self) {
        self.state = BallState::Normal;
        self.increment_hit_count();
    }

    /// Apply the one-time velocity bonus of the top two tiers
    fn apply_tier_bonus(&mut self, tier: BrickTier) {
        let already = match tier {
            BrickTier::Orange => &mut self.orange_bricks_hit,
            BrickTier::Red => &mut self.red_bricks_hit,
            _ => return,
        };
        if !*already {
            *already = true;
            self.increment_velocity();
        }
    }

    /// Advance the ball one tick
    ///
    /// On `BallEvent::OutOfBounds` the ball is left unmoved: the court resets
    /// it first and then finishes the tick's movement with the new state.
    pub fn update(&mut self, dt: f32, mut ctx: BallContext<'_>) -> Result<BallEvent, CourtError> {
        if !self.body.visible {
            return Ok(BallEvent::None);
        }

        if self.direction.y < 0.0 && self.collides(ctx.top_wall) {
            self.direction.y = -self.direction.y;
            self.bounce();
            ctx.paddle.shrink();
        }
        if self.direction.x < 0.0 && self.collides(ctx.left_wall) {
            self.direction.x = -self.direction.x;
            self.bounce();
        }
        if self.direction.x > 0.0 && self.collides(ctx.right_wall) {
            self.direction.x = -self.direction.x;
            self.bounce();
        }
        if self.direction.y > 0.0 && self.collides(&*ctx.paddle) {
            let paddle = &ctx.paddle.body;
            let x_diff = self.body.center().x - paddle.center().x;
            let steered = Vec2::new(x_diff / (paddle.width() / 2.0), -self.direction.y);
            self.direction = normalize_direction(steered)?;
            self.bounce();
        }

        let mut event = BallEvent::None;
        if self.direction.y > 0.0 && self.collides(ctx.out_of_bounds) {
            return Ok(BallEvent::OutOfBounds);
        } else if self.state != BallState::BrickHit {
            let hit = ctx.bricks.iter().position(|brick| self.collides(brick));
            if let Some(index) = hit {
                if !self.end_game_mode {
                    let tier = ctx.bricks[index].tier;
                    ctx.bricks[index].body.disable();
                    self.apply_tier_bonus(tier);
                    self.increment_hit_count();
                    self.bricks_scored += 1;

                    let level_cleared = destroyed_bricks(ctx.bricks) == ctx.bricks.len();
                    event = BallEvent::BrickDestroyed {
                        tier,
                        level_cleared,
                    };
                    if level_cleared {
                        return Ok(event);
                    }
                }
                self.state = BallState::BrickHit;
                self.direction.y = -self.direction.y;
            }
        }

        self.body.advance(self.direction, self.velocity, dt);
        Ok(event)
    }
}

impl Collideable for Ball {
    fn body(&self) -> &Body {
        &self.body
    }
}
