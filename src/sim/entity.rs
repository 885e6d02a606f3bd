//! Static court entities and the paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Collideable;
use super::geom::Body;

/// A side or top wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub body: Body,
}

impl Wall {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            body: Body::new(x, y, width, height),
        }
    }
}

impl Collideable for Wall {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// The hidden sentinel below the paddle; touching it loses the ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutOfBounds {
    pub body: Body,
}

impl OutOfBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut body = Body::new(x, y, width, height);
        body.visible = false;
        Self { body }
    }
}

impl Collideable for OutOfBounds {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// Brick scoring tiers, lowest row first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickTier {
    Yellow,
    Green,
    Orange,
    Red,
}

impl BrickTier {
    /// Tier for a brick row, counted from the top of the grid
    pub fn for_row(row: usize) -> Self {
        match row {
            0 | 1 => BrickTier::Red,
            2 | 3 => BrickTier::Orange,
            4 | 5 => BrickTier::Green,
            _ => BrickTier::Yellow,
        }
    }

    /// Points awarded for destroying a brick of this tier
    pub fn points(self) -> u32 {
        match self {
            BrickTier::Yellow => 1,
            BrickTier::Green => 3,
            BrickTier::Orange => 5,
            BrickTier::Red => 7,
        }
    }

    /// The two top tiers bump the ball velocity on their first hit per life
    pub fn grants_velocity_bonus(self) -> bool {
        matches!(self, BrickTier::Orange | BrickTier::Red)
    }
}

/// A single brick; destroyed bricks stay in place, hidden and disabled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub body: Body,
    pub tier: BrickTier,
}

impl Brick {
    pub fn new(x: f32, y: f32, width: f32, height: f32, tier: BrickTier) -> Self {
        Self {
            body: Body::new(x, y, width, height),
            tier,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        !self.body.visible
    }
}

impl Collideable for Brick {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// Count destroyed bricks in a level
pub fn destroyed_bricks(bricks: &[Brick]) -> usize {
    bricks.iter().filter(|b| b.is_destroyed()).count()
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Body,
    /// Horizontal intent: -1, 0 or 1 on x
    pub direction: Vec2,
    /// Speed in px/ms
    pub velocity: f32,
    pub original_width: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, velocity: f32) -> Self {
        Self {
            body: Body::new(x, y, width, height),
            direction: Vec2::ZERO,
            velocity,
            original_width: width,
        }
    }

    pub fn is_shrunk(&self) -> bool {
        self.body.width() != self.original_width
    }

    /// Halve the width around the current center; only the first call has effect
    pub fn shrink(&mut self) {
        if self.body.width() == self.original_width {
            self.body.set_width_centered(self.original_width / 2.0);
        }
    }

    /// Restore the original width and recenter horizontally in the court
    pub fn reset(&mut self, court_width: f32) {
        self.body.size.x = self.original_width;
        self.body.pos.x = court_width / 2.0 - self.body.extent().x;
    }

    /// Stretch across the whole space between the side walls
    pub fn stretch(&mut self, left: &Wall, right: &Wall) {
        self.body.pos.x = left.body.pos.x + left.body.width();
        self.body.size.x = right.body.pos.x - self.body.pos.x;
    }

    /// Move by the current intent, then snap flush against a wall it ran into
    pub fn update(&mut self, dt: f32, left: &Wall, right: &Wall) {
        self.body.advance(self.direction, self.velocity, dt);
        if self.direction.x < 0.0 && self.collides(left) {
            self.body.pos.x = left.body.pos.x + left.body.width();
        }
        if self.direction.x > 0.0 && self.collides(right) {
            self.body.pos.x = right.body.pos.x - self.body.width();
        }
    }
}

impl Collideable for Paddle {
    fn body(&self) -> &Body {
        &self.body
    }
}
