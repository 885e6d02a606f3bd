//! Deterministic court simulation
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (ball serve direction)
//! - Stable iteration order (bricks in storage order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod digit;
pub mod entity;
pub mod geom;
pub mod layout;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallContext, BallEvent, BallState, random_serve_direction};
pub use collision::{Collideable, collides};
pub use digit::{Digit, Segment, score_digit_values, segments_for};
pub use entity::{Brick, BrickTier, OutOfBounds, Paddle, Wall, destroyed_bricks};
pub use geom::{Body, Rect, normalize_direction};
pub use layout::CourtLayout;
pub use state::{Court, MatchSummary};
pub use tick::tick;
