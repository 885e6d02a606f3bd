//! Fixed timestep simulation tick
//!
//! Update order per tick: paddle, ball (with match reactions), digits.

use super::ball::{BallContext, BallEvent};
use super::state::Court;
use crate::error::CourtError;

/// Advance the court by one fixed timestep of `dt` milliseconds
pub fn tick(court: &mut Court, dt: f32) -> Result<BallEvent, CourtError> {
    court
        .paddle
        .update(dt, &court.left_wall, &court.right_wall);

    let player = court.active_player;
    let level = court.player_level[player];
    let event = court.ball.update(
        dt,
        BallContext {
            top_wall: &court.top_wall,
            left_wall: &court.left_wall,
            right_wall: &court.right_wall,
            paddle: &mut court.paddle,
            out_of_bounds: &court.out_of_bounds,
            bricks: &mut court.player_bricks[player][level],
        },
    )?;

    match event {
        BallEvent::None => {}
        BallEvent::OutOfBounds => {
            court.on_ball_lost();
            let ball = &mut court.ball;
            ball.body.advance(ball.direction, ball.velocity, dt);
        }
        BallEvent::BrickDestroyed {
            tier,
            level_cleared,
        } => {
            court.on_brick_destroyed(tier);
            if level_cleared {
                court.on_level_cleared();
            }
        }
    }

    court.update_digits();
    Ok(event)
}
