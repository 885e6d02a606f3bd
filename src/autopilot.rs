//! Demo controller that plays the court through the same intents as a human
//!
//! Used by the headless runner.

use crate::scene::{Intent, KeyState};
use crate::sim::Court;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Left,
    Right,
    Still,
}

/// Ball-tracking paddle driver
#[derive(Debug, Clone)]
pub struct Autopilot {
    heading: Heading,
    ticks: u64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            heading: Heading::Still,
            ticks: 0,
        }
    }

    /// Intents for this tick. Held keys are only re-sent when they change.
    pub fn decide(&mut self, court: &Court) -> Vec<Intent> {
        self.ticks += 1;
        let mut intents = Vec::new();

        if court.ball.is_waiting() {
            intents.push(Intent::Launch);
        }

        let paddle = &court.paddle.body;
        let target = if court.ball.body.visible {
            // Lead the ball a little and wobble the contact point so rallies
            // don't settle into a fixed loop
            let t = self.ticks as f32 * 0.01;
            let wobble = (t.sin() * 0.3 + (t * 0.7).sin() * 0.15) * paddle.width();
            let lead = court.ball.direction.x * court.ball.body.width() * 2.0;
            court.ball.body.center().x + lead + wobble
        } else {
            court.layout.center().x
        };

        let dead_zone = paddle.width() / 8.0;
        let offset = target - paddle.center().x;
        let heading = if offset > dead_zone {
            Heading::Right
        } else if offset < -dead_zone {
            Heading::Left
        } else {
            Heading::Still
        };

        if heading != self.heading {
            match self.heading {
                Heading::Left => intents.push(Intent::MoveLeft(KeyState::Up)),
                Heading::Right => intents.push(Intent::MoveRight(KeyState::Up)),
                Heading::Still => {}
            }
            match heading {
                Heading::Left => intents.push(Intent::MoveLeft(KeyState::Down)),
                Heading::Right => intents.push(Intent::MoveRight(KeyState::Down)),
                Heading::Still => {}
            }
            self.heading = heading;
        }

        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::scene::Game;
    use crate::settings::Settings;
    use crate::sim::CourtLayout;
    use glam::Vec2;

    fn court() -> Court {
        Court::new(CourtLayout::new(720.0, 900.0), 1, 3)
    }

    #[test]
    fn test_launches_waiting_ball() {
        let court = court();
        let mut pilot = Autopilot::new();
        assert!(pilot.decide(&court).contains(&Intent::Launch));
    }

    #[test]
    fn test_steers_toward_ball() {
        let mut court = court();
        court.launch_ball();
        court.ball.direction = Vec2::new(0.0, 1.0);
        court.ball.body.set_center(Vec2::new(60.0, 400.0));

        let mut pilot = Autopilot::new();
        let intents = pilot.decide(&court);
        assert!(intents.contains(&Intent::MoveLeft(KeyState::Down)));

        // Holding: nothing new to send
        assert!(pilot.decide(&court).is_empty());

        court.ball.body.set_center(Vec2::new(660.0, 400.0));
        let intents = pilot.decide(&court);
        assert_eq!(
            intents,
            vec![
                Intent::MoveLeft(KeyState::Up),
                Intent::MoveRight(KeyState::Down)
            ]
        );
    }

    #[test]
    fn test_plays_a_match_through_the_game() {
        let mut game = Game::new(Settings::default(), 11);
        game.enter_court(1);
        let mut pilot = Autopilot::new();
        let mut scored = false;
        for _ in 0..(60 * 60) {
            let Some(court) = game.court() else {
                break;
            };
            for intent in pilot.decide(court) {
                game.handle_intent(intent);
            }
            game.update(SIM_DT).unwrap();
            scored |= game.court().is_some_and(|c| c.player_scores[0] > 0);
        }
        assert!(scored);
    }
}
