//! Scenes and the fixed-step frame driver
//!
//! Two scenes act as the top-level game states:
//! 1. Welcome: title and controls, waits for a player-count choice
//! 2. Court: the match itself
//!
//! The host calls `Game::frame` once per animation frame with a timestamp in
//! milliseconds. Real elapsed time is accumulated and drained in fixed
//! `SIM_DT` steps; any remainder carries over to the next frame.

use crate::consts::{MAX_FRAME_DELTA, SIM_DT};
use crate::error::CourtError;
use crate::render::{RenderSink, draw_court, draw_welcome};
use crate::settings::Settings;
use crate::sim::{Court, CourtLayout, tick};

/// Key transition for held controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Down,
    Up,
}

/// Discrete input intents, translated upstream from raw key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft(KeyState),
    MoveRight(KeyState),
    Launch,
    /// Start a match for 1 or 2 players (welcome scene only)
    SelectPlayers(u8),
}

/// The active scene
#[derive(Debug)]
pub enum Scene {
    Welcome,
    Court(Box<Court>),
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Welcome => "welcome",
            Scene::Court(_) => "court",
        }
    }
}

/// Scene manager and frame driver
#[derive(Debug)]
pub struct Game {
    pub settings: Settings,
    scene: Scene,
    accumulator: f64,
    last_time: Option<f64>,
    next_seed: u64,
}

impl Game {
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!("Entering welcome scene");
        Self {
            settings,
            scene: Scene::Welcome,
            accumulator: 0.0,
            last_time: None,
            next_seed: seed,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn court(&self) -> Option<&Court> {
        match &self.scene {
            Scene::Court(court) => Some(court),
            Scene::Welcome => None,
        }
    }

    pub fn court_mut(&mut self) -> Option<&mut Court> {
        match &mut self.scene {
            Scene::Court(court) => Some(court),
            Scene::Welcome => None,
        }
    }

    fn exit_scene(&mut self) {
        log::info!("Leaving {} scene", self.scene.name());
        if let Scene::Court(court) = &self.scene {
            log::info!("Final standings: {:?}", court.summary());
        }
    }

    /// Return to the welcome scene
    pub fn enter_welcome(&mut self) {
        self.exit_scene();
        self.scene = Scene::Welcome;
        log::info!("Entering welcome scene");
    }

    /// Build a fresh court sized to the configured viewport
    pub fn enter_court(&mut self, players: u8) {
        self.exit_scene();
        let layout = CourtLayout::new(self.settings.court_width, self.settings.court_height);
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);
        self.scene = Scene::Court(Box::new(Court::new(layout, players, seed)));
        log::info!("Entering court scene ({} player(s))", players);
    }

    /// Route an input intent to the active scene
    pub fn handle_intent(&mut self, intent: Intent) {
        if let Scene::Welcome = self.scene {
            if let Intent::SelectPlayers(players @ (1 | 2)) = intent {
                self.enter_court(players);
            }
            return;
        }
        let Some(court) = self.court_mut() else {
            return;
        };
        match intent {
            Intent::MoveLeft(state) => court.move_left(state == KeyState::Down),
            Intent::MoveRight(state) => court.move_right(state == KeyState::Down),
            Intent::Launch => {
                court.launch_ball();
            }
            Intent::SelectPlayers(_) => {}
        }
    }

    /// One fixed simulation step
    pub fn update(&mut self, dt: f32) -> Result<(), CourtError> {
        if let Scene::Court(court) = &mut self.scene {
            tick(court, dt)?;
        }
        Ok(())
    }

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        match &self.scene {
            Scene::Welcome => {
                draw_welcome(self.settings.court_width, self.settings.court_height, sink)
            }
            Scene::Court(court) => draw_court(court, sink),
        }
    }

    /// Run zero or more fixed steps for the time elapsed since the last
    /// frame, then draw once. The first frame only records its timestamp,
    /// and frames after a long stall are dropped.
    ///
    /// Returns the number of simulation steps taken.
    pub fn frame(&mut self, now_ms: f64, sink: &mut dyn RenderSink) -> Result<u32, CourtError> {
        let Some(last) = self.last_time.replace(now_ms) else {
            return Ok(0);
        };
        let dt = now_ms - last;
        if !(0.0..MAX_FRAME_DELTA).contains(&dt) {
            return Ok(0);
        }

        self.accumulator += dt;
        let step = SIM_DT as f64;
        let mut steps = 0;
        while self.accumulator >= step {
            self.update(SIM_DT)?;
            self.accumulator -= step;
            steps += 1;
        }

        sink.clear(self.settings.court_width, self.settings.court_height);
        self.draw(sink);
        Ok(steps)
    }
}
