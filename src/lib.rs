//! Breakout Court - A two-player Breakout clone
//!
//! Core modules:
//! - `sim`: Deterministic court simulation (entities, collisions, match state)
//! - `render`: Draw passes over an injected render sink
//! - `scene`: Welcome/Court scenes and the fixed-step frame driver
//! - `autopilot`: Attract-mode paddle controller
//! - `settings`: Viewport and run configuration

pub mod autopilot;
pub mod error;
pub mod render;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::CourtError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const SIM_DT: f32 = 1000.0 / 60.0;
    /// Frames with a larger real delta (ms) are dropped entirely
    pub const MAX_FRAME_DELTA: f64 = 100.0;

    /// Court width is divided into this many brick slots
    pub const SLOT_WIDTH_DIVISOR: f32 = 16.0;
    /// Slot height (wall thickness, ball size) relative to court width
    pub const SLOT_HEIGHT_DIVISOR: f32 = 45.0;
    /// Digits are this many slot heights tall
    pub const DIGIT_HEIGHT_SLOTS: f32 = 5.0;
    /// Distance of the paddle top edge from the bottom of the court
    pub const PADDLE_BOTTOM_OFFSET: f32 = 100.0;
    /// Height of the out-of-bounds detector below the court
    pub const OUT_OF_BOUNDS_HEIGHT: f32 = 1000.0;

    /// Brick grid dimensions
    pub const BRICK_COLUMNS: usize = 14;
    pub const BRICK_ROWS: usize = 8;
    /// Levels every player gets at match start
    pub const LEVELS_PER_PLAYER: usize = 2;

    /// Court height divided by this gives the serve velocity (px/ms)
    pub const BALL_VELOCITY_DIVISOR: f32 = 2370.0;
    /// Court height divided by this gives one velocity bump (px/ms)
    pub const BALL_VELOCITY_STEP_DIVISOR: f32 = 6330.0;
    /// Court height divided by this gives the paddle velocity (px/ms)
    pub const PADDLE_VELOCITY_DIVISOR: f32 = 1350.0;
    /// Cumulative hit counts that bump the ball velocity
    pub const VELOCITY_BUMP_HITS: [u32; 2] = [4, 12];

    /// Balls per player; a ball index above this means out of lives
    pub const BALLS_PER_PLAYER: u32 = 3;

    /// Blink cycles armed by a blink request
    pub const BLINK_COUNT: u32 = 5;
    /// Ticks spent in each blink phase
    pub const BLINK_INTERVAL: i32 = 10;
}
