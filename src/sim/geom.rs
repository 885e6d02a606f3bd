//! Rectangle geometry shared by every court entity
//!
//! A `Body` is a top-left anchored axis-aligned rectangle with the two flags
//! every entity carries:
//! - visible: whether the render pass draws it
//! - enabled: whether it takes part in collision tests
//!
//! The AABB center and extent are derived on read, so moving a body can never
//! leave them out of sync with its position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::CourtError;

/// Normalize a direction vector, refusing zero-length input
pub fn normalize_direction(v: Vec2) -> Result<Vec2, CourtError> {
    v.try_normalize().ok_or(CourtError::ZeroLengthDirection)
}

/// A plain rectangle (draw instructions, segment strokes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Positional rectangle with visibility and collision flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    pub visible: bool,
    pub enabled: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            visible: true,
            enabled: true,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Half-width and half-height
    #[inline]
    pub fn extent(&self) -> Vec2 {
        self.size * 0.5
    }

    /// AABB center
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.extent()
    }

    /// Place the body so that its center lands on `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.extent();
    }

    /// Change the width while keeping the horizontal center fixed
    pub fn set_width_centered(&mut self, width: f32) {
        let cx = self.center().x;
        self.size.x = width;
        self.pos.x = cx - width * 0.5;
    }

    /// Advance along `direction` at `velocity` for `dt` milliseconds.
    ///
    /// Axes with a zero direction component are left untouched.
    pub fn advance(&mut self, direction: Vec2, velocity: f32, dt: f32) {
        if direction.x != 0.0 {
            self.pos.x += dt * direction.x * velocity;
        }
        if direction.y != 0.0 {
            self.pos.y += dt * direction.y * velocity;
        }
    }

    /// Hide and disable (a destroyed brick)
    pub fn disable(&mut self) {
        self.visible = false;
        self.enabled = false;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}
