//! Game objects and the shared motion primitive
//!
//! Everything that moves on the terrain shares one motion state:
//! a position advanced along a unit (or zero) direction at a scalar
//! speed. Bounds handling is not done here; the collision module owns it.

use glam::Vec2;

use crate::consts::*;

/// The fixed rectangular play area, spanning [0, width] x [0, height]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Terrain {
    pub width: f32,
    pub height: f32,
}

impl Terrain {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Shared motion state for paddles and the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameObject {
    pub position: Vec2,
    /// Unit length or zero
    pub move_direction: Vec2,
    /// Units per second, never negative
    pub move_speed: f32,
}

impl Default for GameObject {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            move_direction: Vec2::ZERO,
            move_speed: 0.0,
        }
    }
}

impl GameObject {
    /// Pure translation: `position += move_direction * move_speed * delta`
    pub fn update(&mut self, delta: f32) {
        self.position += self.move_direction * self.move_speed * delta;
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub object: GameObject,
    /// Full width and height of the paddle rectangle
    pub size: Vec2,
    /// The x direction the paddle is facing, +1 or -1, fixed for its life
    pub forward: f32,
}

impl Paddle {
    pub fn new(size: Vec2, forward: f32) -> Self {
        Self {
            object: GameObject::default(),
            size,
            forward,
        }
    }

    /// Composes held up/down inputs into this frame's motion
    pub fn apply_move_input(&mut self, up: bool, down: bool) {
        let dir = (up as i8 - down as i8) as f32;
        self.object.move_direction = Vec2::new(0.0, dir);
        self.object.move_speed = if dir == 0.0 { 0.0 } else { PADDLE_MOVE_SPEED };
    }

    /// Returns the paddle to its vertical center with no motion.
    /// The horizontal position is layout-owned and left untouched.
    pub fn reset(&mut self, terrain: &Terrain) {
        self.object.position.y = terrain.height / 2.0;
        self.object.move_direction = Vec2::ZERO;
        self.object.move_speed = 0.0;
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub object: GameObject,
    /// Fixed for the ball's life
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            object: GameObject::default(),
            radius,
        }
    }

    /// Returns the ball to the terrain center with no motion
    pub fn reset(&mut self, terrain: &Terrain) {
        self.object.position = terrain.center();
        self.object.move_direction = Vec2::ZERO;
        self.object.move_speed = 0.0;
    }
}
