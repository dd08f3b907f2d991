//! lepong - a two-player ball-and-paddle game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, match state)
//! - `lifecycle`: Staged startup/teardown with transactional rollback
//! - `platform`: Window/event and clock collaborator interfaces
//! - `gfx`: Graphics collaborator interface and resource handles
//! - `app`: Owning application context and frame loop

pub mod app;
pub mod gfx;
pub mod lifecycle;
pub mod platform;
pub mod sim;

pub use app::{App, Harness};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Window dimensions, fixed for the process lifetime
    pub const WIN_WIDTH: f32 = 1280.0;
    pub const WIN_HEIGHT: f32 = 720.0;

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(25.0, 150.0);
    pub const PADDLE_MOVE_SPEED: f32 = 300.0;
    /// Horizontal distance from each side wall to a paddle's center
    pub const PADDLE_BORDER_OFFSET: f32 = 50.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_START_SPEED: f32 = 400.0;
    /// Speed gained on each paddle hit (rally speed-up)
    pub const BALL_SPEED_INCREMENT: f32 = 50.0;

    /// Maximum frame delta fed to the simulation (seconds)
    pub const MAX_DELTA: f32 = 0.1;
}
