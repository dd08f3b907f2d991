//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and
//! deterministic:
//! - Seeded RNG only, owned by the match state
//! - State mutated exclusively through `tick`
//! - No rendering or platform dependencies

pub mod collision;
pub mod object;
pub mod state;
pub mod tick;

pub use collision::{
    Side, collide_ball_with_paddle, collide_ball_with_terrain, collide_paddle_with_terrain,
    touching_side,
};
pub use object::{Ball, GameObject, Paddle, Terrain};
pub use state::{GameState, Phase};
pub use tick::{FrameInput, tick};
