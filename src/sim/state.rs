//! Match state and round orchestration
//!
//! The match cycles between two phases for the whole process lifetime:
//! Idle (ball at rest, waiting for the launch key) and Playing (active
//! rally). A scored point returns everything to Idle.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Side;
use super::object::{Ball, Paddle, Terrain};
use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ball at rest in the center, waiting for launch input
    Idle,
    /// Active rally
    Playing,
}

/// Complete match state: objects, phase, score tally and the match RNG
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    /// Points per player, index 0 = left, index 1 = right
    pub scores: [u32; 2],
    pub terrain: Terrain,
    pub ball: Ball,
    /// Index 0 faces right (+1), index 1 faces left (-1)
    pub paddles: [Paddle; 2],
    /// Seeded once at process start; only consulted by `launch_ball`
    rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        let terrain = Terrain {
            width: WIN_WIDTH,
            height: WIN_HEIGHT,
        };

        let mut state = Self {
            phase: Phase::Idle,
            scores: [0, 0],
            terrain,
            ball: Ball::new(BALL_RADIUS),
            paddles: [
                Paddle::new(PADDLE_SIZE, 1.0),
                Paddle::new(PADDLE_SIZE, -1.0),
            ],
            rng: Pcg32::seed_from_u64(seed),
        };

        state.reset_round();
        state.position_paddles_on_terrain();
        state
    }

    /// Places both paddles at their fixed horizontal offsets from the
    /// side walls. Layout only; never re-run during play.
    pub fn position_paddles_on_terrain(&mut self) {
        self.paddles[0].object.position.x = PADDLE_BORDER_OFFSET;
        self.paddles[1].object.position.x = self.terrain.width - PADDLE_BORDER_OFFSET;
    }

    /// Starts a rally: default speed, random diagonal direction
    ///
    /// Each axis is independently +1 or -1, then normalized. This is the
    /// only place randomness enters the simulation.
    pub fn launch_ball(&mut self) {
        self.ball.object.move_speed = BALL_START_SPEED;

        let direction = Vec2::new(random_sign(&mut self.rng), random_sign(&mut self.rng));
        self.ball.object.move_direction = direction.normalize();

        self.phase = Phase::Playing;
    }

    /// Gives the point to the player opposite the crossed side
    pub fn award_point(&mut self, lost_side: Side) {
        let winner = match lost_side {
            Side::Left => 1,
            Side::Right => 0,
            Side::None => return,
        };

        self.scores[winner] += 1;
        log::info!(
            "point to player {} ({} - {})",
            winner + 1,
            self.scores[0],
            self.scores[1]
        );
    }

    /// Returns ball and paddles to their fixed starting state and waits
    /// for the next launch
    pub fn reset_round(&mut self) {
        self.ball.reset(&self.terrain);

        for paddle in &mut self.paddles {
            paddle.reset(&self.terrain);
        }

        self.phase = Phase::Idle;
    }
}

fn random_sign(rng: &mut Pcg32) -> f32 {
    if rng.random() { 1.0 } else { -1.0 }
}
