//! Per-frame simulation step
//!
//! One `tick` call per frame, driven by the frame loop with a measured
//! delta. The ordering inside a tick is fixed and load-bearing:
//! launch transition, paddle steering, motion updates, paddle
//! containment, ball/terrain reflection, ball/paddle bounces (paddle 1
//! first, short-circuit), then the scoring check on bounce-free frames.

use super::collision::{
    self, Side, collide_ball_with_paddle, collide_ball_with_terrain, collide_paddle_with_terrain,
};
use super::state::{GameState, Phase};

/// Input state for a single frame
///
/// Held movement keys are level-triggered; `launch` is edge-triggered
/// and must be cleared by the frame loop once a tick has consumed it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
    pub launch: bool,
}

impl FrameInput {
    /// Clears one-shot inputs after a tick has consumed them
    pub fn end_frame(&mut self) {
        self.launch = false;
    }
}

/// Advances the match by one frame
pub fn tick(state: &mut GameState, input: &FrameInput, delta: f32) {
    if state.phase == Phase::Idle && input.launch {
        state.launch_ball();
    }

    // Movement keys only steer paddles during an active rally.
    if state.phase == Phase::Playing {
        state.paddles[0].apply_move_input(input.p1_up, input.p1_down);
        state.paddles[1].apply_move_input(input.p2_up, input.p2_down);
    }

    state.ball.object.update(delta);

    for paddle in &mut state.paddles {
        let pre_update = paddle.object.position;
        paddle.object.update(delta);
        collide_paddle_with_terrain(paddle, pre_update, &state.terrain);
    }

    let bounced = collide_ball_with_terrain(&mut state.ball, &state.terrain);

    // A ball cannot occupy both paddle zones at once; stop at the first hit.
    let hit = collide_ball_with_paddle(&mut state.ball, &state.paddles[0])
        || collide_ball_with_paddle(&mut state.ball, &state.paddles[1]);

    if !bounced && !hit {
        let side = collision::touching_side(&state.ball, &state.terrain);

        if side != Side::None {
            state.award_point(side);
            state.reset_round();
        }
    }
}
