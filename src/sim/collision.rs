//! Collision resolution against the terrain and between entities
//!
//! All rules the match depends on live here: paddles soft-stop near the
//! horizontal edges, the ball reflects off them, bounces off paddles with
//! a rally speed-up, and crossing a vertical edge attributes a point.
//! Order matters and is owned by `tick`: terrain reflection runs before
//! the side check so a frame never both bounces and scores.

use glam::Vec2;

use super::object::{Ball, Paddle, Terrain};
use crate::consts::BALL_SPEED_INCREMENT;

/// Which vertical boundary the ball has fully crossed this frame, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    None,
    Left,
    Right,
}

/// Halts a paddle that stepped too close to a horizontal terrain edge.
///
/// The inset margin is 10% of the paddle height. A violating update is
/// rejected outright (position reverts to `pre_update_position`) rather
/// than clamped to the boundary, leaving a small overlap tolerance.
pub fn collide_paddle_with_terrain(
    paddle: &mut Paddle,
    pre_update_position: Vec2,
    terrain: &Terrain,
) {
    let margin = paddle.size.y * 0.1;
    let half_height = paddle.size.y / 2.0;
    let position = paddle.object.position;

    let hits_top = position.y + margin > terrain.height - half_height;
    let hits_bottom = position.y - margin < half_height;

    if hits_top || hits_bottom {
        paddle.object.position = pre_update_position;
    }
}

/// Reflects the ball off the top or bottom terrain edge.
///
/// Returns whether a bounce was resolved; the caller must run this
/// before the side check. The vertical position is corrected back in
/// bounds so the ball ends the frame inside the terrain.
pub fn collide_ball_with_terrain(ball: &mut Ball, terrain: &Terrain) -> bool {
    let radius = ball.radius;
    let object = &mut ball.object;

    if object.position.y + radius > terrain.height {
        object.position.y = terrain.height - radius;
        object.move_direction.y = -object.move_direction.y;
        return true;
    }

    if object.position.y - radius < 0.0 {
        object.position.y = radius;
        object.move_direction.y = -object.move_direction.y;
        return true;
    }

    false
}

/// Bounces the ball off a paddle.
///
/// Overlap test is axis-aligned: the ball's bounding square (side
/// `2 * radius`) against the paddle rectangle. On overlap the horizontal
/// direction reflects and the ball gains the fixed rally speed increment.
/// Returns whether a collision was resolved.
pub fn collide_ball_with_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    let ball_min = ball.object.position - Vec2::splat(ball.radius);
    let ball_max = ball.object.position + Vec2::splat(ball.radius);
    let paddle_min = paddle.object.position - paddle.size / 2.0;
    let paddle_max = paddle.object.position + paddle.size / 2.0;

    let overlaps = ball_min.x < paddle_max.x
        && ball_max.x > paddle_min.x
        && ball_min.y < paddle_max.y
        && ball_max.y > paddle_min.y;

    if overlaps {
        ball.object.move_direction.x = -ball.object.move_direction.x;
        ball.object.move_speed += BALL_SPEED_INCREMENT;
    }

    overlaps
}

/// Returns the side whose boundary the ball has fully crossed
///
/// "Fully" means the whole ball is past the edge, not merely touching it.
/// Only meaningful on frames where no bounce was resolved.
pub fn touching_side(ball: &Ball, terrain: &Terrain) -> Side {
    if ball.object.position.x + ball.radius < 0.0 {
        Side::Left
    } else if ball.object.position.x - ball.radius > terrain.width {
        Side::Right
    } else {
        Side::None
    }
}
