//! Player kinematics
//!
//! `update_player` is the whole integrator: a pure function from the previous
//! state and this frame's contact flags to the next state.

use super::geometry::Vec2;
use crate::consts::*;

/// Horizontal steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

/// The falling character. `position` is the bottom-left of the sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

impl Player {
    /// Fresh player standing on the ledge
    pub fn spawn() -> Self {
        Self {
            position: Vec2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
        }
    }

    /// Right edge of the footprint
    #[inline]
    pub fn right(&self) -> f64 {
        self.position.x + PLAYER_WIDTH
    }

    /// Take off. Horizontal speed in either direction makes the jump higher.
    pub fn jump(&mut self) {
        let carry = self.velocity.x * JUMP_CARRY;
        self.velocity.y = if self.velocity.x > 0.0 {
            -JUMP_SPEED - carry
        } else {
            -JUMP_SPEED + carry
        };
        self.position.y -= JUMP_NUDGE;
    }

    pub fn steer(&mut self, dir: Steer) {
        self.acceleration.x = match dir {
            Steer::Left => -STEER_ACCEL,
            Steer::Right => STEER_ACCEL,
        };
    }

    pub fn release_steer(&mut self) {
        self.acceleration.x = 0.0;
    }

    pub fn release_jump(&mut self) {
        self.acceleration.y = 0.0;
    }
}

/// Advance the player by one timestep.
///
/// Contact flags are computed by the caller against the state *before* this
/// step. Wall contact bounces horizontally; ground contact cancels the fall.
pub fn update_player(prev: Player, dt: f64, hit_wall: bool, on_ground: bool) -> Player {
    let mut p = prev;

    if on_ground {
        p.velocity.y = 0.0;
        p.acceleration.y = 0.0;
    } else {
        p.acceleration.y = GRAVITY;
    }

    // Limits the driving force, not the speed itself
    if p.velocity.x.abs() > MAX_HORIZONTAL_SPEED {
        p.acceleration.x = 0.0;
    }

    if hit_wall {
        p.velocity.x *= WALL_BOUNCE;
        if p.velocity.y < 0.0 {
            p.velocity.y *= WALL_LIFT;
        }
        // Integration below restarts from `prev.position`, which undoes
        // whatever movement carried the player into the wall.
        p.position = prev.position;
    }

    let position = p.position + p.velocity * dt + p.acceleration * dt * dt * 0.5;
    let velocity = (p.velocity + p.acceleration * dt) * DAMPING;

    Player {
        position,
        velocity,
        acceleration: p.acceleration,
    }
}
