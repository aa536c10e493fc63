//! Fixed timestep simulation tick
//!
//! One call to `tick` is one frame of the game: input, contact tests,
//! scrolling and difficulty, integration, death.

use super::collision::Contact;
use super::player::{Steer, update_player};
use super::state::{Facing, GameState};
use crate::consts::*;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Up,
    Left,
    Right,
    Q,
}

/// Discrete input event, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(GameKey),
    KeyUp(GameKey),
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A quit was requested; the frame itself still ran to completion
    pub quit: bool,
    /// The score was captured this frame
    pub died: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    for event in &input.events {
        match *event {
            InputEvent::Quit | InputEvent::KeyUp(GameKey::Q) => outcome.quit = true,
            InputEvent::KeyDown(GameKey::Up) => {
                if state.run.start() {
                    log::info!("Run started");
                }
                // Uses last frame's contact; this frame's is not known yet
                if state.contact.on_ground {
                    state.player.jump();
                }
            }
            InputEvent::KeyDown(GameKey::Left) => {
                state.player.steer(Steer::Left);
                state.facing = Facing::Left;
            }
            InputEvent::KeyDown(GameKey::Right) => {
                state.player.steer(Steer::Right);
                state.facing = Facing::Right;
            }
            InputEvent::KeyUp(GameKey::Up) => state.player.release_jump(),
            InputEvent::KeyUp(GameKey::Left | GameKey::Right) => state.player.release_steer(),
            InputEvent::KeyDown(GameKey::Q) => {}
        }
    }

    state.run.game_time += dt;

    let contact = Contact::detect(&state.player, &state.walls, &state.platforms, &state.ledge);
    state.contact = contact;

    if state.run.started {
        state.scroll();
        if let Some(level) = state.run.escalate() {
            log::info!(
                "Difficulty {} at {:.1}s (overclock x{})",
                level,
                state.run.game_time,
                state.run.overclock
            );
        }
    }

    state.player = update_player(state.player, dt, contact.hit_wall, contact.on_ground);

    if state.player.position.y > DEATH_Y {
        state.run.alive = false;
        if state.player.position.y < GRAVE_Y && state.run.capture_score() {
            outcome.died = true;
            match serde_json::to_string(&state.run) {
                Ok(summary) => log::info!("Run over: {}", summary),
                Err(_) => log::info!("Run over after {:.1}s", state.run.game_time),
            }
        }
        state.player.position.y = GRAVE_Y;
    }

    outcome
}
