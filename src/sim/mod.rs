//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Contact, did_hit_the_wall, is_on_the_ground, touching_ground, touching_wall};
pub use geometry::{Platform, Vec2, Wall};
pub use player::{Player, Steer, update_player};
pub use state::{Facing, GameState, RunState};
pub use tick::{GameKey, InputEvent, TickInput, TickOutcome, tick};
