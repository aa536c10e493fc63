//! Game state and run bookkeeping
//!
//! Everything the frame loop mutates lives in `GameState`, so one frame is a
//! single `tick` call on one value.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Contact;
use super::geometry::{Platform, Wall};
use super::player::Player;
use crate::consts::*;

/// Progress of the current run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunState {
    /// Seconds since the run started (counts from launch until then)
    pub game_time: f64,
    /// Scroll speed in units per frame, 1..=4
    pub difficulty: i32,
    /// Indicator spin multiplier, 1 or 12
    pub overclock: i32,
    /// Set by the first jump key press
    pub started: bool,
    /// Cleared when the player falls out of the shaft
    pub alive: bool,
    /// Whole seconds survived, captured once at death
    pub score: Option<String>,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            game_time: 0.0,
            difficulty: 1,
            overclock: 1,
            started: false,
            alive: true,
            score: None,
        }
    }
}

impl RunState {
    /// Begin the run on the first jump. Later calls do nothing.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.game_time = 0.0;
        true
    }

    /// Raise difficulty for elapsed time. Returns the new level if it changed.
    ///
    /// Steps are taken in order, each only from the level just below it, so
    /// difficulty never decreases or skips ahead of its predecessor.
    pub fn escalate(&mut self) -> Option<i32> {
        let before = self.difficulty;
        for (threshold, level) in DIFFICULTY_STEPS {
            if self.game_time > threshold && self.difficulty == level - 1 {
                self.difficulty = level;
                if level == MAX_DIFFICULTY {
                    self.overclock = MAX_OVERCLOCK;
                }
            }
        }
        (self.difficulty != before).then_some(self.difficulty)
    }

    /// Record the score from elapsed time. Only the first call has an effect.
    pub fn capture_score(&mut self) -> bool {
        if self.score.is_some() {
            return false;
        }
        self.score = Some((self.game_time.floor() as i64).to_string());
        true
    }

    /// Rotation of the clock hand indicator, in degrees
    pub fn carrot_angle(&self) -> f64 {
        let started = if self.started { 1.0 } else { 0.0 };
        self.game_time * 360.0 * started * self.overclock as f64 * 0.05
    }
}

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the platform RNG was created from
    pub seed: u64,
    pub player: Player,
    pub walls: Vec<Wall>,
    pub platforms: [Platform; PLATFORM_COUNT],
    pub ledge: Platform,
    pub run: RunState,
    pub facing: Facing,
    /// Contact flags from the most recent frame
    pub contact: Contact,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game with the given platform seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = Platform::spawn_row(&mut rng);
        Self {
            seed,
            player: Player::spawn(),
            walls: Wall::columns(),
            platforms,
            ledge: Platform::ledge(),
            run: RunState::default(),
            facing: Facing::default(),
            contact: Contact::default(),
            rng,
        }
    }

    /// Move every scrolling obstacle and the player down by one frame's worth
    pub fn scroll(&mut self) {
        let step = self.run.difficulty as f64;
        for platform in &mut self.platforms {
            platform.y += step;
            if platform.y > PLATFORM_WRAP_Y {
                platform.respawn(&mut self.rng);
            }
        }
        self.player.position.y += step;
        if self.ledge.y < LEDGE_FLOOR {
            self.ledge.y += 1.0;
        }
    }

    /// Whether the player sprite is drawn mirrored
    pub fn mirrored(&self) -> bool {
        self.facing == Facing::Left
    }
}
