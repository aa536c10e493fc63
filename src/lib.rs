//! Shaft Hop - a falling-shaft platformer
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (physics, collisions, run state)
//! - `renderer`: Frame composition and the wgpu sprite pipeline
//! - `platform`: Window, input and clock collaborators
//! - `assets`: Sprite sheet loading
//! - `settings`: Startup configuration
//! - `game`: The paced frame loop tying everything together

pub mod assets;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Logical screen size; everything is laid out in these units
    pub const SCREEN_WIDTH: u32 = 960;
    pub const SCREEN_HEIGHT: u32 = 720;

    /// Downward acceleration while airborne (units/s²)
    pub const GRAVITY: f64 = 500.0;
    /// Per-frame velocity drag, both axes
    pub const DAMPING: f64 = 0.99;
    /// Above this horizontal speed the steering force is dropped
    pub const MAX_HORIZONTAL_SPEED: f64 = 5000.0;
    /// Horizontal velocity factor on wall contact (reverse and amplify)
    pub const WALL_BOUNCE: f64 = -1.01;
    /// Upward velocity factor on wall contact
    pub const WALL_LIFT: f64 = 1.1;

    /// Player footprint; `position` is the bottom-left corner
    pub const PLAYER_WIDTH: f64 = 64.0;
    pub const PLAYER_HEIGHT: f64 = 128.0;
    pub const PLAYER_SPAWN: (f64, f64) = (320.0, 700.0);

    /// Horizontal acceleration while a direction key is held
    pub const STEER_ACCEL: f64 = 600.0;
    /// Base take-off speed of a jump
    pub const JUMP_SPEED: f64 = 500.0;
    /// Share of horizontal speed converted into extra jump height
    pub const JUMP_CARRY: f64 = 0.95;
    /// Lift applied on take-off so the next ground test misses
    pub const JUMP_NUDGE: f64 = 5.0;

    /// Walls: two columns of square blocks
    pub const WALL_SIZE: f64 = 128.0;
    pub const WALL_ROWS: usize = 6;
    /// Horizontal reach of a wall for hit tests (one wider than the sprite)
    pub const WALL_HIT_SPAN: f64 = 129.0;

    /// Platforms
    pub const PLATFORM_COUNT: usize = 5;
    pub const PLATFORM_WIDTH: f64 = 192.0;
    pub const PLATFORM_HEIGHT: f64 = 32.0;
    pub const PLATFORM_FIRST_Y: f64 = 600.0;
    pub const PLATFORM_SPACING: f64 = 160.0;
    /// Platform x is drawn from `PLATFORM_MIN_X..PLATFORM_MAX_X`
    pub const PLATFORM_MIN_X: i32 = 130;
    pub const PLATFORM_MAX_X: i32 = 640;
    /// A platform scrolled below this line reappears at `PLATFORM_RESPAWN_Y`
    pub const PLATFORM_WRAP_Y: f64 = 760.0;
    pub const PLATFORM_RESPAWN_Y: f64 = -32.0;

    /// Ground band around a platform top: `(y - ABOVE, y + BELOW)`
    pub const GROUND_BAND_ABOVE: f64 = 1.0;
    pub const GROUND_BAND_BELOW: f64 = 10.0;

    /// Starting ledge
    pub const LEDGE_X: f64 = 130.0;
    pub const LEDGE_Y: f64 = 700.0;
    pub const LEDGE_WIDTH: f64 = 700.0;
    /// The ledge stops scrolling once it reaches this line
    pub const LEDGE_FLOOR: f64 = 1000.0;

    /// Falling below this line ends the run
    pub const DEATH_Y: f64 = 790.0;
    /// Where a dead player is parked
    pub const GRAVE_Y: f64 = 900.0;

    /// (elapsed seconds, difficulty reached) in escalation order
    pub const DIFFICULTY_STEPS: [(f64, i32); 3] = [(20.0, 2), (40.0, 3), (60.0, 4)];
    pub const MAX_DIFFICULTY: i32 = 4;
    /// Indicator spin multiplier once `MAX_DIFFICULTY` is reached
    pub const MAX_OVERCLOCK: i32 = 12;
}
