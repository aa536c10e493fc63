//! Platform abstraction layer
//!
//! Handles the native collaborators of the frame loop:
//! - Time/pacing
//! - Input events
//! - The window and its event loop

pub mod clock;
pub mod input;
pub mod window;

pub use clock::{Clock, FrameClock, SystemClock};
pub use input::InputSource;
pub use window::GameWindow;
