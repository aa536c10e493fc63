//! Contact tests between the player and the static/scrolling obstacles
//!
//! Both predicates only look at the two vertical edges of the player's
//! footprint (`x` and `x + PLAYER_WIDTH`), never the full span. A player
//! whose body covers a narrow platform with both edges hanging off it does
//! not stand on it, and wall tests ignore the wall's vertical extent
//! entirely. Gameplay depends on both quirks.

use super::geometry::{Platform, Wall};
use super::player::Player;
use crate::consts::*;

/// Per-frame contact flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    pub on_ground: bool,
    pub hit_wall: bool,
}

impl Contact {
    /// Test the player against every obstacle
    pub fn detect(player: &Player, walls: &[Wall], platforms: &[Platform], ledge: &Platform) -> Self {
        Self {
            on_ground: touching_ground(player, platforms, ledge),
            hit_wall: touching_wall(player, walls),
        }
    }
}

/// Whether the player is standing on (or just sinking into) `platform`.
///
/// The feet must sit in the band `(top - 1, top + 10)`, the player must not be
/// rising, and one of the two edges must be over the platform (inclusive).
pub fn is_on_the_ground(player: &Player, platform: &Platform) -> bool {
    let y = player.position.y;
    let in_band = y > platform.y - GROUND_BAND_ABOVE && y < platform.y + GROUND_BAND_BELOW;
    if !in_band || player.velocity.y < 0.0 {
        return false;
    }
    let over = |edge: f64| edge >= platform.x && edge <= platform.right();
    over(player.position.x) || over(player.right())
}

/// Whether either edge of the player lies strictly inside the wall's
/// horizontal reach. Height is not considered.
pub fn did_hit_the_wall(player: &Player, wall: &Wall) -> bool {
    let inside = |edge: f64| edge > wall.x && edge < wall.x + WALL_HIT_SPAN;
    inside(player.position.x) || inside(player.right())
}

/// First platform (or the ledge) the player stands on wins
pub fn touching_ground(player: &Player, platforms: &[Platform], ledge: &Platform) -> bool {
    platforms.iter().any(|p| is_on_the_ground(player, p)) || is_on_the_ground(player, ledge)
}

pub fn touching_wall(player: &Player, walls: &[Wall]) -> bool {
    walls.iter().any(|w| did_hit_the_wall(player, w))
}
