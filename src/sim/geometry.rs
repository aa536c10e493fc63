//! Obstacle shapes
//!
//! Walls and platforms are plain origins; their extents are the layout
//! constants in `consts`.

use rand::Rng;

use crate::consts::*;

/// Two-component double vector used for all kinematics
pub type Vec2 = glam::DVec2;

/// A 128×128 wall block. Walls never move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub x: f64,
    pub y: f64,
}

impl Wall {
    /// Both wall columns, left column first, each top to bottom
    pub fn columns() -> Vec<Wall> {
        let right_x = SCREEN_WIDTH as f64 - WALL_SIZE;
        [0.0, right_x]
            .into_iter()
            .flat_map(|x| {
                (0..WALL_ROWS).map(move |row| Wall {
                    x,
                    y: WALL_SIZE * row as f64,
                })
            })
            .collect()
    }
}

/// A landing surface. Height is always `PLATFORM_HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

impl Platform {
    /// The wide ledge the player starts on
    pub fn ledge() -> Self {
        Self {
            x: LEDGE_X,
            y: LEDGE_Y,
            width: LEDGE_WIDTH,
        }
    }

    /// The scrolling platform set, evenly stacked above the ledge
    pub fn spawn_row<R: Rng>(rng: &mut R) -> [Platform; PLATFORM_COUNT] {
        std::array::from_fn(|i| Platform {
            x: random_platform_x(rng),
            y: PLATFORM_FIRST_Y - PLATFORM_SPACING * i as f64,
            width: PLATFORM_WIDTH,
        })
    }

    /// Move back above the top of the screen at a fresh column
    pub fn respawn<R: Rng>(&mut self, rng: &mut R) {
        self.y = PLATFORM_RESPAWN_Y;
        self.x = random_platform_x(rng);
    }

    /// Right end of the landing surface
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Uniform integer column in `PLATFORM_MIN_X..PLATFORM_MAX_X`
pub fn random_platform_x<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(PLATFORM_MIN_X..PLATFORM_MAX_X) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_wall_columns_cover_shaft() {
        let walls = Wall::columns();
        assert_eq!(walls.len(), 12);
        assert!(walls[..6].iter().all(|w| w.x == 0.0));
        assert!(walls[6..].iter().all(|w| w.x == 832.0));
        let ys: Vec<f64> = walls[..6].iter().map(|w| w.y).collect();
        assert_eq!(ys, vec![0.0, 128.0, 256.0, 384.0, 512.0, 640.0]);
        assert_eq!(walls[6].y, 0.0);
        assert_eq!(walls[11].y, 640.0);
    }

    #[test]
    fn test_spawn_row_layout() {
        let mut rng = Pcg32::seed_from_u64(7);
        let row = Platform::spawn_row(&mut rng);
        for (i, p) in row.iter().enumerate() {
            assert_eq!(p.y, 600.0 - 160.0 * i as f64);
            assert_eq!(p.width, 192.0);
            assert!((130.0..640.0).contains(&p.x));
            assert_eq!(p.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_respawn_moves_to_top() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut p = Platform {
            x: 300.0,
            y: 761.0,
            width: PLATFORM_WIDTH,
        };
        p.respawn(&mut rng);
        assert_eq!(p.y, -32.0);
        assert!((130.0..640.0).contains(&p.x));
        assert_eq!(p.width, PLATFORM_WIDTH);
    }

    #[test]
    fn test_ledge() {
        let ledge = Platform::ledge();
        assert_eq!((ledge.x, ledge.y, ledge.width), (130.0, 700.0, 700.0));
        assert_eq!(ledge.right(), 830.0);
    }
}
