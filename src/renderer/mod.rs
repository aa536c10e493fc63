//! Rendering module
//!
//! `scene` decides what goes on screen; a `Canvas` decides how. The shipped
//! canvas is the wgpu sprite pipeline.

pub mod scene;
pub mod sprite_pipeline;
pub mod vertex;

pub use scene::draw_frame;
pub use sprite_pipeline::SpriteRenderer;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Player,
    Wall,
    Background,
    Platform,
    LongPlatform,
    Clock,
    Carrot,
    GameOver,
    Digit(u8),
}

impl Sprite {
    pub const COUNT: usize = 18;

    pub const ALL: [Sprite; Self::COUNT] = [
        Sprite::Player,
        Sprite::Wall,
        Sprite::Background,
        Sprite::Platform,
        Sprite::LongPlatform,
        Sprite::Clock,
        Sprite::Carrot,
        Sprite::GameOver,
        Sprite::Digit(0),
        Sprite::Digit(1),
        Sprite::Digit(2),
        Sprite::Digit(3),
        Sprite::Digit(4),
        Sprite::Digit(5),
        Sprite::Digit(6),
        Sprite::Digit(7),
        Sprite::Digit(8),
        Sprite::Digit(9),
    ];

    /// Glyph for a score character
    pub fn digit(ch: char) -> Option<Sprite> {
        ch.to_digit(10).map(|d| Sprite::Digit(d as u8))
    }

    /// Dense index into `ALL`
    pub fn index(self) -> usize {
        match self {
            Sprite::Player => 0,
            Sprite::Wall => 1,
            Sprite::Background => 2,
            Sprite::Platform => 3,
            Sprite::LongPlatform => 4,
            Sprite::Clock => 5,
            Sprite::Carrot => 6,
            Sprite::GameOver => 7,
            Sprite::Digit(d) => 8 + (d.min(9) as usize),
        }
    }

    /// Image file name inside the asset directory
    pub fn file_name(self) -> &'static str {
        const DIGITS: [&str; 10] = [
            "zero.bmp", "one.bmp", "two.bmp", "three.bmp", "four.bmp", "five.bmp", "six.bmp",
            "seven.bmp", "eight.bmp", "nine.bmp",
        ];
        match self {
            Sprite::Player => "player.bmp",
            Sprite::Wall => "wall.bmp",
            Sprite::Background => "background.bmp",
            Sprite::Platform => "platform.bmp",
            Sprite::LongPlatform => "longplatform.bmp",
            Sprite::Clock => "clock.bmp",
            Sprite::Carrot => "carrot.bmp",
            Sprite::GameOver => "gameover.bmp",
            Sprite::Digit(d) => DIGITS[d.min(9) as usize],
        }
    }
}

/// Integer screen rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Truncating conversion from world coordinates
    pub fn at(x: f64, y: f64, w: u32, h: u32) -> Self {
        Self::new(x as i32, y as i32, w, h)
    }
}

/// One textured quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draw {
    pub sprite: Sprite,
    /// `None` stretches over the whole screen
    pub dest: Option<Rect>,
    /// Clockwise degrees about the rectangle's centre
    pub rotation: f64,
    /// Flip horizontally
    pub mirror: bool,
}

impl Draw {
    pub fn new(sprite: Sprite, dest: Rect) -> Self {
        Self {
            sprite,
            dest: Some(dest),
            rotation: 0.0,
            mirror: false,
        }
    }

    pub fn fullscreen(sprite: Sprite) -> Self {
        Self {
            sprite,
            dest: None,
            rotation: 0.0,
            mirror: false,
        }
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn mirrored(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }
}

/// Drawing surface the scene renders into
pub trait Canvas {
    /// Start a new frame
    fn clear(&mut self);
    /// Queue a quad; later draws cover earlier ones
    fn draw(&mut self, draw: Draw);
    /// Put the frame on screen
    fn present(&mut self) -> anyhow::Result<()>;
}
