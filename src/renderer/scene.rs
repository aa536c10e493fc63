//! Frame composition
//!
//! Back to front: background, ledge, platforms, player, walls, the clock
//! indicator, then the game-over overlay with the score.

use anyhow::Result;

use super::{Canvas, Draw, Rect, Sprite};
use crate::consts::*;
use crate::sim::GameState;

const CLOCK_RECT: Rect = Rect::new(16, 64, 96, 96);
const GAME_OVER_RECT: Rect = Rect::new(0, 0, 920, 780);
const SCORE_ORIGIN: (i32, i32) = (128, 300);
const GLYPH_SIZE: (u32, u32) = (64, 128);

/// Draw one complete frame of `state` and present it
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) -> Result<()> {
    canvas.clear();
    canvas.draw(Draw::fullscreen(Sprite::Background));

    let ledge = &state.ledge;
    canvas.draw(Draw::new(
        Sprite::LongPlatform,
        Rect::at(ledge.x, ledge.y, LEDGE_WIDTH as u32, PLATFORM_HEIGHT as u32),
    ));

    for platform in &state.platforms {
        canvas.draw(Draw::new(
            Sprite::Platform,
            Rect::at(platform.x, platform.y, PLATFORM_WIDTH as u32, PLATFORM_HEIGHT as u32),
        ));
    }

    // `position` is the feet; the sprite extends upward
    let pos = state.player.position;
    canvas.draw(
        Draw::new(
            Sprite::Player,
            Rect::at(pos.x, pos.y - PLAYER_HEIGHT, PLAYER_WIDTH as u32, PLAYER_HEIGHT as u32),
        )
        .mirrored(state.mirrored()),
    );

    for wall in &state.walls {
        canvas.draw(Draw::new(
            Sprite::Wall,
            Rect::at(wall.x, wall.y, WALL_SIZE as u32, WALL_SIZE as u32),
        ));
    }

    canvas.draw(Draw::new(Sprite::Clock, CLOCK_RECT));
    canvas.draw(Draw::new(Sprite::Carrot, CLOCK_RECT).rotated(state.run.carrot_angle()));

    if !state.run.alive {
        draw_game_over(canvas, state.run.score.as_deref().unwrap_or_default());
    }

    canvas.present()
}

fn draw_game_over<C: Canvas + ?Sized>(canvas: &mut C, score: &str) {
    canvas.draw(Draw::new(Sprite::GameOver, GAME_OVER_RECT));

    let (x0, y0) = SCORE_ORIGIN;
    let (w, h) = GLYPH_SIZE;
    for (i, ch) in score.chars().enumerate() {
        // Unknown characters still take up a slot
        if let Some(glyph) = Sprite::digit(ch) {
            let x = x0 + w as i32 * i as i32;
            canvas.draw(Draw::new(glyph, Rect::new(x, y0, w, h)));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::sim::{Facing, Vec2};

    /// Canvas that keeps every frame's draw list
    #[derive(Default)]
    pub(crate) struct RecordingCanvas {
        pub(crate) current: Vec<Draw>,
        pub(crate) frames: Vec<Vec<Draw>>,
    }

    impl Canvas for RecordingCanvas {
        fn clear(&mut self) {
            self.current.clear();
        }

        fn draw(&mut self, draw: Draw) {
            self.current.push(draw);
        }

        fn present(&mut self) -> Result<()> {
            self.frames.push(std::mem::take(&mut self.current));
            Ok(())
        }
    }

    fn render(state: &GameState) -> Vec<Draw> {
        let mut canvas = RecordingCanvas::default();
        draw_frame(&mut canvas, state).unwrap();
        canvas.frames.pop().unwrap()
    }

    #[test]
    fn test_draw_order() {
        let state = GameState::new(4);
        let frame = render(&state);
        let sprites: Vec<Sprite> = frame.iter().map(|d| d.sprite).collect();

        let mut expected = vec![Sprite::Background, Sprite::LongPlatform];
        expected.extend([Sprite::Platform; PLATFORM_COUNT]);
        expected.push(Sprite::Player);
        expected.extend([Sprite::Wall; 12]);
        expected.extend([Sprite::Clock, Sprite::Carrot]);
        assert_eq!(sprites, expected);
        assert_eq!(frame[0].dest, None);
    }

    #[test]
    fn test_player_rect_hangs_from_feet() {
        let mut state = GameState::new(4);
        state.player.position = Vec2::new(320.7, 700.2);
        state.facing = Facing::Left;
        let frame = render(&state);
        let player = frame.iter().find(|d| d.sprite == Sprite::Player).unwrap();
        assert_eq!(player.dest, Some(Rect::new(320, 572, 64, 128)));
        assert!(player.mirror);
    }

    #[test]
    fn test_obstacle_rects() {
        let state = GameState::new(4);
        let frame = render(&state);
        assert_eq!(frame[1].dest, Some(Rect::new(130, 700, 700, 32)));
        let p0 = state.platforms[0];
        assert_eq!(frame[2].dest, Some(Rect::new(p0.x as i32, 600, 192, 32)));
        let walls: Vec<Rect> = frame
            .iter()
            .filter(|d| d.sprite == Sprite::Wall)
            .filter_map(|d| d.dest)
            .collect();
        assert_eq!(walls[0], Rect::new(0, 0, 128, 128));
        assert_eq!(walls[11], Rect::new(832, 640, 128, 128));
    }

    #[test]
    fn test_carrot_spins_with_time() {
        let mut state = GameState::new(4);
        state.run.started = true;
        state.run.game_time = 1.0;
        state.run.overclock = 12;
        let frame = render(&state);
        let carrot = frame.iter().find(|d| d.sprite == Sprite::Carrot).unwrap();
        assert!((carrot.rotation - 216.0).abs() < 1e-9);
        assert_eq!(carrot.dest, Some(CLOCK_RECT));
    }

    #[test]
    fn test_game_over_overlay_spells_score() {
        let mut state = GameState::new(4);
        state.run.game_time = 107.3;
        state.run.capture_score();
        state.run.alive = false;
        let frame = render(&state);

        let overlay = frame.iter().position(|d| d.sprite == Sprite::GameOver).unwrap();
        assert_eq!(frame[overlay].dest, Some(GAME_OVER_RECT));
        let glyphs: Vec<(Sprite, Option<Rect>)> = frame[overlay + 1..]
            .iter()
            .map(|d| (d.sprite, d.dest))
            .collect();
        assert_eq!(
            glyphs,
            vec![
                (Sprite::Digit(1), Some(Rect::new(128, 300, 64, 128))),
                (Sprite::Digit(0), Some(Rect::new(192, 300, 64, 128))),
                (Sprite::Digit(7), Some(Rect::new(256, 300, 64, 128))),
            ]
        );
    }

    #[test]
    fn test_overlay_without_captured_score() {
        let mut state = GameState::new(4);
        state.run.alive = false;
        let frame = render(&state);
        assert_eq!(frame.last().map(|d| d.sprite), Some(Sprite::GameOver));
    }

    #[test]
    fn test_no_overlay_while_alive() {
        let state = GameState::new(4);
        let frame = render(&state);
        assert!(frame.iter().all(|d| d.sprite != Sprite::GameOver));
    }
}
