//! The paced frame loop
//!
//! Poll input, advance the simulation one fixed step, draw, then sleep to
//! the next absolute deadline. A quit request still finishes its frame.

use anyhow::Result;

use crate::consts::SIM_DT;
use crate::platform::{Clock, FrameClock, InputSource};
use crate::renderer::{Canvas, draw_frame};
use crate::sim::{GameState, TickInput, tick};

/// Run frames until quit. Returns the number of frames played.
pub fn run_loop<I, C, K>(
    state: &mut GameState,
    input: &mut I,
    canvas: &mut C,
    clock: &mut K,
) -> Result<u64>
where
    I: InputSource + ?Sized,
    C: Canvas + ?Sized,
    K: Clock + ?Sized,
{
    let mut pacing = FrameClock::new(clock.now(), SIM_DT);
    let mut frames = 0u64;

    log::info!("Starting game loop (seed {})", state.seed);

    loop {
        let events = input.poll_events();
        let outcome = tick(state, &TickInput::new(events), SIM_DT);
        draw_frame(canvas, state)?;
        frames += 1;

        let deadline = pacing.advance();
        clock.sleep_until(deadline);

        if outcome.quit {
            break;
        }
    }

    log::info!(
        "Quit after {} frames, score {}",
        frames,
        state.run.score.as_deref().unwrap_or("-")
    );
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Sprite;
    use crate::renderer::scene::tests::RecordingCanvas;
    use crate::sim::{GameKey, InputEvent};
    use std::collections::VecDeque;
    use std::time::{Duration, Instant};

    /// Hands out one scripted batch of events per frame, then nothing
    struct ScriptedInput {
        frames: VecDeque<Vec<InputEvent>>,
    }

    impl ScriptedInput {
        fn new(frames: Vec<Vec<InputEvent>>) -> Self {
            Self {
                frames: frames.into(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            self.frames.pop_front().unwrap_or_default()
        }
    }

    /// Clock that records deadlines instead of sleeping
    struct FakeClock {
        start: Instant,
        deadlines: Vec<Instant>,
    }

    impl FakeClock {
        fn new() -> Self {
            Self {
                start: Instant::now(),
                deadlines: Vec::new(),
            }
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> Instant {
            self.start
        }

        fn sleep_until(&mut self, deadline: Instant) {
            self.deadlines.push(deadline);
        }
    }

    fn quit_after(idle_frames: usize, quit: InputEvent) -> ScriptedInput {
        let mut frames = vec![Vec::new(); idle_frames];
        frames.push(vec![quit]);
        ScriptedInput::new(frames)
    }

    #[test]
    fn test_quit_finishes_its_frame() {
        let mut state = GameState::new(1);
        let mut input = quit_after(2, InputEvent::Quit);
        let mut canvas = RecordingCanvas::default();
        let mut clock = FakeClock::new();

        let frames = run_loop(&mut state, &mut input, &mut canvas, &mut clock).unwrap();
        assert_eq!(frames, 3);
        assert_eq!(canvas.frames.len(), 3);
        assert_eq!(clock.deadlines.len(), 3);
    }

    #[test]
    fn test_q_release_quits() {
        let mut state = GameState::new(1);
        let mut input = ScriptedInput::new(vec![
            vec![InputEvent::KeyDown(GameKey::Q)],
            vec![],
            vec![InputEvent::KeyUp(GameKey::Q)],
        ]);
        let mut canvas = RecordingCanvas::default();
        let mut clock = FakeClock::new();

        let frames = run_loop(&mut state, &mut input, &mut canvas, &mut clock).unwrap();
        assert_eq!(frames, 3);
    }

    #[test]
    fn test_deadlines_are_absolute() {
        let mut state = GameState::new(1);
        let mut input = quit_after(9, InputEvent::Quit);
        let mut canvas = RecordingCanvas::default();
        let mut clock = FakeClock::new();

        run_loop(&mut state, &mut input, &mut canvas, &mut clock).unwrap();
        for (i, deadline) in clock.deadlines.iter().enumerate() {
            let expected = Duration::from_micros(16_666) * (i as u32 + 1);
            assert_eq!(*deadline - clock.start, expected);
        }
    }

    #[test]
    fn test_simulation_advances_each_frame() {
        let mut state = GameState::new(1);
        let mut frames = vec![vec![InputEvent::KeyDown(GameKey::Up)]];
        frames.extend(vec![Vec::new(); 29]);
        frames.push(vec![InputEvent::Quit]);
        let mut input = ScriptedInput::new(frames);
        let mut canvas = RecordingCanvas::default();
        let mut clock = FakeClock::new();

        run_loop(&mut state, &mut input, &mut canvas, &mut clock).unwrap();
        assert!(state.run.started);
        // The clock resets on the starting frame, which still counts its own step
        assert!((state.run.game_time - 31.0 * SIM_DT).abs() < 1e-9);
        let last = canvas.frames.last().unwrap();
        assert_eq!(last.first().map(|d| d.sprite), Some(Sprite::Background));
    }

    #[test]
    fn test_present_error_stops_loop() {
        struct BrokenCanvas;

        impl Canvas for BrokenCanvas {
            fn clear(&mut self) {}
            fn draw(&mut self, _draw: crate::renderer::Draw) {}
            fn present(&mut self) -> Result<()> {
                Err(anyhow::anyhow!("device gone"))
            }
        }

        let mut state = GameState::new(1);
        let mut input = ScriptedInput::new(Vec::new());
        let mut clock = FakeClock::new();
        let err = run_loop(&mut state, &mut input, &mut BrokenCanvas, &mut clock).unwrap_err();
        assert!(err.to_string().contains("device gone"));
        assert!(clock.deadlines.is_empty());
    }
}
